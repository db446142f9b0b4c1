use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::score::HasScoreResponse, error::AppError, services::score_service, state::SharedState,
};

/// Routes exposing per-player lookups.
pub fn router() -> Router<SharedState> {
    Router::new().route("/api/players/{id}/has-score", get(has_score))
}

/// Tell a reloading client whether the player already played.
#[utoipa::path(
    get,
    path = "/api/players/{id}/has-score",
    tag = "scores",
    params(("id" = i64, Path, description = "Identifier of the player")),
    responses(
        (status = 200, description = "Played-state of the player", body = HasScoreResponse)
    )
)]
pub async fn has_score(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<HasScoreResponse>, AppError> {
    let response = score_service::has_score(&state, id).await?;
    Ok(Json(response))
}
