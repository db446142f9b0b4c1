use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::score::{ScoreAcceptedResponse, SubmitScoreRequest},
    error::AppError,
    services::score_service,
    state::SharedState,
};

/// Routes handling score submission.
pub fn router() -> Router<SharedState> {
    Router::new().route("/api/scores", post(submit_score))
}

/// Record a player's single stop-the-clock attempt.
#[utoipa::path(
    post,
    path = "/api/scores",
    tag = "scores",
    request_body = SubmitScoreRequest,
    responses(
        (status = 200, description = "Score recorded", body = ScoreAcceptedResponse),
        (status = 400, description = "Missing playerId or timeMs"),
        (status = 404, description = "Unknown player"),
        (status = 409, description = "Player already has a score")
    )
)]
pub async fn submit_score(
    State(state): State<SharedState>,
    Json(payload): Json<SubmitScoreRequest>,
) -> Result<Json<ScoreAcceptedResponse>, AppError> {
    let accepted = score_service::submit_score(&state, payload).await?;
    Ok(Json(accepted))
}
