use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use axum_valid::Valid;

use crate::{
    dto::{
        score::LeaderboardEntry,
        session::{
            CreateSessionRequest, JoinSessionRequest, PlayerJoinedResponse,
            SessionCreatedResponse, SessionResponse,
        },
    },
    error::AppError,
    services::{score_service, session_service},
    state::SharedState,
};

/// Routes handling session creation, lookup, joining, and the leaderboard.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/{id}", get(get_session))
        .route("/api/sessions/{id}/join", post(join_session))
        .route("/api/sessions/{id}/leaderboard", get(get_leaderboard))
}

/// Create a new session and return its shareable identifier.
#[utoipa::path(
    post,
    path = "/api/sessions",
    tag = "sessions",
    request_body = CreateSessionRequest,
    responses(
        (status = 200, description = "Session created", body = SessionCreatedResponse)
    )
)]
pub async fn create_session(
    State(state): State<SharedState>,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<Json<SessionCreatedResponse>, AppError> {
    let created = session_service::create_session(&state, payload).await?;
    Ok(Json(created))
}

/// Check whether a session exists and return it.
#[utoipa::path(
    get,
    path = "/api/sessions/{id}",
    tag = "sessions",
    params(("id" = String, Path, description = "Identifier of the session")),
    responses(
        (status = 200, description = "Session found", body = SessionResponse),
        (status = 404, description = "Unknown session")
    )
)]
pub async fn get_session(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = session_service::get_session(&state, &id).await?;
    Ok(Json(session))
}

/// Register a player name against a session.
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/join",
    tag = "sessions",
    params(("id" = String, Path, description = "Identifier of the session to join")),
    request_body = JoinSessionRequest,
    responses(
        (status = 200, description = "Player registered", body = PlayerJoinedResponse),
        (status = 400, description = "Empty name"),
        (status = 404, description = "Unknown session")
    )
)]
pub async fn join_session(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Valid(Json(payload)): Valid<Json<JoinSessionRequest>>,
) -> Result<Json<PlayerJoinedResponse>, AppError> {
    let player = session_service::join_session(&state, &id, payload).await?;
    Ok(Json(player))
}

/// Return the session leaderboard, best delta first.
#[utoipa::path(
    get,
    path = "/api/sessions/{id}/leaderboard",
    tag = "sessions",
    params(("id" = String, Path, description = "Identifier of the session")),
    responses(
        (status = 200, description = "Ranked entries", body = [LeaderboardEntry]),
        (status = 404, description = "Unknown session")
    )
)]
pub async fn get_leaderboard(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    let entries = score_service::leaderboard(&state, &id).await?;
    Ok(Json(entries))
}
