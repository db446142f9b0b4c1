use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the Stop the Clock backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::sessions::create_session,
        crate::routes::sessions::get_session,
        crate::routes::sessions::join_session,
        crate::routes::sessions::get_leaderboard,
        crate::routes::scores::submit_score,
        crate::routes::players::has_score,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::session::CreateSessionRequest,
            crate::dto::session::SessionCreatedResponse,
            crate::dto::session::SessionResponse,
            crate::dto::session::JoinSessionRequest,
            crate::dto::session::PlayerJoinedResponse,
            crate::dto::score::SubmitScoreRequest,
            crate::dto::score::ScoreAcceptedResponse,
            crate::dto::score::ScoreSnapshot,
            crate::dto::score::HasScoreResponse,
            crate::dto::score::LeaderboardEntry,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "sessions", description = "Session creation, joining, and leaderboards"),
        (name = "scores", description = "Score submission and lookup"),
    )
)]
pub struct ApiDoc;
