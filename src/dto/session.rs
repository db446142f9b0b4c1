//! DTO definitions for session creation, lookup, and joining.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dao::models::{PlayerRow, SessionRow},
    dto::{format_unix_timestamp, validation::validate_player_name},
};

/// Payload used to create a new game session.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    /// Hide the live timer display while the clock runs.
    #[serde(default)]
    pub hard_mode: bool,
}

/// Response returned when a session was created.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreatedResponse {
    /// Shareable identifier of the new session.
    pub id: Uuid,
    /// Whether the session runs in hard mode.
    pub hard_mode: bool,
}

/// Full session projection returned by the lookup route.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    /// Shareable identifier of the session.
    pub id: String,
    /// Whether the session runs in hard mode.
    pub hard_mode: bool,
    /// Creation time, RFC 3339.
    pub created_at: String,
}

impl From<SessionRow> for SessionResponse {
    fn from(row: SessionRow) -> Self {
        Self {
            id: row.id,
            hard_mode: row.hard_mode,
            created_at: format_unix_timestamp(row.created_at),
        }
    }
}

/// Payload used to join an existing session.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct JoinSessionRequest {
    /// Display name shown on the leaderboard.
    #[validate(custom(function = validate_player_name))]
    pub name: String,
}

/// Response returned when a player joined a session.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlayerJoinedResponse {
    /// Identifier assigned to the player.
    pub id: i64,
    /// Display name as stored.
    pub name: String,
}

impl From<PlayerRow> for PlayerJoinedResponse {
    fn from(row: PlayerRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}
