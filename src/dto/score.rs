//! DTO definitions for score submission and the leaderboard.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    dao::models::{LeaderboardRow, ScoreRow},
    dto::format_unix_timestamp,
};

/// Payload submitting a stop time for a player.
///
/// Both fields are optional on the wire so a missing one surfaces as a 400
/// instead of a deserialization rejection.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitScoreRequest {
    /// Player the submission belongs to.
    pub player_id: Option<i64>,
    /// Elapsed milliseconds measured by the client.
    pub time_ms: Option<i64>,
}

/// Response returned when a score was recorded.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScoreAcceptedResponse {
    /// Always `true`; kept for the historical wire format.
    pub success: bool,
    /// Absolute deviation from the 10 000 ms target.
    pub delta: i64,
}

/// Stored score as exposed by the has-score route.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSnapshot {
    /// Elapsed milliseconds as submitted.
    pub time_ms: i64,
    /// Absolute deviation from the target.
    pub delta: i64,
    /// Submission time, RFC 3339.
    pub created_at: String,
}

impl From<ScoreRow> for ScoreSnapshot {
    fn from(row: ScoreRow) -> Self {
        Self {
            time_ms: row.time_ms,
            delta: row.delta,
            created_at: format_unix_timestamp(row.created_at),
        }
    }
}

/// Response telling a reloading client whether it already played.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HasScoreResponse {
    /// True when a score is recorded for the player.
    pub has_score: bool,
    /// The recorded score, present when `has_score` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreSnapshot>,
}

/// One line of the session leaderboard.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Identifier of the player.
    pub player_id: i64,
    /// Display name of the player.
    pub name: String,
    /// Elapsed milliseconds as submitted.
    pub time_ms: i64,
    /// Absolute deviation from the target.
    pub delta: i64,
}

impl From<LeaderboardRow> for LeaderboardEntry {
    fn from(row: LeaderboardRow) -> Self {
        Self {
            player_id: row.player_id,
            name: row.name,
            time_ms: row.time_ms,
            delta: row.delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn has_score_omits_the_score_when_absent() {
        let value = serde_json::to_value(HasScoreResponse {
            has_score: false,
            score: None,
        })
        .unwrap();
        assert_eq!(value, json!({"hasScore": false}));
    }

    #[test]
    fn leaderboard_entries_keep_the_historical_wire_format() {
        let value = serde_json::to_value(LeaderboardEntry {
            player_id: 3,
            name: "Ada".into(),
            time_ms: 10_050,
            delta: 50,
        })
        .unwrap();
        assert_eq!(
            value,
            json!({"playerId": 3, "name": "Ada", "timeMs": 10_050, "delta": 50})
        );
    }

    #[test]
    fn submissions_tolerate_missing_fields() {
        let request: SubmitScoreRequest = serde_json::from_value(json!({"timeMs": 9_000})).unwrap();
        assert_eq!(request.player_id, None);
        assert_eq!(request.time_ms, Some(9_000));
    }
}
