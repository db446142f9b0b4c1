use std::collections::HashSet;

use crate::{
    dto::score::{HasScoreResponse, LeaderboardEntry, ScoreAcceptedResponse, SubmitScoreRequest},
    error::ServiceError,
    state::SharedState,
};

/// Target the players aim for, in milliseconds.
const TARGET_MS: i64 = 10_000;

/// Absolute deviation of a submitted stop time from the target.
fn delta_from_target(time_ms: i64) -> i64 {
    (time_ms - TARGET_MS).abs()
}

/// Record a player's single attempt and return the computed delta.
///
/// The friendly path rejects a second attempt with a conflict after a lookup;
/// the unique constraint on `scores.player_id` catches the race where two
/// submissions for one player slip past that check concurrently.
pub async fn submit_score(
    state: &SharedState,
    request: SubmitScoreRequest,
) -> Result<ScoreAcceptedResponse, ServiceError> {
    let (Some(player_id), Some(time_ms)) = (request.player_id, request.time_ms) else {
        return Err(ServiceError::InvalidInput(
            "playerId and timeMs are required".into(),
        ));
    };

    if state.store().find_player(player_id).await?.is_none() {
        return Err(ServiceError::NotFound(format!(
            "player `{player_id}` not found"
        )));
    }

    if state.store().find_score_for_player(player_id).await?.is_some() {
        return Err(ServiceError::Conflict(format!(
            "player `{player_id}` already has a score"
        )));
    }

    let delta = delta_from_target(time_ms);
    let row = state.store().insert_score(player_id, time_ms, delta).await?;

    Ok(ScoreAcceptedResponse {
        success: true,
        delta: row.delta,
    })
}

/// Tell a reloading client whether the player already played, and with what.
pub async fn has_score(
    state: &SharedState,
    player_id: i64,
) -> Result<HasScoreResponse, ServiceError> {
    let score = state.store().find_score_for_player(player_id).await?;

    Ok(HasScoreResponse {
        has_score: score.is_some(),
        score: score.map(Into::into),
    })
}

/// Build the session leaderboard: best delta first, one entry per player.
///
/// The query already sorts ascending by delta, so keeping the first entry
/// seen per player keeps the best one. With the unique score constraint this
/// deduplication is a safety net rather than a load-bearing step.
pub async fn leaderboard(
    state: &SharedState,
    session_id: &str,
) -> Result<Vec<LeaderboardEntry>, ServiceError> {
    if state.store().find_session(session_id).await?.is_none() {
        return Err(ServiceError::NotFound(format!(
            "session `{session_id}` not found"
        )));
    }

    let rows = state.store().leaderboard(session_id).await?;

    let mut seen = HashSet::new();
    let entries = rows
        .into_iter()
        .filter(|row| seen.insert(row.player_id))
        .map(Into::into)
        .collect();

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dao::sqlite::SqliteStore,
        dto::session::{CreateSessionRequest, JoinSessionRequest},
        services::session_service,
        state::AppState,
    };

    async fn session_with_players(names: &[&str]) -> (SharedState, String, Vec<i64>) {
        let state = AppState::new(SqliteStore::in_memory().await);
        let session = session_service::create_session(&state, CreateSessionRequest::default())
            .await
            .unwrap();
        let session_id = session.id.to_string();

        let mut player_ids = Vec::new();
        for name in names {
            let player = session_service::join_session(
                &state,
                &session_id,
                JoinSessionRequest {
                    name: (*name).into(),
                },
            )
            .await
            .unwrap();
            player_ids.push(player.id);
        }

        (state, session_id, player_ids)
    }

    fn submission(player_id: i64, time_ms: i64) -> SubmitScoreRequest {
        SubmitScoreRequest {
            player_id: Some(player_id),
            time_ms: Some(time_ms),
        }
    }

    #[test]
    fn delta_is_the_absolute_deviation() {
        assert_eq!(delta_from_target(10_050), 50);
        assert_eq!(delta_from_target(9_000), 1_000);
        assert_eq!(delta_from_target(10_000), 0);
        assert_eq!(delta_from_target(0), 10_000);
    }

    #[tokio::test]
    async fn submitting_computes_the_delta_server_side() {
        let (state, _, players) = session_with_players(&["Ada"]).await;

        let accepted = submit_score(&state, submission(players[0], 10_050))
            .await
            .unwrap();
        assert!(accepted.success);
        assert_eq!(accepted.delta, 50);
    }

    #[tokio::test]
    async fn missing_fields_are_invalid_input() {
        let (state, _, players) = session_with_players(&["Ada"]).await;

        let no_time = SubmitScoreRequest {
            player_id: Some(players[0]),
            time_ms: None,
        };
        assert!(matches!(
            submit_score(&state, no_time).await.unwrap_err(),
            ServiceError::InvalidInput(_)
        ));

        let no_player = SubmitScoreRequest {
            player_id: None,
            time_ms: Some(10_000),
        };
        assert!(matches!(
            submit_score(&state, no_player).await.unwrap_err(),
            ServiceError::InvalidInput(_)
        ));
    }

    #[tokio::test]
    async fn unknown_player_is_not_found() {
        let (state, _, _) = session_with_players(&[]).await;
        let err = submit_score(&state, submission(42, 10_000)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn second_submission_conflicts_and_keeps_the_first_score() {
        let (state, _, players) = session_with_players(&["Ada"]).await;

        submit_score(&state, submission(players[0], 10_050))
            .await
            .unwrap();
        let err = submit_score(&state, submission(players[0], 9_999))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));

        let stored = has_score(&state, players[0]).await.unwrap();
        assert!(stored.has_score);
        let score = stored.score.unwrap();
        assert_eq!(score.time_ms, 10_050);
        assert_eq!(score.delta, 50);
    }

    #[tokio::test]
    async fn has_score_is_false_before_playing() {
        let (state, _, players) = session_with_players(&["Ada"]).await;
        let response = has_score(&state, players[0]).await.unwrap();
        assert!(!response.has_score);
        assert!(response.score.is_none());
    }

    #[tokio::test]
    async fn leaderboard_ranks_ascending_by_delta() {
        let (state, session_id, players) = session_with_players(&["Ada", "Ben", "Cid"]).await;

        submit_score(&state, submission(players[0], 10_050)).await.unwrap();
        submit_score(&state, submission(players[1], 9_000)).await.unwrap();
        submit_score(&state, submission(players[2], 10_001)).await.unwrap();

        let entries = leaderboard(&state, &session_id).await.unwrap();
        let ranked: Vec<_> = entries
            .iter()
            .map(|entry| (entry.name.as_str(), entry.delta))
            .collect();
        assert_eq!(ranked, [("Cid", 1), ("Ada", 50), ("Ben", 1_000)]);
    }

    #[tokio::test]
    async fn empty_session_yields_an_empty_leaderboard() {
        let (state, session_id, _) = session_with_players(&["Ada"]).await;
        assert!(leaderboard(&state, &session_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn leaderboard_for_an_unknown_session_is_not_found() {
        let (state, _, _) = session_with_players(&[]).await;
        let err = leaderboard(&state, "ghost").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
