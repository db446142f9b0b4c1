use uuid::Uuid;

use crate::{
    dto::session::{
        CreateSessionRequest, JoinSessionRequest, PlayerJoinedResponse, SessionCreatedResponse,
        SessionResponse,
    },
    error::ServiceError,
    state::SharedState,
};

/// Create a fresh session under a random UUID and persist it.
pub async fn create_session(
    state: &SharedState,
    request: CreateSessionRequest,
) -> Result<SessionCreatedResponse, ServiceError> {
    let id = Uuid::new_v4();
    let row = state
        .store()
        .insert_session(&id.to_string(), request.hard_mode)
        .await?;

    Ok(SessionCreatedResponse {
        id,
        hard_mode: row.hard_mode,
    })
}

/// Look up a session by its shareable identifier.
pub async fn get_session(state: &SharedState, id: &str) -> Result<SessionResponse, ServiceError> {
    let Some(row) = state.store().find_session(id).await? else {
        return Err(ServiceError::NotFound(format!("session `{id}` not found")));
    };

    Ok(row.into())
}

/// Register a player name against an existing session.
pub async fn join_session(
    state: &SharedState,
    session_id: &str,
    request: JoinSessionRequest,
) -> Result<PlayerJoinedResponse, ServiceError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(ServiceError::InvalidInput("name must not be empty".into()));
    }

    if state.store().find_session(session_id).await?.is_none() {
        return Err(ServiceError::NotFound(format!(
            "session `{session_id}` not found"
        )));
    }

    let row = state.store().insert_player(session_id, name).await?;
    Ok(row.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dao::sqlite::SqliteStore, state::AppState};

    async fn test_state() -> SharedState {
        AppState::new(SqliteStore::in_memory().await)
    }

    #[tokio::test]
    async fn created_sessions_can_be_looked_up() {
        let state = test_state().await;

        let created = create_session(&state, CreateSessionRequest { hard_mode: true })
            .await
            .unwrap();
        assert!(created.hard_mode);

        let found = get_session(&state, &created.id.to_string()).await.unwrap();
        assert_eq!(found.id, created.id.to_string());
        assert!(found.hard_mode);
    }

    #[tokio::test]
    async fn unknown_session_lookup_is_not_found() {
        let state = test_state().await;
        let err = get_session(&state, "nope").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn joining_assigns_sequential_player_ids() {
        let state = test_state().await;
        let session = create_session(&state, CreateSessionRequest::default())
            .await
            .unwrap();
        let session_id = session.id.to_string();

        let ada = join_session(&state, &session_id, JoinSessionRequest { name: "Ada".into() })
            .await
            .unwrap();
        let ben = join_session(&state, &session_id, JoinSessionRequest { name: "Ben".into() })
            .await
            .unwrap();

        assert_eq!(ada.name, "Ada");
        assert!(ben.id > ada.id);
    }

    #[tokio::test]
    async fn joining_an_unknown_session_is_not_found() {
        let state = test_state().await;
        let err = join_session(&state, "ghost", JoinSessionRequest { name: "Ada".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn joining_with_a_blank_name_is_invalid() {
        let state = test_state().await;
        let session = create_session(&state, CreateSessionRequest::default())
            .await
            .unwrap();

        let err = join_session(
            &state,
            &session.id.to_string(),
            JoinSessionRequest { name: "   ".into() },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }
}
