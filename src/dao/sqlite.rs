//! SQLite-backed store for sessions, players, and scores.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::dao::{
    models::{LeaderboardRow, PlayerRow, ScoreRow, SessionRow},
    storage::{StorageError, StorageResult},
};

/// Open (creating if missing) the SQLite database behind `url` and return a
/// store handle backed by a connection pool.
pub async fn connect(url: &str) -> StorageResult<SqliteStore> {
    let options = SqliteConnectOptions::from_str(url)
        .map_err(|err| StorageError::unavailable(format!("parsing database url `{url}`"), err))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .map_err(|err| StorageError::unavailable(format!("opening database `{url}`"), err))?;

    Ok(SqliteStore { pool })
}

/// Create the three game tables when they do not exist yet.
///
/// Called once at startup, mirroring the schema the game has always used:
/// timestamps are unix epoch seconds and the unique constraint on
/// `scores.player_id` closes the duplicate-submission race at the database.
pub async fn ensure_schema(store: &SqliteStore) -> StorageResult<()> {
    const TABLES: [&str; 3] = [
        "CREATE TABLE IF NOT EXISTS sessions (
            id TEXT PRIMARY KEY,
            hard_mode INTEGER NOT NULL DEFAULT 0,
            created_at INTEGER NOT NULL DEFAULT (unixepoch())
        )",
        "CREATE TABLE IF NOT EXISTS players (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            session_id TEXT NOT NULL REFERENCES sessions(id),
            name TEXT NOT NULL,
            joined_at INTEGER NOT NULL DEFAULT (unixepoch())
        )",
        "CREATE TABLE IF NOT EXISTS scores (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            player_id INTEGER NOT NULL UNIQUE REFERENCES players(id),
            time_ms INTEGER NOT NULL,
            delta INTEGER NOT NULL,
            created_at INTEGER NOT NULL DEFAULT (unixepoch())
        )",
    ];

    for statement in TABLES {
        sqlx::query(statement)
            .execute(store.pool())
            .await
            .map_err(|err| StorageError::unavailable("creating schema".into(), err))?;
    }

    Ok(())
}

/// Handle encapsulating every SQLite interaction of the backend.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Cheap connectivity probe used by the healthcheck route.
    pub async fn health_check(&self) -> StorageResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::unavailable("pinging database".into(), err))?;
        Ok(())
    }

    /// Persist a new session and return the stored row.
    pub async fn insert_session(&self, id: &str, hard_mode: bool) -> StorageResult<SessionRow> {
        sqlx::query_as::<_, SessionRow>(
            "INSERT INTO sessions (id, hard_mode) VALUES (?1, ?2) \
             RETURNING id, hard_mode, created_at",
        )
        .bind(id)
        .bind(hard_mode)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| StorageError::unavailable(format!("inserting session `{id}`"), err))
    }

    /// Look up a session by its identifier.
    pub async fn find_session(&self, id: &str) -> StorageResult<Option<SessionRow>> {
        sqlx::query_as::<_, SessionRow>(
            "SELECT id, hard_mode, created_at FROM sessions WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::unavailable(format!("loading session `{id}`"), err))
    }

    /// Register a player against a session and return the stored row.
    pub async fn insert_player(&self, session_id: &str, name: &str) -> StorageResult<PlayerRow> {
        sqlx::query_as::<_, PlayerRow>(
            "INSERT INTO players (session_id, name) VALUES (?1, ?2) \
             RETURNING id, session_id, name, joined_at",
        )
        .bind(session_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            StorageError::unavailable(format!("inserting player into session `{session_id}`"), err)
        })
    }

    /// Look up a player by its identifier.
    pub async fn find_player(&self, id: i64) -> StorageResult<Option<PlayerRow>> {
        sqlx::query_as::<_, PlayerRow>(
            "SELECT id, session_id, name, joined_at FROM players WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::unavailable(format!("loading player `{id}`"), err))
    }

    /// Record a score for a player.
    ///
    /// A unique-constraint violation on `player_id` surfaces as
    /// [`StorageError::DuplicateScore`] so the service layer can answer 409.
    pub async fn insert_score(
        &self,
        player_id: i64,
        time_ms: i64,
        delta: i64,
    ) -> StorageResult<ScoreRow> {
        sqlx::query_as::<_, ScoreRow>(
            "INSERT INTO scores (player_id, time_ms, delta) VALUES (?1, ?2, ?3) \
             RETURNING id, player_id, time_ms, delta, created_at",
        )
        .bind(player_id)
        .bind(time_ms)
        .bind(delta)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            if err
                .as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                StorageError::DuplicateScore { player_id }
            } else {
                StorageError::unavailable(format!("inserting score for player `{player_id}`"), err)
            }
        })
    }

    /// Return the score a player already submitted, if any.
    pub async fn find_score_for_player(&self, player_id: i64) -> StorageResult<Option<ScoreRow>> {
        sqlx::query_as::<_, ScoreRow>(
            "SELECT id, player_id, time_ms, delta, created_at FROM scores WHERE player_id = ?1",
        )
        .bind(player_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| {
            StorageError::unavailable(format!("loading score for player `{player_id}`"), err)
        })
    }

    /// Join scores with players for one session, best delta first.
    ///
    /// Ties keep insertion order via the secondary sort on the score id.
    pub async fn leaderboard(&self, session_id: &str) -> StorageResult<Vec<LeaderboardRow>> {
        sqlx::query_as::<_, LeaderboardRow>(
            "SELECT players.id AS player_id, players.name AS name, \
                    scores.time_ms AS time_ms, scores.delta AS delta \
             FROM scores \
             INNER JOIN players ON players.id = scores.player_id \
             WHERE players.session_id = ?1 \
             ORDER BY scores.delta ASC, scores.id ASC",
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|err| {
            StorageError::unavailable(format!("loading leaderboard for session `{session_id}`"), err)
        })
    }

    /// In-memory database for tests. A single pooled connection keeps the
    /// `:memory:` database alive for the whole test.
    #[cfg(test)]
    pub(crate) async fn in_memory() -> Self {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .expect("parse in-memory url")
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .expect("open in-memory database");
        let store = SqliteStore { pool };
        ensure_schema(&store).await.expect("create schema");
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn session_roundtrip() {
        let store = SqliteStore::in_memory().await;

        let created = store.insert_session("room-1", true).await.unwrap();
        assert_eq!(created.id, "room-1");
        assert!(created.hard_mode);

        let found = store.find_session("room-1").await.unwrap();
        assert_eq!(found, Some(created));
        assert!(store.find_session("room-2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn second_score_for_player_is_a_duplicate() {
        let store = SqliteStore::in_memory().await;
        store.insert_session("room-1", false).await.unwrap();
        let player = store.insert_player("room-1", "Ada").await.unwrap();

        store.insert_score(player.id, 10_050, 50).await.unwrap();
        let err = store.insert_score(player.id, 9_000, 1_000).await.unwrap_err();
        assert!(matches!(
            err,
            StorageError::DuplicateScore { player_id } if player_id == player.id
        ));

        // The first submission is untouched.
        let stored = store.find_score_for_player(player.id).await.unwrap().unwrap();
        assert_eq!(stored.time_ms, 10_050);
        assert_eq!(stored.delta, 50);
    }

    #[tokio::test]
    async fn leaderboard_orders_by_delta_within_session() {
        let store = SqliteStore::in_memory().await;
        store.insert_session("room-1", false).await.unwrap();
        store.insert_session("room-2", false).await.unwrap();

        let ada = store.insert_player("room-1", "Ada").await.unwrap();
        let ben = store.insert_player("room-1", "Ben").await.unwrap();
        let eve = store.insert_player("room-2", "Eve").await.unwrap();

        store.insert_score(ben.id, 9_000, 1_000).await.unwrap();
        store.insert_score(ada.id, 10_050, 50).await.unwrap();
        store.insert_score(eve.id, 10_001, 1).await.unwrap();

        let rows = store.leaderboard("room-1").await.unwrap();
        let names: Vec<_> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, ["Ada", "Ben"]);
        assert_eq!(rows[0].delta, 50);

        assert!(store.leaderboard("room-3").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn players_require_an_existing_session() {
        let store = SqliteStore::in_memory().await;
        let err = store.insert_player("ghost", "Ada").await.unwrap_err();
        assert!(matches!(err, StorageError::Unavailable { .. }));
    }
}
