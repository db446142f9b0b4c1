use sqlx::FromRow;

/// Row of the `sessions` table.
#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct SessionRow {
    /// UUID of the session, stored as its hyphenated text form.
    pub id: String,
    /// Whether the live timer display is hidden while the clock runs.
    pub hard_mode: bool,
    /// Creation time as unix epoch seconds.
    pub created_at: i64,
}

/// Row of the `players` table.
#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct PlayerRow {
    /// Autoincremented player identifier.
    pub id: i64,
    /// Session this player joined.
    pub session_id: String,
    /// Display name chosen by the player.
    pub name: String,
    /// Join time as unix epoch seconds.
    pub joined_at: i64,
}

/// Row of the `scores` table.
#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct ScoreRow {
    /// Autoincremented score identifier.
    pub id: i64,
    /// Player this score belongs to. Unique: one attempt per player.
    pub player_id: i64,
    /// Elapsed milliseconds as submitted by the client.
    pub time_ms: i64,
    /// Absolute deviation from the 10 000 ms target.
    pub delta: i64,
    /// Submission time as unix epoch seconds.
    pub created_at: i64,
}

/// Joined scores+players projection used by the leaderboard query.
#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct LeaderboardRow {
    /// Identifier of the player that submitted the score.
    pub player_id: i64,
    /// Display name of the player.
    pub name: String,
    /// Elapsed milliseconds as submitted.
    pub time_ms: i64,
    /// Absolute deviation from the target.
    pub delta: i64,
}
