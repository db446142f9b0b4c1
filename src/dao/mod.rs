//! Data access layer persisting sessions, players, and scores to SQLite.

pub mod models;
pub mod sqlite;
pub mod storage;
