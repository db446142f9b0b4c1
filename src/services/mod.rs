//! Business logic sitting between the HTTP routes and the SQLite store.

pub mod documentation;
pub mod health_service;
pub mod score_service;
pub mod session_service;
