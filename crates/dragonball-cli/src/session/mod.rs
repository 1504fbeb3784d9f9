//! Persisted login state.

pub mod storage;

use chrono::{DateTime, Utc};

use dragonball_core::Session;

/// A session restored from disk, with the time it was issued.
#[derive(Debug, Clone)]
pub struct SavedSession {
    pub session: Session,
    pub logged_in_at: DateTime<Utc>,
}
