//! Hero directory trait.

use async_trait::async_trait;

use crate::{HeroSummary, Result, Session};

/// A source of heroes for an authenticated session.
#[async_trait]
pub trait HeroDirectory: Send + Sync {
    /// Fetch every hero visible to `session`, in source order.
    async fn fetch_all(&self, session: &Session) -> Result<Vec<HeroSummary>>;
}
