//! Authenticator trait.

use async_trait::async_trait;

use crate::{Credentials, Result, Session};

/// Exchanges credentials for a [`Session`].
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Log in with `credentials`.
    ///
    /// Does not run the local checks of [`Credentials::validate`]; callers
    /// are expected to do that first.
    async fn login(&self, credentials: &Credentials) -> Result<Session>;
}
