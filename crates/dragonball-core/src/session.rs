//! Authenticated session.

use crate::Result;
use crate::error::AuthError;
use crate::tokens::BearerToken;
use crate::types::ApiUrl;

/// A session issued by the login endpoint.
///
/// Holds the API it was issued by and the bearer token for subsequent
/// requests. A session always carries a non-empty token, so any operation
/// that takes a `&Session` can assume the user has logged in.
///
/// Sessions are immutable; logging in again yields a new one.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    api: ApiUrl,
    token: BearerToken,
}

impl Session {
    /// Create a session for `api` from a token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingToken`] if the token is empty.
    pub fn new(api: ApiUrl, token: BearerToken) -> Result<Self> {
        if token.is_empty() {
            return Err(AuthError::MissingToken.into());
        }
        Ok(Self { api, token })
    }

    /// Restore a session from a persisted token string.
    pub fn from_persisted(api: ApiUrl, token: impl Into<String>) -> Result<Self> {
        Self::new(api, BearerToken::new(token))
    }

    /// Returns the API this session belongs to.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// Returns the bearer token.
    pub fn token(&self) -> &BearerToken {
        &self.token
    }
}

// Custom Debug impl that hides sensitive data
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("api", &self.api)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
