//! Error types for the dragonball client.
//!
//! This module provides a unified error type with explicit variants for
//! local validation, empty responses, server failures, transport and
//! decoding errors. The `Display` output of [`Error`] is the message a
//! front end shows to the user.

use std::fmt;
use thiserror::Error;

/// The unified error type for dragonball operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Local, pre-flight validation failures.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// The server answered with a success status but no body.
    #[error(transparent)]
    EmptyResponse(#[from] EmptyResponse),

    /// The server answered with a non-success status.
    #[error(transparent)]
    Server(#[from] ServerError),

    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Session errors (missing token).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// A success body could not be decoded into the expected shape.
    #[error("malformed response body: {0}")]
    Decode(String),

    /// A [`Flow`](crate::flow::Flow) was driven out of order.
    #[error("invalid flow transition: cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// The user name is not an email-like string.
    #[error("user '{value}' must contain '@' and '.'")]
    User { value: String },

    /// The password is too short.
    #[error("password must be at least {min} characters")]
    Password { min: usize },

    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },
}

/// A success response that carried no body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmptyResponse {
    /// Login answered without a token.
    #[error("no token received")]
    Token,

    /// The hero list request answered without a list.
    #[error("no hero list received")]
    HeroList,
}

/// A non-success HTTP response.
///
/// Displays the status reason phrase verbatim, e.g. `Unauthorized`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerError {
    /// HTTP status code.
    pub status: u16,
    /// Status message reported for the response, if known.
    pub message: Option<String>,
}

impl ServerError {
    /// Create a new server error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }

    /// Check if the server rejected the credentials or token.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => f.write_str(message),
            _ => write!(f, "HTTP {}", self.status),
        }
    }
}

impl std::error::Error for ServerError {}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// The HTTP client could not be built.
    #[error("client setup failed: {message}")]
    Setup { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Session-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A session was requested without a token.
    #[error("no session token; log in first")]
    MissingToken,

    /// The token contains characters that cannot be sent in a header.
    #[error("session token is not a valid header value")]
    MalformedToken,
}
