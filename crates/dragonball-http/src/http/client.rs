//! HTTP client implementation.

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use serde::Serialize;
use tracing::{debug, instrument, trace};

use dragonball_core::error::{AuthError, EmptyResponse, ServerError, TransportError};
use dragonball_core::{BearerToken, Credentials, Error, Result};

/// HTTP client for form-encoded POST requests to the hero API.
#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a new client.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("dragonball/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Setup {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// POST an empty form authenticated with Basic-Auth.
    ///
    /// Returns the response body text. A success response without a body
    /// yields `empty`.
    #[instrument(skip(self, credentials), fields(user = %credentials.user()))]
    pub async fn post_basic(
        &self,
        url: &str,
        credentials: &Credentials,
        empty: EmptyResponse,
    ) -> Result<String> {
        debug!(%url, "POST with basic auth");

        let response = self
            .client
            .post(url)
            .basic_auth(credentials.user(), Some(credentials.password()))
            .form(&[] as &[(&str, &str)])
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response, empty).await
    }

    /// POST a form authenticated with a bearer token.
    #[instrument(skip(self, token))]
    pub async fn post_form_bearer<F>(
        &self,
        url: &str,
        form: &F,
        token: &BearerToken,
        empty: EmptyResponse,
    ) -> Result<String>
    where
        F: Serialize + std::fmt::Debug,
    {
        debug!(%url, "POST with bearer token");

        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, bearer_header(token)?)
            .form(form)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response, empty).await
    }

    /// Check the status and read the body.
    async fn handle_response(
        &self,
        response: reqwest::Response,
        empty: EmptyResponse,
    ) -> Result<String> {
        let status = response.status();
        trace!(status = %status, "HTTP response");

        if !status.is_success() {
            return Err(server_error(status).into());
        }

        let body = response.text().await.map_err(transport_error)?;
        if body.is_empty() {
            return Err(empty.into());
        }
        Ok(body)
    }
}

/// Build the `Authorization: Bearer` value, marked sensitive.
fn bearer_header(token: &BearerToken) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token.as_str()))
        .map_err(|_| AuthError::MalformedToken)?;
    value.set_sensitive(true);
    Ok(value)
}

/// Map a non-success status to its reason phrase.
fn server_error(status: StatusCode) -> ServerError {
    ServerError::new(
        status.as_u16(),
        status.canonical_reason().map(str::to_string),
    )
}

/// Map a reqwest failure to a transport error.
fn transport_error(err: reqwest::Error) -> Error {
    let err = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(err)
}
