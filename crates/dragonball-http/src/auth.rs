//! HTTP-backed authenticator.

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use dragonball_core::error::EmptyResponse;
use dragonball_core::traits::Authenticator;
use dragonball_core::{ApiUrl, BearerToken, Credentials, Result, Session};

use crate::heroes::HeroListClient;
use crate::http::client::ApiClient;
use crate::http::endpoints::AUTH_LOGIN;

/// Logs in against `auth/login` and hands out [`Session`]s.
#[derive(Debug, Clone)]
pub struct AuthClient {
    api: ApiUrl,
    client: ApiClient,
}

impl AuthClient {
    /// Create an authenticator for the given API.
    pub fn new(api: ApiUrl) -> Result<Self> {
        Ok(Self {
            api,
            client: ApiClient::new()?,
        })
    }

    /// Returns the API URL this client logs in against.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// A hero list client sharing this client's connection pool.
    pub fn hero_list(&self) -> HeroListClient {
        HeroListClient::from_client(self.client.clone())
    }

    /// Exchange credentials for a session token.
    ///
    /// The credentials are sent as Basic-Auth with an empty form body. The
    /// response body, verbatim, becomes the session token.
    ///
    /// # Errors
    ///
    /// - [`EmptyResponse::Token`] if the server answers without a body.
    /// - A server error carrying the status reason phrase on non-2xx.
    /// - A transport error if the request could not be sent.
    #[instrument(skip(self, credentials), fields(api = %self.api, user = %credentials.user()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        info!("Logging in");

        let url = self.api.endpoint(AUTH_LOGIN);
        let body = self
            .client
            .post_basic(&url, credentials, EmptyResponse::Token)
            .await?;

        let session = Session::new(self.api.clone(), BearerToken::new(body))?;
        debug!("Session token received");
        Ok(session)
    }
}

#[async_trait]
impl Authenticator for AuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<Session> {
        AuthClient::login(self, credentials).await
    }
}
