//! HTTP-backed hero directory.

use async_trait::async_trait;
use tracing::{debug, instrument};

use dragonball_core::error::EmptyResponse;
use dragonball_core::traits::HeroDirectory;
use dragonball_core::{HeroSummary, Result, Session, decode_hero_list};

use crate::http::client::ApiClient;
use crate::http::endpoints::{HEROS_ALL, HeroListForm};

/// Fetches the hero list from `heros/all`.
///
/// The target API is taken from the session, so one client serves
/// sessions from any API.
#[derive(Debug, Clone)]
pub struct HeroListClient {
    client: ApiClient,
}

impl HeroListClient {
    /// Create a hero list client with its own connection pool.
    pub fn new() -> Result<Self> {
        Ok(Self::from_client(ApiClient::new()?))
    }

    pub(crate) fn from_client(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch every hero, in API order.
    ///
    /// One request, no retry, no pagination.
    ///
    /// # Errors
    ///
    /// - [`EmptyResponse::HeroList`] if the server answers without a body.
    /// - A decode error if the body is not a JSON array of hero records.
    /// - A server error carrying the status reason phrase on non-2xx.
    #[instrument(skip(self, session), fields(api = %session.api()))]
    pub async fn fetch_all(&self, session: &Session) -> Result<Vec<HeroSummary>> {
        debug!("Fetching hero list");

        let url = session.api().endpoint(HEROS_ALL);
        let body = self
            .client
            .post_form_bearer(
                &url,
                &HeroListForm::default(),
                session.token(),
                EmptyResponse::HeroList,
            )
            .await?;

        let heroes = decode_hero_list(&body)?;
        debug!(count = heroes.len(), "Hero list decoded");
        Ok(heroes)
    }
}

#[async_trait]
impl HeroDirectory for HeroListClient {
    async fn fetch_all(&self, session: &Session) -> Result<Vec<HeroSummary>> {
        HeroListClient::fetch_all(self, session).await
    }
}
