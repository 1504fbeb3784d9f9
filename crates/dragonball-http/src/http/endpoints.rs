//! Endpoint paths and request bodies.

use serde::Serialize;

/// Exchanges Basic-Auth credentials for a bearer token.
pub const AUTH_LOGIN: &str = "auth/login";

/// Returns every hero as a JSON array.
pub const HEROS_ALL: &str = "heros/all";

/// Form body for `heros/all`.
///
/// The API requires a `name` field; an empty value matches every hero.
#[derive(Debug, Default, Serialize)]
pub struct HeroListForm<'a> {
    pub name: &'a str,
}
