//! dragonball-http - HTTP-backed clients for the hero API.
//!
//! [`AuthClient`] exchanges credentials for a [`Session`](dragonball_core::Session)
//! and [`HeroListClient`] uses that session to fetch the hero list.

mod auth;
mod heroes;
mod http;

pub use auth::AuthClient;
pub use heroes::HeroListClient;
