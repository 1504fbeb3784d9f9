//! Backend traits for authentication and hero retrieval.

mod auth;
mod heroes;

pub use auth::Authenticator;
pub use heroes::HeroDirectory;
