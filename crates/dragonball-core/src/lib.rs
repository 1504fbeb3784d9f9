//! dragonball-core - Core types and traits for the hero directory client.
//!
//! All authenticated operations take an explicit [`Session`], obtained from
//! an [`Authenticator`]. There is no process-wide token.

pub mod credentials;
pub mod error;
pub mod flow;
pub mod hero;
pub mod session;
pub mod tokens;
pub mod traits;
pub mod types;
pub mod validation;

pub use credentials::Credentials;
pub use error::Error;
pub use flow::Flow;
pub use hero::{HeroRecord, HeroSummary, decode_hero_list};
pub use session::Session;
pub use tokens::BearerToken;
pub use traits::{Authenticator, HeroDirectory};
pub use types::{ApiUrl, DEFAULT_API_URL};
pub use validation::{is_pass_valid, is_user_valid};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
