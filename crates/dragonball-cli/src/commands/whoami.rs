//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs) -> Result<()> {
    let saved = storage::load_session()
        .context("Failed to load session")?
        .context("No active session. Run 'dragonball login' first.")?;

    output::field("API", saved.session.api().as_str());
    output::field("Logged in", &saved.logged_in_at.to_rfc3339());

    Ok(())
}
