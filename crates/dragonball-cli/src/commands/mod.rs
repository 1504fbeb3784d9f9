//! Subcommand implementations.

mod heroes;
mod login;
mod logout;
mod whoami;

use std::future::Future;

use anyhow::{Result, anyhow};
use clap::Subcommand;
use tracing::debug;

use dragonball_core::Flow;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session token
    Login(login::LoginArgs),

    /// List every hero
    Heroes(heroes::HeroesArgs),

    /// Display the active session
    Whoami(whoami::WhoamiArgs),

    /// Forget the stored session
    Logout(logout::LogoutArgs),
}

pub async fn handle(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Login(args) => login::run(args).await,
        Commands::Heroes(args) => heroes::run(args).await,
        Commands::Whoami(args) => whoami::run(args).await,
        Commands::Logout(args) => logout::run(args).await,
    }
}

/// Drive one request through a single-shot [`Flow`].
///
/// On failure the error carries only the user-facing message.
pub(crate) async fn run_flow<T, F>(request: F) -> Result<T>
where
    F: Future<Output = dragonball_core::Result<T>>,
{
    let mut flow = Flow::new();
    flow.start()?;
    flow.finish(request.await)?;

    match flow.into_outcome()? {
        Ok(value) => Ok(value),
        Err(message) => {
            debug!(%message, "request failed");
            Err(anyhow!(message))
        }
    }
}
