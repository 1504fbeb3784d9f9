//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use dragonball_core::{ApiUrl, Authenticator, Credentials, DEFAULT_API_URL, Session};
use dragonball_http::AuthClient;

use super::run_flow;
use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Email address to log in with
    #[arg(long)]
    pub user: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// API base URL
    #[arg(long, env = "DRAGONBALL_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

pub async fn run(args: LoginArgs) -> Result<()> {
    let api = ApiUrl::new(&args.api_url).context("Invalid API URL")?;
    let credentials = Credentials::new(&args.user, &args.password);

    let client = AuthClient::new(api).context("Failed to create HTTP client")?;

    eprintln!("{}", "Logging in...".dimmed());
    let session = login(&client, &credentials).await?;

    storage::save_session(&session).context("Failed to save session")?;

    output::success("Logged in successfully");
    println!();
    output::field("API", session.api().as_str());

    Ok(())
}

/// Check the credentials locally, then log in.
///
/// Nothing is sent when the local checks fail.
pub(crate) async fn login<A>(auth: &A, credentials: &Credentials) -> Result<Session>
where
    A: Authenticator + ?Sized,
{
    credentials.validate().context("Invalid credentials")?;

    run_flow(auth.login(credentials))
        .await
        .context("Login failed")
}
