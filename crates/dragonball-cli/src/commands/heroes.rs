//! Heroes command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use dragonball_core::{HeroDirectory, HeroSummary, Session};
use dragonball_http::HeroListClient;

use super::run_flow;
use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct HeroesArgs {
    /// Print one JSON object per hero
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: HeroesArgs) -> Result<()> {
    let saved = storage::load_session()
        .context("Failed to load session")?
        .context("No active session. Run 'dragonball login' first.")?;

    let client = HeroListClient::new().context("Failed to create HTTP client")?;
    let heroes = fetch(&client, &saved.session).await?;

    if heroes.is_empty() {
        eprintln!("{}", "No heroes found.".dimmed());
        return Ok(());
    }

    for hero in &heroes {
        if args.json {
            output::json(hero)?;
        } else {
            println!("{}", format_hero(hero));
        }
    }

    Ok(())
}

pub(crate) async fn fetch<D>(directory: &D, session: &Session) -> Result<Vec<HeroSummary>>
where
    D: HeroDirectory + ?Sized,
{
    run_flow(directory.fetch_all(session))
        .await
        .context("Failed to fetch heroes")
}

fn format_hero(hero: &HeroSummary) -> String {
    format!("{}  {}", hero.name.bold(), hero.image_url.dimmed())
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use dragonball_core::ApiUrl;
    use dragonball_core::error::ServerError;

    struct FakeDirectory(Option<Vec<HeroSummary>>);

    #[async_trait]
    impl HeroDirectory for FakeDirectory {
        async fn fetch_all(&self, _session: &Session) -> dragonball_core::Result<Vec<HeroSummary>> {
            self.0
                .clone()
                .ok_or_else(|| ServerError::new(500, Some("Internal Server Error".into())).into())
        }
    }

    fn session() -> Session {
        Session::from_persisted(ApiUrl::default(), "tok").unwrap()
    }

    #[tokio::test]
    async fn fetch_returns_heroes() {
        let directory = FakeDirectory(Some(vec![HeroSummary::new("Goku", "u1")]));
        let heroes = fetch(&directory, &session()).await.unwrap();
        assert_eq!(heroes, vec![HeroSummary::new("Goku", "u1")]);
    }

    #[tokio::test]
    async fn fetch_reports_server_message() {
        let err = fetch(&FakeDirectory(None), &session()).await.unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "Failed to fetch heroes: Internal Server Error"
        );
    }

    #[test]
    fn hero_line_has_name_and_url() {
        colored::control::set_override(false);
        assert_eq!(format_hero(&HeroSummary::new("Goku", "u1")), "Goku  u1");
    }
}
