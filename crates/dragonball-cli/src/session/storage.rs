//! Session storage for persisting login state.
//!
//! Only the API URL and bearer token are stored; credentials never are.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use dragonball_core::{ApiUrl, Session};

use super::SavedSession;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored session data.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    api_url: String,
    token: String,
    logged_in_at: DateTime<Utc>,
}

/// Get the session file path.
fn session_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "dragonball").context("Could not determine data directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("session.json"))
}

/// Save a session to disk.
pub fn save_session(session: &Session) -> Result<()> {
    write_session(&session_path()?, session, Utc::now())
}

/// Load a session from disk.
pub fn load_session() -> Result<Option<SavedSession>> {
    read_session(&session_path()?)
}

/// Clear the stored session. Returns whether a session existed.
pub fn clear_session() -> Result<bool> {
    remove_session(&session_path()?)
}

fn write_session(path: &Path, session: &Session, logged_in_at: DateTime<Utc>) -> Result<()> {
    let stored = StoredSession {
        api_url: session.api().to_string(),
        token: session.token().as_str().to_string(),
        logged_in_at,
    };

    let json = serde_json::to_string_pretty(&stored)?;
    fs::write(path, &json).context("Failed to write session file")?;

    // Set restrictive permissions (Unix only)
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms)?;
    }

    Ok(())
}

fn read_session(path: &Path) -> Result<Option<SavedSession>> {
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(path).context("Failed to read session file")?;
    let stored: StoredSession = serde_json::from_str(&json).context("Invalid session file")?;

    let api = ApiUrl::new(&stored.api_url).context("Invalid API URL in session")?;
    let session =
        Session::from_persisted(api, stored.token).context("Invalid token in session")?;

    Ok(Some(SavedSession {
        session,
        logged_in_at: stored.logged_in_at,
    }))
}

fn remove_session(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }

    fs::remove_file(path).context("Failed to remove session file")?;
    Ok(true)
}
