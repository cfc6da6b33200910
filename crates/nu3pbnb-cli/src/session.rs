//! Session storage for persisting login state.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use nu3pbnb::SessionToken;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored session data.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    base_url: String,
    token: String,
}

/// Get the session file path.
fn session_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "nu3pbnb").context("Could not determine config directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("session.json"))
}

fn write_session(path: &Path, stored: &StoredSession) -> Result<()> {
    let json = serde_json::to_string_pretty(stored)?;
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

fn read_session(path: &Path) -> Result<Option<StoredSession>> {
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(path).context("Failed to read session file")?;
    let stored: StoredSession = serde_json::from_str(&json).context("Invalid session file")?;
    Ok(Some(stored))
}

/// Save the session token to disk.
pub fn save_token(base_url: &str, token: &SessionToken) -> Result<()> {
    let stored = StoredSession {
        base_url: base_url.to_string(),
        token: token.as_str().to_string(),
    };

    write_session(&session_path()?, &stored)
}

/// Load a previously saved session token, if one exists.
///
/// An unreadable or corrupt session file is ignored with a warning so the
/// caller proceeds unauthenticated instead of aborting.
pub fn load_token() -> Result<Option<SessionToken>> {
    Ok(token_from(&session_path()?))
}

fn token_from(path: &Path) -> Option<SessionToken> {
    match read_session(path) {
        Ok(stored) => stored.map(|stored| SessionToken::new(stored.token)),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unreadable session file");
            None
        }
    }
}

/// Clear the stored session.
pub fn clear_token() -> Result<()> {
    let path = session_path()?;

    if path.exists() {
        fs::remove_file(&path).context("Failed to remove session file")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let stored = StoredSession {
            base_url: "http://localhost:3000/api".to_string(),
            token: "jwt-token-value".to_string(),
        };
        write_session(&path, &stored).unwrap();

        let loaded = read_session(&path).unwrap().unwrap();
        assert_eq!(loaded.base_url, "http://localhost:3000/api");
        assert_eq!(loaded.token, "jwt-token-value");
    }

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        assert!(read_session(&path).unwrap().is_none());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        assert!(read_session(&path).is_err());
    }

    #[test]
    fn corrupt_file_degrades_to_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        assert!(token_from(&path).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn session_file_is_private() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let stored = StoredSession {
            base_url: "http://localhost:3000/api".to_string(),
            token: "jwt-token-value".to_string(),
        };
        write_session(&path, &stored).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
