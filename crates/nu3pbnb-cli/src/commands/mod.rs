//! Subcommand implementations, grouped per API domain.

pub mod auth;
pub mod bookings;
pub mod listings;
pub mod messages;
pub mod payments;
pub mod reviews;

use anyhow::{Context, Result};

use nu3pbnb::{ApiClient, ApiKey, ApiUrl, Session};

use crate::cli::Cli;
use crate::session as storage;

/// Shared command context built from the global CLI flags.
pub struct Ctx {
    pub base_url: ApiUrl,
    pub api_key: ApiKey,
}

impl Ctx {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let base_url = ApiUrl::new(&cli.base_url).context("Invalid base URL")?;
        Ok(Self {
            base_url,
            api_key: ApiKey::new(&cli.api_key),
        })
    }

    /// Build a client with a fresh, unauthenticated session.
    pub fn client(&self) -> (ApiClient, Session) {
        let session = Session::new();
        let client = ApiClient::new(
            self.base_url.clone(),
            self.api_key.clone(),
            session.clone(),
        );
        (client, session)
    }

    /// Build a client carrying the persisted session token, if one exists.
    pub fn authenticated_client(&self) -> Result<(ApiClient, Session)> {
        let (client, session) = self.client();
        if let Some(token) = storage::load_token().context("Failed to load session")? {
            session.set_token(token);
        }
        Ok((client, session))
    }
}
