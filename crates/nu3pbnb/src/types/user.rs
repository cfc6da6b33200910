//! User account types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::SessionToken;

/// A user account as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Object id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Account role.
    #[serde(default)]
    pub role: Option<Role>,
    /// UI theme preference, when the user has set one.
    #[serde(default)]
    pub theme_preference: Option<String>,
}

/// Account roles recognized by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Can browse listings and make bookings.
    Guest,
    /// Can manage property listings.
    Host,
    /// Full platform access.
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Guest => "guest",
            Role::Host => "host",
            Role::Admin => "admin",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guest" => Ok(Role::Guest),
            "host" => Ok(Role::Host),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// Request body for registering a new account.
#[derive(Clone, Serialize)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Requested role; the server defaults to guest when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

// Hide the password in Debug output.
impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

/// Request body for updating the authenticated user's profile.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New theme preference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_preference: Option<String>,
}

/// Response from `/auth/register` and `/auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    /// Human-readable status message.
    #[serde(default)]
    pub message: Option<String>,
    /// Bearer token for the new session, when authentication succeeded.
    #[serde(default)]
    pub token: Option<SessionToken>,
    /// The authenticated user.
    pub user: User,
}

/// Response from `/auth/profile`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    /// The authenticated user.
    pub user: User,
}
