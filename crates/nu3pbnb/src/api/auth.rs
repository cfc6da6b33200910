//! Authentication and profile operations.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{AuthResponse, Credentials, NewUser, ProfileResponse, ProfileUpdate, User};

/// Request body for `/auth/login`.
#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// Register a new user account via `POST /auth/register`.
    ///
    /// On success, if the response carries a token, it is stored on the
    /// client's [`Session`](crate::Session) and attached to all subsequent
    /// requests. This and [`login`](Self::login) are the only operations that
    /// mutate session state.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn register(&self, user: &NewUser) -> Result<AuthResponse, Error> {
        debug!("Registering user");
        let response: AuthResponse = self.post("/auth/register", user).await?;

        if let Some(token) = &response.token {
            self.session().set_token(token.clone());
        }

        Ok(response)
    }

    /// Authenticate via `POST /auth/login`.
    ///
    /// On success, if the response carries a token, it becomes the session
    /// token for subsequent requests.
    #[instrument(skip(self, credentials), fields(email = %credentials.email()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, Error> {
        debug!("Logging in");
        let request = LoginRequest {
            email: credentials.email(),
            password: credentials.password(),
        };
        let response: AuthResponse = self.post("/auth/login", &request).await?;

        if let Some(token) = &response.token {
            self.session().set_token(token.clone());
        }

        Ok(response)
    }

    /// Fetch the authenticated user's profile via `GET /auth/profile`.
    #[instrument(skip(self))]
    pub async fn get_profile(&self) -> Result<User, Error> {
        debug!("Fetching profile");
        let response: ProfileResponse = self.get("/auth/profile").await?;
        Ok(response.user)
    }

    /// Update the authenticated user's profile via `PUT /auth/profile`.
    #[instrument(skip(self, update))]
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, Error> {
        debug!("Updating profile");
        let response: ProfileResponse = self.put("/auth/profile", update).await?;
        Ok(response.user)
    }
}
