//! Auth subcommand implementations.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use nu3pbnb::types::{NewUser, ProfileUpdate, Role, User};
use nu3pbnb::Credentials;

use crate::commands::Ctx;
use crate::output;
use crate::session as storage;

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Log in and persist the session token
    Login(LoginArgs),

    /// Register a new account
    Register(RegisterArgs),

    /// Remove the persisted session
    Logout,

    /// Show the authenticated user's profile
    Profile,

    /// Update the authenticated user's profile
    UpdateProfile(UpdateProfileArgs),
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// Account role (guest, host, admin); the server defaults to guest
    #[arg(long)]
    pub role: Option<Role>,
}

#[derive(Args, Debug)]
pub struct UpdateProfileArgs {
    /// New display name
    #[arg(long)]
    pub name: Option<String>,

    /// New email
    #[arg(long)]
    pub email: Option<String>,

    /// New theme preference
    #[arg(long)]
    pub theme: Option<String>,
}

pub async fn handle(cmd: AuthCommand, ctx: &Ctx) -> Result<()> {
    match cmd.command {
        AuthSubcommand::Login(args) => login(args, ctx).await,
        AuthSubcommand::Register(args) => register(args, ctx).await,
        AuthSubcommand::Logout => logout(),
        AuthSubcommand::Profile => profile(ctx).await,
        AuthSubcommand::UpdateProfile(args) => update_profile(args, ctx).await,
    }
}

async fn login(args: LoginArgs, ctx: &Ctx) -> Result<()> {
    let (client, session) = ctx.client();

    eprintln!("{}", "Logging in...".dimmed());

    let response = client
        .login(&Credentials::new(&args.email, &args.password))
        .await
        .context("Failed to login")?;

    if let Some(token) = session.token() {
        storage::save_token(ctx.base_url.as_str(), &token).context("Failed to save session")?;
    }

    output::success("Logged in successfully");
    println!();
    print_user(&response.user);

    Ok(())
}

async fn register(args: RegisterArgs, ctx: &Ctx) -> Result<()> {
    let (client, session) = ctx.client();

    let new_user = NewUser {
        name: args.name,
        email: args.email,
        password: args.password,
        role: args.role,
    };

    let response = client
        .register(&new_user)
        .await
        .context("Failed to register")?;

    if let Some(token) = session.token() {
        storage::save_token(ctx.base_url.as_str(), &token).context("Failed to save session")?;
    }

    output::success("Account created");
    println!();
    print_user(&response.user);

    Ok(())
}

fn logout() -> Result<()> {
    storage::clear_token().context("Failed to clear session")?;
    output::success("Logged out");
    Ok(())
}

async fn profile(ctx: &Ctx) -> Result<()> {
    let (client, _session) = ctx.authenticated_client()?;

    let user = client.get_profile().await.context("Failed to fetch profile")?;
    print_user(&user);

    Ok(())
}

async fn update_profile(args: UpdateProfileArgs, ctx: &Ctx) -> Result<()> {
    let (client, _session) = ctx.authenticated_client()?;

    let update = ProfileUpdate {
        name: args.name,
        email: args.email,
        theme_preference: args.theme,
    };

    let user = client
        .update_profile(&update)
        .await
        .context("Failed to update profile")?;

    output::success("Profile updated");
    println!();
    print_user(&user);

    Ok(())
}

fn print_user(user: &User) {
    output::field("Name", &user.name);
    output::field("Email", &user.email);
    if let Some(role) = user.role {
        output::field("Role", &role.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use nu3pbnb::{ApiKey, ApiUrl};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn login_succeeds_when_response_has_no_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Login successful",
                "user": {"_id": "1", "name": "Test User", "email": "testuser@example.com"}
            })))
            .mount(&server)
            .await;

        let ctx = Ctx {
            base_url: ApiUrl::new(server.uri()).unwrap(),
            api_key: ApiKey::new("test_api_key_456"),
        };
        let args = LoginArgs {
            email: "testuser@example.com".to_string(),
            password: "password123".to_string(),
        };

        // Nothing is persisted, but the command itself succeeds.
        login(args, &ctx).await.unwrap();
    }
}
