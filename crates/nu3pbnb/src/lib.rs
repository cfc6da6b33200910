//! nu3pbnb - Rust client for the nu3PBnB vacation-rental REST API.
//!
//! The client is a thin wrapper over the HTTP surface: one generic request
//! primitive plus domain methods for listings, bookings, reviews, messages,
//! payments, and authentication. Requests carry a static API key and, once
//! logged in, a bearer session token held in a caller-owned [`Session`].
//!
//! There is deliberately no retry, caching, timeout, or automatic
//! re-authentication; callers wanting those must layer them externally.
//!
//! # Example
//!
//! ```no_run
//! use nu3pbnb::{ApiClient, ApiUrl, Credentials, Params, Session};
//!
//! # async fn example() -> Result<(), nu3pbnb::Error> {
//! let session = Session::new();
//! let client = ApiClient::new(
//!     ApiUrl::new("http://localhost:3000/api")?,
//!     "demo_api_key_123".into(),
//!     session.clone(),
//! );
//!
//! // Unauthenticated browsing.
//! let page = client.get_listings(&Params::new().set("limit", 5)).await?;
//!
//! // Log in; the token lands on the shared session.
//! client.login(&Credentials::new("guest@example.com", "password123")).await?;
//! assert!(session.is_authenticated());
//!
//! let bookings = client.get_bookings(&Params::new()).await?;
//! println!("{} listings, {} bookings", page.listings.len(), bookings.len());
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
pub mod error;
mod params;
mod session;
pub mod types;

// Re-export primary types at crate root for convenience
pub use client::ApiClient;
pub use error::{ApiRejection, Error};
pub use params::Params;
pub use session::Session;
pub use types::{ApiKey, ApiUrl, Credentials, SessionToken};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
