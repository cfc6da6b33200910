//! Typed wire formats for the nu3PBnB API.
//!
//! Response bodies are modeled after the JSON the server actually sends:
//! Mongo `_id` fields, camelCase names, and envelope objects such as
//! `{"listings": […]}`. Fields the server may omit or populate lazily are
//! `Option` or defaulted.

mod api_url;
mod booking;
mod credentials;
mod listing;
mod message;
mod payment;
mod review;
mod user;

pub use api_url::{ApiUrl, DEFAULT_BASE_URL};
pub use booking::{Booking, BookingResponse, BookingStatus, BookingsResponse, NewBooking};
pub use credentials::{ApiKey, Credentials, SessionToken};
pub use listing::{
    Listing, ListingResponse, ListingUpdate, ListingsPage, NewListing, Pagination,
};
pub use message::{Message, MessageResponse, MessagesResponse, NewMessage};
pub use payment::{
    Payment, PaymentHistory, PaymentMethod, PaymentMethodsResponse, PaymentRequest,
    PaymentResponse, PaymentStatus,
};
pub use review::{NewReview, Review, ReviewResponse, ReviewUpdate, ReviewsResponse};
pub use user::{AuthResponse, NewUser, ProfileResponse, ProfileUpdate, Role, User};

use serde::{Deserialize, Serialize};

/// A reference to another document, either as a bare object id or populated
/// with the embedded document (the server decides per endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObjectRef<T> {
    /// Just the referenced object's id.
    Id(String),
    /// The fully populated document.
    Embedded(Box<T>),
}

impl<T> ObjectRef<T> {
    /// Returns the bare id form, if that is what the server sent.
    pub fn as_id(&self) -> Option<&str> {
        match self {
            Self::Id(id) => Some(id),
            Self::Embedded(_) => None,
        }
    }

    /// Returns the embedded document, if the server populated it.
    pub fn as_embedded(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Embedded(value) => Some(value),
        }
    }
}

/// A bare acknowledgement body, e.g. `{"message": "Listing deleted successfully"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    /// Human-readable confirmation from the server.
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_ref_accepts_bare_id() {
        let parsed: ObjectRef<User> =
            serde_json::from_str(r#""665f1c2e9b1d2a0012345678""#).unwrap();
        assert_eq!(parsed.as_id(), Some("665f1c2e9b1d2a0012345678"));
        assert!(parsed.as_embedded().is_none());
    }

    #[test]
    fn object_ref_accepts_embedded_document() {
        let parsed: ObjectRef<User> = serde_json::from_str(
            r#"{"_id":"665f1c2e9b1d2a0012345678","name":"Alice Host","email":"alice@example.com"}"#,
        )
        .unwrap();
        let user = parsed.as_embedded().unwrap();
        assert_eq!(user.id, "665f1c2e9b1d2a0012345678");
        assert_eq!(user.name, "Alice Host");
    }
}
