//! Booking types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Listing, ObjectRef, User};

/// A booking request as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Object id.
    #[serde(rename = "_id")]
    pub id: String,
    /// The guest who made the request.
    pub guest: ObjectRef<User>,
    /// The host of the listing.
    pub host: ObjectRef<User>,
    /// The listing being booked.
    pub listing: ObjectRef<Listing>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Number of guests.
    pub guests: u32,
    pub total_price: f64,
    pub status: BookingStatus,
    /// Optional message from the guest to the host.
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Lifecycle states of a booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Declined,
    Cancelled,
    Confirmed,
}

impl BookingStatus {
    fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Declined => "declined",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Confirmed => "confirmed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "approved" => Ok(BookingStatus::Approved),
            "declined" => Ok(BookingStatus::Declined),
            "cancelled" => Ok(BookingStatus::Cancelled),
            "confirmed" => Ok(BookingStatus::Confirmed),
            other => Err(format!("unknown booking status '{}'", other)),
        }
    }
}

/// Request body for creating a booking.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    /// Id of the listing to book.
    pub listing_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// Number of guests.
    pub guests: u32,
    pub total_price: f64,
    /// Optional message to the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response from `/bookings`.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingsResponse {
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

/// Response envelope for a single booking.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub booking: Booking,
}
