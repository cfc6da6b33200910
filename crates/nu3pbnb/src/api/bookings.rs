//! Booking operations.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::client::ApiClient;
use crate::error::Error;
use crate::params::Params;
use crate::types::{Ack, Booking, BookingResponse, BookingStatus, BookingsResponse, NewBooking};

/// Request body for `PUT /bookings/{id}`.
///
/// A dedicated one-field struct so the wire body is exactly `{"status": …}`
/// no matter what else a booking object holds.
#[derive(Serialize)]
struct StatusUpdate {
    status: BookingStatus,
}

impl ApiClient {
    /// Fetch the user's bookings via `GET /bookings`, optionally filtered.
    #[instrument(skip(self))]
    pub async fn get_bookings(&self, params: &Params) -> Result<Vec<Booking>, Error> {
        debug!("Fetching bookings");
        let response: BookingsResponse = self.get(&params.append_to("/bookings")).await?;
        Ok(response.bookings)
    }

    /// Create a booking request via `POST /bookings`.
    #[instrument(skip(self, booking), fields(listing_id = %booking.listing_id))]
    pub async fn create_booking(&self, booking: &NewBooking) -> Result<Booking, Error> {
        debug!("Creating booking");
        let response: BookingResponse = self.post("/bookings", booking).await?;
        Ok(response.booking)
    }

    /// Update a booking's status via `PUT /bookings/{id}`.
    #[instrument(skip(self))]
    pub async fn update_booking(&self, id: &str, status: BookingStatus) -> Result<Booking, Error> {
        debug!(%status, "Updating booking status");
        let response: BookingResponse = self
            .put(&format!("/bookings/{}", id), &StatusUpdate { status })
            .await?;
        Ok(response.booking)
    }

    /// Cancel a booking via `DELETE /bookings/{id}`.
    #[instrument(skip(self))]
    pub async fn cancel_booking(&self, id: &str) -> Result<(), Error> {
        debug!("Cancelling booking");
        let _: Ack = self.delete(&format!("/bookings/{}", id)).await?;
        Ok(())
    }
}
