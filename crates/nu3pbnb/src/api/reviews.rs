//! Review operations.

use tracing::{debug, instrument};

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{Ack, NewReview, Review, ReviewResponse, ReviewUpdate, ReviewsResponse};

impl ApiClient {
    /// Fetch reviews for a listing via `GET /reviews/listing/{id}`.
    #[instrument(skip(self))]
    pub async fn get_listing_reviews(&self, listing_id: &str) -> Result<Vec<Review>, Error> {
        debug!("Fetching listing reviews");
        let response: ReviewsResponse = self
            .get(&format!("/reviews/listing/{}", listing_id))
            .await?;
        Ok(response.reviews)
    }

    /// Create a review via `POST /reviews`.
    #[instrument(skip(self, review), fields(listing_id = %review.listing_id))]
    pub async fn create_review(&self, review: &NewReview) -> Result<Review, Error> {
        debug!("Creating review");
        let response: ReviewResponse = self.post("/reviews", review).await?;
        Ok(response.review)
    }

    /// Update a review via `PUT /reviews/{id}`.
    #[instrument(skip(self, update))]
    pub async fn update_review(&self, id: &str, update: &ReviewUpdate) -> Result<Review, Error> {
        debug!("Updating review");
        let response: ReviewResponse = self.put(&format!("/reviews/{}", id), update).await?;
        Ok(response.review)
    }

    /// Delete a review via `DELETE /reviews/{id}`.
    #[instrument(skip(self))]
    pub async fn delete_review(&self, id: &str) -> Result<(), Error> {
        debug!("Deleting review");
        let _: Ack = self.delete(&format!("/reviews/{}", id)).await?;
        Ok(())
    }
}
