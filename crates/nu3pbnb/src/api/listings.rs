//! Listing operations.

use tracing::{debug, instrument};

use crate::client::ApiClient;
use crate::error::Error;
use crate::params::Params;
use crate::types::{Ack, Listing, ListingResponse, ListingUpdate, ListingsPage, NewListing};

impl ApiClient {
    /// Fetch listings via `GET /listings`, optionally filtered.
    ///
    /// With an empty `params` the bare path is requested.
    #[instrument(skip(self))]
    pub async fn get_listings(&self, params: &Params) -> Result<ListingsPage, Error> {
        debug!("Fetching listings");
        self.get(&params.append_to("/listings")).await
    }

    /// Fetch a single listing via `GET /listings/{id}`.
    #[instrument(skip(self))]
    pub async fn get_listing(&self, id: &str) -> Result<Listing, Error> {
        debug!("Fetching listing");
        let response: ListingResponse = self.get(&format!("/listings/{}", id)).await?;
        Ok(response.listing)
    }

    /// Create a listing via `POST /listings` (host role required server-side).
    #[instrument(skip(self, listing), fields(title = %listing.title))]
    pub async fn create_listing(&self, listing: &NewListing) -> Result<Listing, Error> {
        debug!("Creating listing");
        let response: ListingResponse = self.post("/listings", listing).await?;
        Ok(response.listing)
    }

    /// Update a listing via `PUT /listings/{id}`.
    #[instrument(skip(self, update))]
    pub async fn update_listing(&self, id: &str, update: &ListingUpdate) -> Result<Listing, Error> {
        debug!("Updating listing");
        let response: ListingResponse = self.put(&format!("/listings/{}", id), update).await?;
        Ok(response.listing)
    }

    /// Delete a listing via `DELETE /listings/{id}`.
    #[instrument(skip(self))]
    pub async fn delete_listing(&self, id: &str) -> Result<(), Error> {
        debug!("Deleting listing");
        let _: Ack = self.delete(&format!("/listings/{}", id)).await?;
        Ok(())
    }

    /// Search listings via `GET /listings/search?…`.
    ///
    /// The query string is always appended, mirroring the reference client.
    #[instrument(skip(self))]
    pub async fn search_listings(&self, params: &Params) -> Result<Vec<Listing>, Error> {
        debug!("Searching listings");
        let page: ListingsPage = self
            .get(&format!("/listings/search?{}", params.render()))
            .await?;
        Ok(page.listings)
    }

    /// Fetch the most popular listings via `GET /listings/popular`.
    #[instrument(skip(self))]
    pub async fn get_popular_listings(&self) -> Result<Vec<Listing>, Error> {
        debug!("Fetching popular listings");
        let page: ListingsPage = self.get("/listings/popular").await?;
        Ok(page.listings)
    }
}
