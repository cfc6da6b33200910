//! Property listing types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ObjectRef, User};

/// A property listing as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Object id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Listing title.
    pub title: String,
    /// Long-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Free-form location string.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// Price per night.
    pub price: f64,
    /// Property type (apartment, house, …).
    #[serde(default, rename = "type")]
    pub property_type: Option<String>,
    /// Photo URLs.
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// The host, as an id or a populated user document.
    #[serde(default)]
    pub host: Option<ObjectRef<User>>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub max_guests: Option<u32>,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<u32>,
    #[serde(default)]
    pub available: Option<bool>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request body for creating a listing (host role required server-side).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub location: String,
    pub city: String,
    pub country: String,
    /// Price per night.
    pub price: f64,
    /// Property type (apartment, house, …).
    #[serde(rename = "type")]
    pub property_type: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_guests: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
}

/// Request body for updating a listing. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

/// Pagination block accompanying listing pages.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page number.
    #[serde(default)]
    pub current: Option<u32>,
    /// Total number of pages.
    #[serde(default)]
    pub total: Option<u32>,
    /// Total number of matching items.
    #[serde(default)]
    pub total_items: Option<u64>,
    #[serde(default)]
    pub has_next: Option<bool>,
    #[serde(default)]
    pub has_prev: Option<bool>,
}

/// Response from `/listings`: a page of listings plus pagination metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingsPage {
    #[serde(default)]
    pub listings: Vec<Listing>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Response envelope for a single listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub listing: Listing,
}
