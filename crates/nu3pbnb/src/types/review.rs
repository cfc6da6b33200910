//! Review types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Listing, ObjectRef, User};

/// A listing review as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Object id.
    #[serde(rename = "_id")]
    pub id: String,
    /// The reviewed listing.
    pub listing: ObjectRef<Listing>,
    /// The reviewer.
    pub user: ObjectRef<User>,
    /// Star rating, 1-5.
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for creating a review.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    /// Id of the listing being reviewed.
    pub listing_id: String,
    /// Star rating, 1-5 (validated server-side).
    pub rating: u8,
    pub comment: String,
}

/// Request body for updating a review. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReviewUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Response from `/reviews/listing/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewsResponse {
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Response envelope for a single review.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub review: Review,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_parses_server_shape() {
        let review: Review = serde_json::from_str(
            r#"{
                "_id": "r1",
                "listing": "l1",
                "user": {"_id": "u1", "name": "Guest", "email": "guest@example.com"},
                "rating": 4,
                "comment": "Great stay"
            }"#,
        )
        .unwrap();
        assert_eq!(review.rating, 4);
        assert_eq!(review.user.as_embedded().unwrap().name, "Guest");
    }

    #[test]
    fn review_update_serializes_only_set_fields() {
        let update = ReviewUpdate {
            rating: Some(5),
            comment: None,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"rating": 5}));
    }
}
