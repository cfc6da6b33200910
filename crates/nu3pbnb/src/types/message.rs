//! Messaging types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Booking, Listing, ObjectRef, User};

/// A message between users as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Object id.
    #[serde(rename = "_id")]
    pub id: String,
    pub sender: ObjectRef<User>,
    pub recipient: ObjectRef<User>,
    pub content: String,
    #[serde(default)]
    pub subject: Option<String>,
    /// The listing this conversation concerns, if any.
    #[serde(default)]
    pub listing: Option<ObjectRef<Listing>>,
    /// The booking this conversation concerns, if any.
    #[serde(default)]
    pub booking: Option<ObjectRef<Booking>>,
    /// Whether the recipient has read the message.
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub message_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for sending a message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    /// Id of the receiving user.
    pub recipient_id: String,
    /// Listing the message concerns, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_id: Option<String>,
    pub content: String,
}

/// Response from `/messages`.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// Response envelope for a sent message.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
    /// The stored message document.
    pub message_data: Message,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_parses_server_shape() {
        let message: Message = serde_json::from_str(
            r#"{
                "_id": "m1",
                "sender": "u1",
                "recipient": "u2",
                "content": "Is the flat available?",
                "listing": "l1",
                "read": false,
                "messageType": "regular"
            }"#,
        )
        .unwrap();
        assert!(!message.read);
        assert_eq!(message.listing.unwrap().as_id(), Some("l1"));
    }

    #[test]
    fn new_message_omits_missing_listing() {
        let message = NewMessage {
            recipient_id: "u2".to_string(),
            listing_id: None,
            content: "Hello".to_string(),
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["recipientId"], "u2");
        assert!(json.get("listingId").is_none());
    }
}
