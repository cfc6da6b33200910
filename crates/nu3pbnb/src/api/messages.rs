//! Messaging operations.

use tracing::{debug, instrument};

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{Ack, Message, MessageResponse, MessagesResponse, NewMessage};

impl ApiClient {
    /// Fetch the user's messages via `GET /messages`.
    #[instrument(skip(self))]
    pub async fn get_messages(&self) -> Result<Vec<Message>, Error> {
        debug!("Fetching messages");
        let response: MessagesResponse = self.get("/messages").await?;
        Ok(response.messages)
    }

    /// Send a message via `POST /messages`.
    #[instrument(skip(self, message), fields(recipient_id = %message.recipient_id))]
    pub async fn send_message(&self, message: &NewMessage) -> Result<Message, Error> {
        debug!("Sending message");
        let response: MessageResponse = self.post("/messages", message).await?;
        Ok(response.message_data)
    }

    /// Mark a message as read via `PUT /messages/{id}/read`.
    #[instrument(skip(self))]
    pub async fn mark_message_read(&self, id: &str) -> Result<(), Error> {
        debug!("Marking message read");
        let _: Ack = self.put_empty(&format!("/messages/{}/read", id)).await?;
        Ok(())
    }
}
