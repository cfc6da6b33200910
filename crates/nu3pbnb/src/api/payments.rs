//! Payment operations.

use tracing::{debug, instrument};

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{
    Payment, PaymentHistory, PaymentMethodsResponse, PaymentRequest, PaymentResponse,
};

impl ApiClient {
    /// Fetch stored and supported payment methods via `GET /payments/methods`.
    #[instrument(skip(self))]
    pub async fn get_payment_methods(&self) -> Result<PaymentMethodsResponse, Error> {
        debug!("Fetching payment methods");
        self.get("/payments/methods").await
    }

    /// Process a payment via `POST /payments/process`.
    #[instrument(skip(self, payment), fields(booking_id = %payment.booking_id))]
    pub async fn process_payment(&self, payment: &PaymentRequest) -> Result<Payment, Error> {
        debug!("Processing payment");
        let response: PaymentResponse = self.post("/payments/process", payment).await?;
        Ok(response.payment)
    }

    /// Fetch the user's payment history via `GET /payments/history`.
    #[instrument(skip(self))]
    pub async fn get_payment_history(&self) -> Result<Vec<Payment>, Error> {
        debug!("Fetching payment history");
        let response: PaymentHistory = self.get("/payments/history").await?;
        Ok(response.payments)
    }
}
