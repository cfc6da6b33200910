//! Payment types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Booking, ObjectRef, User};

/// A payment record as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Object id.
    #[serde(rename = "_id")]
    pub id: String,
    /// The booking being paid for.
    pub booking: ObjectRef<Booking>,
    /// The paying user.
    pub user: ObjectRef<User>,
    pub amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payment instruments accepted by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    ApplePay,
    GooglePay,
    Paypal,
    CreditCard,
    SystemGenerated,
}

impl PaymentMethod {
    fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::ApplePay => "apple_pay",
            PaymentMethod::GooglePay => "google_pay",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::SystemGenerated => "system_generated",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "apple_pay" => Ok(PaymentMethod::ApplePay),
            "google_pay" => Ok(PaymentMethod::GooglePay),
            "paypal" => Ok(PaymentMethod::Paypal),
            "credit_card" => Ok(PaymentMethod::CreditCard),
            "system_generated" => Ok(PaymentMethod::SystemGenerated),
            other => Err(format!("unknown payment method '{}'", other)),
        }
    }
}

/// Lifecycle states of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    Refunded,
}

/// Request body for processing a payment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Id of the booking to pay for.
    pub booking_id: String,
    pub payment_method: PaymentMethod,
}

/// Response from `/payments/methods`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodsResponse {
    /// Stored payment instruments for the user.
    #[serde(default)]
    pub payment_methods: Vec<serde_json::Value>,
    /// Method identifiers the platform accepts.
    #[serde(default)]
    pub supported_methods: Vec<String>,
}

/// Response envelope for a processed payment.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub payment: Payment,
}

/// Response from `/payments/history`.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentHistory {
    #[serde(default)]
    pub payments: Vec<Payment>,
}
