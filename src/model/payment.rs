use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PaymentDto {
    pub id: i32,
    pub appointment_id: i32,
    pub total_cents: i32,
    pub paid_cents: i32,
    pub remaining_cents: i32,
    pub change_cents: i32,
    pub status: String,
    pub transactions: Vec<PaymentTransactionDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PaymentTransactionDto {
    pub id: i32,
    pub method: String,
    pub amount_cents: i32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreatePaymentTransactionDto {
    pub method: String,
    pub amount_cents: i32,
}
