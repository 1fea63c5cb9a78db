//! Payment domain models and parameters.
//!
//! Every appointment owns exactly one payment aggregate which accumulates
//! individual transactions until the appointment price is settled. Status and
//! method values are stored as strings in the database and parsed into enums at
//! the repository boundary; an unknown stored value is an invariant violation
//! and surfaces as an internal error.

use chrono::{DateTime, Utc};

use crate::{
    model::payment::{CreatePaymentTransactionDto, PaymentDto, PaymentTransactionDto},
    server::error::{internal::InternalError, AppError},
};

/// Settlement status of a payment aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    /// Nothing has been paid yet.
    Pending,
    /// Some amount has been paid, but less than the total.
    Partial,
    /// The full total has been paid.
    Paid,
}

impl PaymentStatus {
    /// Returns the string stored in the database for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Partial => "partial",
            Self::Paid => "paid",
        }
    }

    /// Parses a stored status string.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "partial" => Some(Self::Partial),
            "paid" => Some(Self::Paid),
            _ => None,
        }
    }

    /// Parses a status string read from the database.
    ///
    /// # Returns
    /// - `Ok(PaymentStatus)` - The parsed status
    /// - `Err(AppError::InternalErr(UnknownPaymentStatus))` - The stored value is
    ///   not a known status
    pub fn from_db(value: &str) -> Result<Self, AppError> {
        Self::parse(value)
            .ok_or_else(|| InternalError::UnknownPaymentStatus(value.to_string()).into())
    }
}

/// Payment method of a single transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Physical cash, the only method that can produce change.
    Cash,
    /// Credit card.
    CreditCard,
    /// Debit card.
    DebitCard,
    /// Brazilian instant payment.
    Pix,
    /// Bank transfer.
    BankTransfer,
    /// Covered by the patient's insurance plan.
    Insurance,
}

impl PaymentMethod {
    /// Every accepted method, in display order.
    pub const ALL: [PaymentMethod; 6] = [
        Self::Cash,
        Self::CreditCard,
        Self::DebitCard,
        Self::Pix,
        Self::BankTransfer,
        Self::Insurance,
    ];

    /// Returns the string stored in the database for this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::CreditCard => "credit_card",
            Self::DebitCard => "debit_card",
            Self::Pix => "pix",
            Self::BankTransfer => "bank_transfer",
            Self::Insurance => "insurance",
        }
    }

    /// Human-readable label for reports and emails.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::CreditCard => "Credit card",
            Self::DebitCard => "Debit card",
            Self::Pix => "Pix",
            Self::BankTransfer => "Bank transfer",
            Self::Insurance => "Insurance",
        }
    }

    /// Parses a stored or submitted method string.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "cash" => Some(Self::Cash),
            "credit_card" => Some(Self::CreditCard),
            "debit_card" => Some(Self::DebitCard),
            "pix" => Some(Self::Pix),
            "bank_transfer" => Some(Self::BankTransfer),
            "insurance" => Some(Self::Insurance),
            _ => None,
        }
    }

    /// Parses a method string read from the database.
    ///
    /// # Returns
    /// - `Ok(PaymentMethod)` - The parsed method
    /// - `Err(AppError::InternalErr(UnknownPaymentMethod))` - The stored value is
    ///   not a known method
    pub fn from_db(value: &str) -> Result<Self, AppError> {
        Self::parse(value)
            .ok_or_else(|| InternalError::UnknownPaymentMethod(value.to_string()).into())
    }
}

/// A single recorded payment against an appointment.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentTransaction {
    /// Database ID of the transaction.
    pub id: i32,
    /// Payment aggregate this transaction belongs to.
    pub payment_id: i32,
    /// How the amount was paid.
    pub method: PaymentMethod,
    /// Amount paid in cents.
    pub amount_cents: i32,
    /// When the transaction was recorded.
    pub created_at: DateTime<Utc>,
}

impl PaymentTransaction {
    /// Converts the transaction domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaymentTransactionDto {
        PaymentTransactionDto {
            id: self.id,
            method: self.method.as_str().to_string(),
            amount_cents: self.amount_cents,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a transaction domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(PaymentTransaction)` - The converted transaction
    /// - `Err(AppError::InternalErr(UnknownPaymentMethod))` - The stored method
    ///   string is not recognized
    pub fn from_entity(entity: entity::payment_transaction::Model) -> Result<Self, AppError> {
        let method = PaymentMethod::from_db(&entity.method)?;

        Ok(Self {
            id: entity.id,
            payment_id: entity.payment_id,
            method,
            amount_cents: entity.amount_cents,
            created_at: entity.created_at,
        })
    }
}

/// Payment aggregate for one appointment, with its transaction history.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    /// Database ID of the aggregate.
    pub id: i32,
    /// Clinic the payment belongs to.
    pub clinic_id: i32,
    /// Appointment being paid for.
    pub appointment_id: i32,
    /// Amount owed in cents.
    pub total_cents: i32,
    /// Sum of all recorded transactions in cents.
    pub paid_cents: i32,
    /// Change returned to the patient in cents.
    pub change_cents: i32,
    /// Settlement status derived from paid versus total.
    pub status: PaymentStatus,
    /// Recorded transactions, oldest first.
    pub transactions: Vec<PaymentTransaction>,
    /// When the aggregate was opened.
    pub created_at: DateTime<Utc>,
    /// When the aggregate was last reconciled.
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    /// Amount still owed in cents, never negative.
    pub fn remaining_cents(&self) -> i32 {
        (self.total_cents - self.paid_cents).max(0)
    }

    /// Converts the payment domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaymentDto {
        let remaining_cents = self.remaining_cents();

        PaymentDto {
            id: self.id,
            appointment_id: self.appointment_id,
            total_cents: self.total_cents,
            paid_cents: self.paid_cents,
            remaining_cents,
            change_cents: self.change_cents,
            status: self.status.as_str().to_string(),
            transactions: self.transactions.into_iter().map(|t| t.into_dto()).collect(),
        }
    }

    /// Composes an entity model and its transactions into a payment domain model.
    ///
    /// # Returns
    /// - `Ok(Payment)` - The converted aggregate
    /// - `Err(AppError::InternalErr(UnknownPaymentStatus))` - The stored status
    ///   string is not recognized
    pub fn from_entity(
        entity: entity::appointment_payment::Model,
        transactions: Vec<PaymentTransaction>,
    ) -> Result<Self, AppError> {
        let status = PaymentStatus::from_db(&entity.status)?;

        Ok(Self {
            id: entity.id,
            clinic_id: entity.clinic_id,
            appointment_id: entity.appointment_id,
            total_cents: entity.total_cents,
            paid_cents: entity.paid_cents,
            change_cents: entity.change_cents,
            status,
            transactions,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for recording a payment transaction.
#[derive(Debug, Clone)]
pub struct CreatePaymentTransactionParam {
    /// Clinic the payment belongs to.
    pub clinic_id: i32,
    /// Appointment being paid for.
    pub appointment_id: i32,
    /// How the amount was paid.
    pub method: PaymentMethod,
    /// Amount paid in cents.
    pub amount_cents: i32,
}

impl CreatePaymentTransactionParam {
    /// Creates transaction parameters from the submission DTO.
    ///
    /// # Returns
    /// - `Ok(CreatePaymentTransactionParam)` - The parsed parameters
    /// - `Err(AppError::BadRequest)` - The method string is not an accepted
    ///   payment method
    pub fn from_dto(
        clinic_id: i32,
        appointment_id: i32,
        dto: CreatePaymentTransactionDto,
    ) -> Result<Self, AppError> {
        let method = PaymentMethod::parse(&dto.method)
            .ok_or_else(|| AppError::BadRequest("Unknown payment method.".to_string()))?;

        Ok(Self {
            clinic_id,
            appointment_id,
            method,
            amount_cents: dto.amount_cents,
        })
    }
}
