//! Revenue report domain models and parameters.
//!
//! The revenue report is a bundle of aggregates computed in the service layer
//! over the clinic's appointments and payment transactions for a date range.
//! Daily buckets are keyed by the clinic's local calendar day, so a payment
//! recorded at 01:00 UTC lands on the previous local day.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::report::{
        DailyRevenueDto, DoctorRevenueDto, MethodRevenueDto, RecentTransactionDto,
        RevenueReportDto, RevenueSummaryDto,
    },
    server::model::payment::PaymentMethod,
};

/// Headline totals for the reporting period.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueSummary {
    /// Sum of appointment prices in the period, in cents.
    pub revenue_cents: i64,
    /// Number of appointments in the period.
    pub appointment_count: u64,
    /// Sum of recorded payments in the period, in cents.
    pub paid_cents: i64,
    /// Revenue not yet collected, in cents.
    pub outstanding_cents: i64,
}

impl RevenueSummary {
    /// Converts the summary to a DTO for API responses.
    pub fn into_dto(self) -> RevenueSummaryDto {
        RevenueSummaryDto {
            revenue_cents: self.revenue_cents,
            appointment_count: self.appointment_count,
            paid_cents: self.paid_cents,
            outstanding_cents: self.outstanding_cents,
        }
    }
}

/// Payments collected on one local calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRevenue {
    /// Local calendar day of the bucket.
    pub date: NaiveDate,
    /// Payments collected that day, in cents.
    pub revenue_cents: i64,
}

impl DailyRevenue {
    /// Converts the bucket to a DTO for API responses.
    pub fn into_dto(self) -> DailyRevenueDto {
        DailyRevenueDto {
            date: self.date.format("%Y-%m-%d").to_string(),
            revenue_cents: self.revenue_cents,
        }
    }
}

/// Payments collected through one payment method.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodRevenue {
    /// The payment method.
    pub method: PaymentMethod,
    /// Amount collected through this method, in cents.
    pub amount_cents: i64,
    /// Number of transactions using this method.
    pub transaction_count: u64,
}

impl MethodRevenue {
    /// Converts the breakdown entry to a DTO for API responses.
    pub fn into_dto(self) -> MethodRevenueDto {
        MethodRevenueDto {
            method: self.method.label().to_string(),
            amount_cents: self.amount_cents,
            transaction_count: self.transaction_count,
        }
    }
}

/// Revenue attributed to one doctor.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorRevenue {
    /// Database ID of the doctor.
    pub doctor_id: i32,
    /// Name of the doctor.
    pub doctor_name: String,
    /// Sum of the doctor's appointment prices in the period, in cents.
    pub revenue_cents: i64,
    /// Number of the doctor's appointments in the period.
    pub appointment_count: u64,
}

impl DoctorRevenue {
    /// Converts the entry to a DTO for API responses.
    pub fn into_dto(self) -> DoctorRevenueDto {
        DoctorRevenueDto {
            doctor_id: self.doctor_id,
            doctor_name: self.doctor_name,
            revenue_cents: self.revenue_cents,
            appointment_count: self.appointment_count,
        }
    }
}

/// A recently recorded transaction with its patient attached.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentTransaction {
    /// Database ID of the transaction.
    pub id: i32,
    /// Name of the patient whose appointment was paid.
    pub patient_name: String,
    /// How the amount was paid.
    pub method: PaymentMethod,
    /// Amount paid in cents.
    pub amount_cents: i32,
    /// When the transaction was recorded.
    pub created_at: DateTime<Utc>,
}

impl RecentTransaction {
    /// Converts the entry to a DTO for API responses.
    pub fn into_dto(self) -> RecentTransactionDto {
        RecentTransactionDto {
            id: self.id,
            patient_name: self.patient_name,
            method: self.method.label().to_string(),
            amount_cents: self.amount_cents,
            created_at: self.created_at,
        }
    }
}

/// Full revenue report bundle for one clinic and period.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueReport {
    /// The local-day period the report covers, inclusive on both ends.
    pub from: NaiveDate,
    /// End of the covered period, inclusive.
    pub to: NaiveDate,
    /// Headline totals.
    pub summary: RevenueSummary,
    /// Per-day revenue buckets, oldest first.
    pub daily: Vec<DailyRevenue>,
    /// Per-method breakdown, largest first.
    pub methods: Vec<MethodRevenue>,
    /// Top doctors by revenue, at most five.
    pub top_doctors: Vec<DoctorRevenue>,
    /// Most recent transactions, at most ten.
    pub recent_transactions: Vec<RecentTransaction>,
}

impl RevenueReport {
    /// Converts the report bundle to a DTO for API responses.
    pub fn into_dto(self) -> RevenueReportDto {
        RevenueReportDto {
            from: self.from.format("%Y-%m-%d").to_string(),
            to: self.to.format("%Y-%m-%d").to_string(),
            summary: self.summary.into_dto(),
            daily: self.daily.into_iter().map(|d| d.into_dto()).collect(),
            methods: self.methods.into_iter().map(|m| m.into_dto()).collect(),
            top_doctors: self.top_doctors.into_iter().map(|d| d.into_dto()).collect(),
            recent_transactions: self
                .recent_transactions
                .into_iter()
                .map(|t| t.into_dto())
                .collect(),
        }
    }
}

/// Parameters for requesting a revenue report.
///
/// Either bound may be omitted; the service fills in a trailing thirty-day
/// window ending today in clinic local time.
#[derive(Debug, Clone)]
pub struct GetRevenueReportParam {
    /// Clinic to report on.
    pub clinic_id: i32,
    /// First local day to include, inclusive.
    pub from: Option<NaiveDate>,
    /// Last local day to include, inclusive.
    pub to: Option<NaiveDate>,
}
