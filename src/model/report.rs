use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct RevenueReportDto {
    pub from: String, // Format: "YYYY-MM-DD" in UTC-3
    pub to: String,   // Format: "YYYY-MM-DD" in UTC-3
    pub summary: RevenueSummaryDto,
    pub daily: Vec<DailyRevenueDto>,
    pub methods: Vec<MethodRevenueDto>,
    pub top_doctors: Vec<DoctorRevenueDto>,
    pub recent_transactions: Vec<RecentTransactionDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct RevenueSummaryDto {
    pub revenue_cents: i64,
    pub appointment_count: u64,
    pub paid_cents: i64,
    pub outstanding_cents: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DailyRevenueDto {
    pub date: String, // Format: "YYYY-MM-DD" in UTC-3
    pub revenue_cents: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MethodRevenueDto {
    pub method: String,
    pub amount_cents: i64,
    pub transaction_count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DoctorRevenueDto {
    pub doctor_id: i32,
    pub doctor_name: String,
    pub revenue_cents: i64,
    pub appointment_count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct RecentTransactionDto {
    pub id: i32,
    pub patient_name: String,
    pub method: String,
    pub amount_cents: i32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}
