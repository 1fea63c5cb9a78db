//! Audit trail service.
//!
//! Every data mutation attempt in the application, successful or rejected, is
//! recorded through this service. Recording is deliberately best-effort: an
//! audit row that cannot be written is logged server-side and never turns a
//! completed operation into a failure.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::security_log::SecurityLogRepository,
    error::AppError,
    model::security_log::{GetSecurityLogsParam, PaginatedSecurityLogs, RecordSecurityLogParam},
};

pub struct SecurityLogService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> SecurityLogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records one mutation attempt in the audit trail.
    ///
    /// Failures are logged and swallowed so callers can record outcomes
    /// unconditionally without wrapping every call site in error handling.
    pub async fn record(&self, param: RecordSecurityLogParam) {
        let repo = SecurityLogRepository::new(self.db);

        if let Err(err) = repo.insert(param).await {
            tracing::error!("Failed to write audit log entry: {}", err);
        }
    }

    /// Records the outcome of one mutation, deriving the success flag and
    /// failure detail from the result.
    ///
    /// # Arguments
    /// - `clinic_id` - Clinic the mutation targeted, None for platform-level actions
    /// - `user_id` - Acting user, None for unauthenticated attempts
    /// - `action` - What was attempted, e.g. "create"
    /// - `entity` - Kind of entity targeted, e.g. "doctor"
    /// - `entity_id` - Targeted entity's ID, when one exists
    /// - `result` - Outcome of the mutation
    pub async fn record_outcome<T>(
        &self,
        clinic_id: Option<i32>,
        user_id: Option<i32>,
        action: &str,
        entity: &str,
        entity_id: Option<i32>,
        result: &Result<T, AppError>,
    ) {
        self.record(RecordSecurityLogParam {
            clinic_id,
            user_id,
            action: action.to_string(),
            entity: entity.to_string(),
            entity_id,
            success: result.is_ok(),
            detail: result.as_ref().err().map(|err| err.to_string()),
        })
        .await;
    }

    /// Retrieves a clinic's audit trail with pagination, newest first.
    ///
    /// # Arguments
    /// - `param` - Parameters with the clinic ID and page bounds
    ///
    /// # Returns
    /// - `Ok(PaginatedSecurityLogs)` - Audit rows with pagination metadata
    /// - `Err(AppError)` - Database error during the query
    pub async fn get_paginated(
        &self,
        param: GetSecurityLogsParam,
    ) -> Result<PaginatedSecurityLogs, AppError> {
        let repo = SecurityLogRepository::new(self.db);

        let page = param.page;
        let per_page = param.per_page;
        let (logs, total) = repo.get_paginated(param).await?;

        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedSecurityLogs {
            logs,
            total,
            page,
            per_page,
            total_pages,
        })
    }
}
