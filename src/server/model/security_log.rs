//! Audit log domain models and parameters.
//!
//! One audit row is written per data mutation attempt, successful or not. Rows
//! deliberately carry no foreign keys so the trail survives deletion of the
//! user or entity it mentions; the acting user's name is joined in at read
//! time when the account still exists.

use chrono::{DateTime, Utc};

use crate::model::security_log::{PaginatedSecurityLogsDto, SecurityLogDto};

/// One recorded mutation attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityLog {
    /// Database ID of the log row.
    pub id: i32,
    /// Clinic the mutation targeted, None for platform-level actions.
    pub clinic_id: Option<i32>,
    /// Acting user, None for unauthenticated attempts.
    pub user_id: Option<i32>,
    /// Name of the acting user, when the account still exists.
    pub user_name: Option<String>,
    /// What was attempted, e.g. "create" or "delete".
    pub action: String,
    /// Kind of entity targeted, e.g. "appointment".
    pub entity: String,
    /// Database ID of the targeted entity, when one exists.
    pub entity_id: Option<i32>,
    /// Whether the mutation went through.
    pub success: bool,
    /// Free-form context, e.g. the rejection reason.
    pub detail: Option<String>,
    /// When the attempt happened.
    pub created_at: DateTime<Utc>,
}

impl SecurityLog {
    /// Converts the log domain model to a DTO for API responses.
    pub fn into_dto(self) -> SecurityLogDto {
        SecurityLogDto {
            id: self.id,
            user_id: self.user_id,
            user_name: self.user_name,
            action: self.action,
            entity: self.entity,
            entity_id: self.entity_id,
            success: self.success,
            detail: self.detail,
            created_at: self.created_at,
        }
    }

    /// Composes an entity model and the acting user's name into a domain model.
    pub fn from_entity(entity: entity::security_log::Model, user_name: Option<String>) -> Self {
        Self {
            id: entity.id,
            clinic_id: entity.clinic_id,
            user_id: entity.user_id,
            user_name,
            action: entity.action,
            entity: entity.entity,
            entity_id: entity.entity_id,
            success: entity.success,
            detail: entity.detail,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for writing one audit row.
#[derive(Debug, Clone)]
pub struct RecordSecurityLogParam {
    /// Clinic the mutation targeted, None for platform-level actions.
    pub clinic_id: Option<i32>,
    /// Acting user, None for unauthenticated attempts.
    pub user_id: Option<i32>,
    /// What was attempted.
    pub action: String,
    /// Kind of entity targeted.
    pub entity: String,
    /// Database ID of the targeted entity, when one exists.
    pub entity_id: Option<i32>,
    /// Whether the mutation went through.
    pub success: bool,
    /// Free-form context, e.g. the rejection reason.
    pub detail: Option<String>,
}

/// Parameters for paginated audit log queries.
#[derive(Debug, Clone)]
pub struct GetSecurityLogsParam {
    /// Clinic whose trail to read.
    pub clinic_id: i32,
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of rows to return per page.
    pub per_page: u64,
}

/// Paginated collection of audit rows with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedSecurityLogs {
    /// Audit rows for this page, newest first.
    pub logs: Vec<SecurityLog>,
    /// Total number of rows across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of rows per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedSecurityLogs {
    /// Converts the paginated audit rows to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedSecurityLogsDto {
        PaginatedSecurityLogsDto {
            logs: self.logs.into_iter().map(|l| l.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
