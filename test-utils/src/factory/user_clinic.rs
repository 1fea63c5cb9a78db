//! Clinic membership factory for creating user-clinic relationship rows.
//!
//! This module provides a factory method for enrolling a test user in a test
//! clinic, the row the tenant permission checks look for.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a clinic membership row linking a user to a clinic.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of an existing user
/// - `clinic_id` - ID of an existing clinic
///
/// # Returns
/// - `Ok(entity::user_clinic::Model)` - Created membership row
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let membership = create_membership(&db, user.id, clinic.id).await?;
/// ```
pub async fn create_membership(
    db: &DatabaseConnection,
    user_id: i32,
    clinic_id: i32,
) -> Result<entity::user_clinic::Model, DbErr> {
    entity::user_clinic::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id),
        clinic_id: ActiveValue::Set(clinic_id),
    }
    .insert(db)
    .await
}
