//! Clinic factory for creating test clinic entities.
//!
//! This module provides factory methods for creating clinic entities with
//! sensible defaults, reducing boilerplate in tests.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clinics with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::clinic::ClinicFactory;
///
/// let clinic = ClinicFactory::new(&db)
///     .name("Custom Clinic")
///     .build()
///     .await?;
/// ```
pub struct ClinicFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> ClinicFactory<'a> {
    /// Creates a new ClinicFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Clinic {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ClinicFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Clinic {}", id),
        }
    }

    /// Sets the name for the clinic.
    ///
    /// # Arguments
    /// - `name` - Display name for the clinic
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the clinic entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::clinic::Model)` - Created clinic entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::clinic::Model, DbErr> {
        let now = Utc::now();
        entity::clinic::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a clinic with default values.
///
/// Shorthand for `ClinicFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::clinic::Model)` - Created clinic entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let clinic = create_clinic(&db).await?;
/// ```
pub async fn create_clinic(db: &DatabaseConnection) -> Result<entity::clinic::Model, DbErr> {
    ClinicFactory::new(db).build().await
}
