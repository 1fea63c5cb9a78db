//! Health insurance plan factory for creating test plan entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test health insurance plans with customizable fields.
pub struct InsurancePlanFactory<'a> {
    db: &'a DatabaseConnection,
    clinic_id: i32,
    name: String,
    base_price_cents: i32,
}

impl<'a> InsurancePlanFactory<'a> {
    /// Creates a new InsurancePlanFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Plan {id}"` where id is auto-incremented
    /// - base_price_cents: 15000
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `clinic_id` - ID of the clinic the plan belongs to
    ///
    /// # Returns
    /// - `InsurancePlanFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, clinic_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            clinic_id,
            name: format!("Plan {}", id),
            base_price_cents: 15_000,
        }
    }

    /// Sets the name for the plan.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the negotiated base price for the plan.
    pub fn base_price_cents(mut self, base_price_cents: i32) -> Self {
        self.base_price_cents = base_price_cents;
        self
    }

    /// Builds and inserts the plan entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::health_insurance_plan::Model)` - Created plan entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::health_insurance_plan::Model, DbErr> {
        let now = Utc::now();
        entity::health_insurance_plan::ActiveModel {
            id: ActiveValue::NotSet,
            clinic_id: ActiveValue::Set(self.clinic_id),
            name: ActiveValue::Set(self.name),
            base_price_cents: ActiveValue::Set(self.base_price_cents),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a health insurance plan with default values for the specified clinic.
///
/// # Arguments
/// - `db` - Database connection
/// - `clinic_id` - ID of the clinic the plan belongs to
///
/// # Returns
/// - `Ok(entity::health_insurance_plan::Model)` - Created plan entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_insurance_plan(
    db: &DatabaseConnection,
    clinic_id: i32,
) -> Result<entity::health_insurance_plan::Model, DbErr> {
    InsurancePlanFactory::new(db, clinic_id).build().await
}
