use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::insurance::{
    CreateHealthInsurancePlanParam, HealthInsurancePlan, UpdateHealthInsurancePlanParam,
};

pub struct HealthInsurancePlanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HealthInsurancePlanRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new insurance plan
    ///
    /// # Returns
    /// - `Ok(HealthInsurancePlan)`: The created plan
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        param: CreateHealthInsurancePlanParam,
    ) -> Result<HealthInsurancePlan, DbErr> {
        let entity = entity::health_insurance_plan::ActiveModel {
            clinic_id: ActiveValue::Set(param.clinic_id),
            name: ActiveValue::Set(param.name),
            base_price_cents: ActiveValue::Set(param.base_price_cents),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(HealthInsurancePlan::from_entity(entity))
    }

    /// Gets a plan by ID within a clinic
    ///
    /// # Returns
    /// - `Ok(Some(HealthInsurancePlan))`: The plan
    /// - `Ok(None)`: No such plan in that clinic
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(
        &self,
        clinic_id: i32,
        plan_id: i32,
    ) -> Result<Option<HealthInsurancePlan>, DbErr> {
        let entity = entity::prelude::HealthInsurancePlan::find_by_id(plan_id)
            .filter(entity::health_insurance_plan::Column::ClinicId.eq(clinic_id))
            .one(self.db)
            .await?;

        Ok(entity.map(HealthInsurancePlan::from_entity))
    }

    /// Gets all plans for a clinic, ordered by name
    ///
    /// # Returns
    /// - `Ok(Vec<HealthInsurancePlan>)`: The clinic's plans
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self, clinic_id: i32) -> Result<Vec<HealthInsurancePlan>, DbErr> {
        let entities = entity::prelude::HealthInsurancePlan::find()
            .filter(entity::health_insurance_plan::Column::ClinicId.eq(clinic_id))
            .order_by_asc(entity::health_insurance_plan::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(HealthInsurancePlan::from_entity)
            .collect())
    }

    /// Updates a plan's name and price
    ///
    /// # Returns
    /// - `Ok(Some(HealthInsurancePlan))`: The updated plan
    /// - `Ok(None)`: No such plan in that clinic
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        param: UpdateHealthInsurancePlanParam,
    ) -> Result<Option<HealthInsurancePlan>, DbErr> {
        let Some(entity) = entity::prelude::HealthInsurancePlan::find_by_id(param.plan_id)
            .filter(entity::health_insurance_plan::Column::ClinicId.eq(param.clinic_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::health_insurance_plan::ActiveModel = entity.into();
        active.name = ActiveValue::Set(param.name);
        active.base_price_cents = ActiveValue::Set(param.base_price_cents);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(HealthInsurancePlan::from_entity(updated)))
    }

    /// Deletes a plan within a clinic
    ///
    /// Appointments booked under the plan keep their agreed price; their plan
    /// reference is nulled by the foreign key.
    ///
    /// # Returns
    /// - `Ok(true)`: The plan was deleted
    /// - `Ok(false)`: No such plan in that clinic
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, clinic_id: i32, plan_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::HealthInsurancePlan::delete_many()
            .filter(entity::health_insurance_plan::Column::Id.eq(plan_id))
            .filter(entity::health_insurance_plan::Column::ClinicId.eq(clinic_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
