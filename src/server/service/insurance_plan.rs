use sea_orm::DatabaseConnection;

use crate::server::{
    data::insurance_plan::HealthInsurancePlanRepository,
    error::AppError,
    model::insurance::{
        CreateHealthInsurancePlanParam, HealthInsurancePlan, UpdateHealthInsurancePlanParam,
    },
    service::security_log::SecurityLogService,
};

/// Service for health insurance plan management.
///
/// Plans are a small per-clinic lookup table, so listings are unpaginated. The
/// plan's base price overrides the doctor's default price when an appointment
/// is booked under it.
pub struct HealthInsurancePlanService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> HealthInsurancePlanService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all plans accepted by a clinic, ordered by name.
    pub async fn get_all(&self, clinic_id: i32) -> Result<Vec<HealthInsurancePlan>, AppError> {
        let plan_repo = HealthInsurancePlanRepository::new(self.db);

        Ok(plan_repo.get_all(clinic_id).await?)
    }

    /// Retrieves a single plan.
    ///
    /// # Arguments
    /// - `clinic_id` - Clinic the plan must belong to
    /// - `plan_id` - ID of the plan to fetch
    ///
    /// # Returns
    /// - `Ok(HealthInsurancePlan)` - The requested plan
    /// - `Err(AppError::NotFound)` - No such plan in that clinic
    pub async fn get(&self, clinic_id: i32, plan_id: i32) -> Result<HealthInsurancePlan, AppError> {
        let plan_repo = HealthInsurancePlanRepository::new(self.db);

        let Some(plan) = plan_repo.get_by_id(clinic_id, plan_id).await? else {
            return Err(AppError::NotFound("Insurance plan not found.".to_string()));
        };

        Ok(plan)
    }

    /// Adds an insurance plan to a clinic.
    ///
    /// # Arguments
    /// - `acting_user_id` - User performing the creation
    /// - `param` - Parameters with the plan's details
    ///
    /// # Returns
    /// - `Ok(HealthInsurancePlan)` - The newly created plan
    /// - `Err(AppError::BadRequest)` - Empty name or negative base price
    pub async fn create(
        &self,
        acting_user_id: i32,
        param: CreateHealthInsurancePlanParam,
    ) -> Result<HealthInsurancePlan, AppError> {
        let clinic_id = param.clinic_id;
        let result = self.create_validated(param).await;

        SecurityLogService::new(self.db)
            .record_outcome(
                Some(clinic_id),
                Some(acting_user_id),
                "create",
                "insurance_plan",
                result.as_ref().map(|p| p.id).ok(),
                &result,
            )
            .await;

        result
    }

    async fn create_validated(
        &self,
        param: CreateHealthInsurancePlanParam,
    ) -> Result<HealthInsurancePlan, AppError> {
        let plan_repo = HealthInsurancePlanRepository::new(self.db);

        validate_details(&param.name, param.base_price_cents)?;

        Ok(plan_repo.create(param).await?)
    }

    /// Updates a plan's name and base price.
    ///
    /// The new price only applies to appointments booked from now on;
    /// existing appointments keep the price agreed when they were made.
    ///
    /// # Arguments
    /// - `acting_user_id` - User performing the update
    /// - `param` - Parameters with the plan ID and new details
    ///
    /// # Returns
    /// - `Ok(HealthInsurancePlan)` - The updated plan
    /// - `Err(AppError::NotFound)` - No such plan in that clinic
    /// - `Err(AppError::BadRequest)` - Empty name or negative base price
    pub async fn update(
        &self,
        acting_user_id: i32,
        param: UpdateHealthInsurancePlanParam,
    ) -> Result<HealthInsurancePlan, AppError> {
        let clinic_id = param.clinic_id;
        let plan_id = param.plan_id;
        let result = self.update_validated(param).await;

        SecurityLogService::new(self.db)
            .record_outcome(
                Some(clinic_id),
                Some(acting_user_id),
                "update",
                "insurance_plan",
                Some(plan_id),
                &result,
            )
            .await;

        result
    }

    async fn update_validated(
        &self,
        param: UpdateHealthInsurancePlanParam,
    ) -> Result<HealthInsurancePlan, AppError> {
        let plan_repo = HealthInsurancePlanRepository::new(self.db);

        validate_details(&param.name, param.base_price_cents)?;

        let Some(plan) = plan_repo.update(param).await? else {
            return Err(AppError::NotFound("Insurance plan not found.".to_string()));
        };

        Ok(plan)
    }

    /// Removes a plan from a clinic.
    ///
    /// Appointments booked under the plan keep their agreed price; their plan
    /// reference is cleared by the foreign key.
    ///
    /// # Arguments
    /// - `acting_user_id` - User performing the deletion
    /// - `clinic_id` - Clinic the plan must belong to
    /// - `plan_id` - ID of the plan to remove
    ///
    /// # Returns
    /// - `Ok(())` - The plan was removed
    /// - `Err(AppError::NotFound)` - No such plan in that clinic
    pub async fn delete(
        &self,
        acting_user_id: i32,
        clinic_id: i32,
        plan_id: i32,
    ) -> Result<(), AppError> {
        let result = self.delete_by_id(clinic_id, plan_id).await;

        SecurityLogService::new(self.db)
            .record_outcome(
                Some(clinic_id),
                Some(acting_user_id),
                "delete",
                "insurance_plan",
                Some(plan_id),
                &result,
            )
            .await;

        result
    }

    async fn delete_by_id(&self, clinic_id: i32, plan_id: i32) -> Result<(), AppError> {
        let plan_repo = HealthInsurancePlanRepository::new(self.db);

        if !plan_repo.delete(clinic_id, plan_id).await? {
            return Err(AppError::NotFound("Insurance plan not found.".to_string()));
        }

        Ok(())
    }
}

fn validate_details(name: &str, base_price_cents: i32) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Plan name must not be empty.".to_string(),
        ));
    }

    if base_price_cents < 0 {
        return Err(AppError::BadRequest(
            "Base price must not be negative.".to_string(),
        ));
    }

    Ok(())
}
