use sea_orm::DatabaseConnection;

use crate::server::{
    data::patient::PatientRepository,
    error::AppError,
    model::patient::{
        CreatePatientParam, GetPatientsParam, PaginatedPatients, Patient, UpdatePatientParam,
    },
    service::security_log::SecurityLogService,
};

/// Service for patient record management.
///
/// Patient contact details feed the transactional emails, so creation and
/// updates insist on a usable email address.
pub struct PatientService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PatientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves patients for a clinic with pagination and optional name search.
    ///
    /// # Arguments
    /// - `param` - Parameters with the clinic ID, search filter, and page bounds
    ///
    /// # Returns
    /// - `Ok(PaginatedPatients)` - Patients with pagination metadata
    /// - `Err(AppError)` - Database error during the query
    pub async fn get_paginated(
        &self,
        param: GetPatientsParam,
    ) -> Result<PaginatedPatients, AppError> {
        let patient_repo = PatientRepository::new(self.db);

        let page = param.page;
        let per_page = param.per_page;

        let (patients, total) = patient_repo.get_paginated(param).await?;
        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedPatients {
            patients,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Retrieves a single patient.
    ///
    /// # Arguments
    /// - `clinic_id` - Clinic the patient must belong to
    /// - `patient_id` - ID of the patient to fetch
    ///
    /// # Returns
    /// - `Ok(Patient)` - The requested patient
    /// - `Err(AppError::NotFound)` - No such patient in that clinic
    pub async fn get(&self, clinic_id: i32, patient_id: i32) -> Result<Patient, AppError> {
        let patient_repo = PatientRepository::new(self.db);

        let Some(patient) = patient_repo.get_by_id(clinic_id, patient_id).await? else {
            return Err(AppError::NotFound("Patient not found.".to_string()));
        };

        Ok(patient)
    }

    /// Registers a patient with a clinic.
    ///
    /// # Arguments
    /// - `acting_user_id` - User performing the registration
    /// - `param` - Parameters with the patient's details
    ///
    /// # Returns
    /// - `Ok(Patient)` - The newly registered patient
    /// - `Err(AppError::BadRequest)` - Empty name or phone number, or an
    ///   invalid email address
    pub async fn create(
        &self,
        acting_user_id: i32,
        param: CreatePatientParam,
    ) -> Result<Patient, AppError> {
        let clinic_id = param.clinic_id;
        let result = self.create_validated(param).await;

        SecurityLogService::new(self.db)
            .record_outcome(
                Some(clinic_id),
                Some(acting_user_id),
                "create",
                "patient",
                result.as_ref().map(|p| p.id).ok(),
                &result,
            )
            .await;

        result
    }

    async fn create_validated(&self, param: CreatePatientParam) -> Result<Patient, AppError> {
        let patient_repo = PatientRepository::new(self.db);

        validate_details(&param.name, &param.email, &param.phone_number)?;

        Ok(patient_repo.create(param).await?)
    }

    /// Updates a patient's contact details.
    ///
    /// # Arguments
    /// - `acting_user_id` - User performing the update
    /// - `param` - Parameters with the patient ID and new details
    ///
    /// # Returns
    /// - `Ok(Patient)` - The updated patient
    /// - `Err(AppError::NotFound)` - No such patient in that clinic
    /// - `Err(AppError::BadRequest)` - Empty name or phone number, or an
    ///   invalid email address
    pub async fn update(
        &self,
        acting_user_id: i32,
        param: UpdatePatientParam,
    ) -> Result<Patient, AppError> {
        let clinic_id = param.clinic_id;
        let patient_id = param.patient_id;
        let result = self.update_validated(param).await;

        SecurityLogService::new(self.db)
            .record_outcome(
                Some(clinic_id),
                Some(acting_user_id),
                "update",
                "patient",
                Some(patient_id),
                &result,
            )
            .await;

        result
    }

    async fn update_validated(&self, param: UpdatePatientParam) -> Result<Patient, AppError> {
        let patient_repo = PatientRepository::new(self.db);

        validate_details(&param.name, &param.email, &param.phone_number)?;

        let Some(patient) = patient_repo.update(param).await? else {
            return Err(AppError::NotFound("Patient not found.".to_string()));
        };

        Ok(patient)
    }

    /// Removes a patient record.
    ///
    /// The patient's appointments and medical records are removed by the
    /// cascade on their foreign keys.
    ///
    /// # Arguments
    /// - `acting_user_id` - User performing the deletion
    /// - `clinic_id` - Clinic the patient must belong to
    /// - `patient_id` - ID of the patient to remove
    ///
    /// # Returns
    /// - `Ok(())` - The patient was removed
    /// - `Err(AppError::NotFound)` - No such patient in that clinic
    pub async fn delete(
        &self,
        acting_user_id: i32,
        clinic_id: i32,
        patient_id: i32,
    ) -> Result<(), AppError> {
        let result = self.delete_by_id(clinic_id, patient_id).await;

        SecurityLogService::new(self.db)
            .record_outcome(
                Some(clinic_id),
                Some(acting_user_id),
                "delete",
                "patient",
                Some(patient_id),
                &result,
            )
            .await;

        result
    }

    async fn delete_by_id(&self, clinic_id: i32, patient_id: i32) -> Result<(), AppError> {
        let patient_repo = PatientRepository::new(self.db);

        if !patient_repo.delete(clinic_id, patient_id).await? {
            return Err(AppError::NotFound("Patient not found.".to_string()));
        }

        Ok(())
    }
}

fn validate_details(name: &str, email: &str, phone_number: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Patient name must not be empty.".to_string(),
        ));
    }

    if !email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address.".to_string()));
    }

    if phone_number.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Phone number must not be empty.".to_string(),
        ));
    }

    Ok(())
}
