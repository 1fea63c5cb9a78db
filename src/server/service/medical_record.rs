use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        appointment::AppointmentRepository, medical_record::MedicalRecordRepository,
        patient::PatientRepository,
    },
    error::AppError,
    model::medical_record::{CreateMedicalRecordParam, MedicalRecord, UpdateMedicalRecordParam},
    service::security_log::SecurityLogService,
};

/// Service for patient medical records.
///
/// Records are free-form markdown notes in a patient's history. A record may
/// reference the appointment it was written during; the reference is optional
/// and survives the appointment's deletion.
pub struct MedicalRecordService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> MedicalRecordService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a patient's records, newest first.
    ///
    /// # Arguments
    /// - `clinic_id` - Clinic the patient must belong to
    /// - `patient_id` - Patient whose history to read
    ///
    /// # Returns
    /// - `Ok(Vec<MedicalRecord>)` - The patient's history
    /// - `Err(AppError::NotFound)` - No such patient in that clinic
    pub async fn get_for_patient(
        &self,
        clinic_id: i32,
        patient_id: i32,
    ) -> Result<Vec<MedicalRecord>, AppError> {
        let patient_repo = PatientRepository::new(self.db);
        let record_repo = MedicalRecordRepository::new(self.db);

        if patient_repo.get_by_id(clinic_id, patient_id).await?.is_none() {
            return Err(AppError::NotFound("Patient not found.".to_string()));
        }

        Ok(record_repo.get_by_patient(clinic_id, patient_id).await?)
    }

    /// Retrieves a single record.
    ///
    /// # Returns
    /// - `Ok(MedicalRecord)` - The requested record
    /// - `Err(AppError::NotFound)` - No such record in that clinic
    pub async fn get(&self, clinic_id: i32, record_id: i32) -> Result<MedicalRecord, AppError> {
        let record_repo = MedicalRecordRepository::new(self.db);

        let Some(record) = record_repo.get_by_id(clinic_id, record_id).await? else {
            return Err(AppError::NotFound("Medical record not found.".to_string()));
        };

        Ok(record)
    }

    /// Writes a record into a patient's history.
    ///
    /// # Arguments
    /// - `acting_user_id` - User writing the record
    /// - `param` - Parameters with the patient, optional appointment, and content
    ///
    /// # Returns
    /// - `Ok(MedicalRecord)` - The newly written record
    /// - `Err(AppError::NotFound)` - No such patient in that clinic
    /// - `Err(AppError::BadRequest)` - Empty content, or an appointment
    ///   reference pointing outside the clinic
    pub async fn create(
        &self,
        acting_user_id: i32,
        param: CreateMedicalRecordParam,
    ) -> Result<MedicalRecord, AppError> {
        let clinic_id = param.clinic_id;
        let result = self.create_validated(param).await;

        SecurityLogService::new(self.db)
            .record_outcome(
                Some(clinic_id),
                Some(acting_user_id),
                "create",
                "medical_record",
                result.as_ref().map(|r| r.id).ok(),
                &result,
            )
            .await;

        result
    }

    async fn create_validated(
        &self,
        param: CreateMedicalRecordParam,
    ) -> Result<MedicalRecord, AppError> {
        let patient_repo = PatientRepository::new(self.db);
        let appointment_repo = AppointmentRepository::new(self.db);
        let record_repo = MedicalRecordRepository::new(self.db);

        if param.content.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Record content must not be empty.".to_string(),
            ));
        }

        if patient_repo
            .get_by_id(param.clinic_id, param.patient_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Patient not found.".to_string()));
        }

        if let Some(appointment_id) = param.appointment_id {
            if appointment_repo
                .get_row_by_id(param.clinic_id, appointment_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(
                    "Appointment does not belong to this clinic.".to_string(),
                ));
            }
        }

        Ok(record_repo.create(param).await?)
    }

    /// Replaces a record's content.
    ///
    /// # Arguments
    /// - `acting_user_id` - User editing the record
    /// - `param` - Parameters with the record ID and new content
    ///
    /// # Returns
    /// - `Ok(MedicalRecord)` - The updated record
    /// - `Err(AppError::NotFound)` - No such record in that clinic
    /// - `Err(AppError::BadRequest)` - Empty content
    pub async fn update(
        &self,
        acting_user_id: i32,
        param: UpdateMedicalRecordParam,
    ) -> Result<MedicalRecord, AppError> {
        let clinic_id = param.clinic_id;
        let record_id = param.record_id;
        let result = self.update_validated(param).await;

        SecurityLogService::new(self.db)
            .record_outcome(
                Some(clinic_id),
                Some(acting_user_id),
                "update",
                "medical_record",
                Some(record_id),
                &result,
            )
            .await;

        result
    }

    async fn update_validated(
        &self,
        param: UpdateMedicalRecordParam,
    ) -> Result<MedicalRecord, AppError> {
        let record_repo = MedicalRecordRepository::new(self.db);

        if param.content.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Record content must not be empty.".to_string(),
            ));
        }

        let Some(record) = record_repo.update(param).await? else {
            return Err(AppError::NotFound("Medical record not found.".to_string()));
        };

        Ok(record)
    }

    /// Removes a record from a patient's history.
    ///
    /// # Arguments
    /// - `acting_user_id` - User removing the record
    /// - `clinic_id` - Clinic the record must belong to
    /// - `record_id` - ID of the record to remove
    ///
    /// # Returns
    /// - `Ok(())` - The record was removed
    /// - `Err(AppError::NotFound)` - No such record in that clinic
    pub async fn delete(
        &self,
        acting_user_id: i32,
        clinic_id: i32,
        record_id: i32,
    ) -> Result<(), AppError> {
        let result = self.delete_by_id(clinic_id, record_id).await;

        SecurityLogService::new(self.db)
            .record_outcome(
                Some(clinic_id),
                Some(acting_user_id),
                "delete",
                "medical_record",
                Some(record_id),
                &result,
            )
            .await;

        result
    }

    async fn delete_by_id(&self, clinic_id: i32, record_id: i32) -> Result<(), AppError> {
        let record_repo = MedicalRecordRepository::new(self.db);

        if !record_repo.delete(clinic_id, record_id).await? {
            return Err(AppError::NotFound("Medical record not found.".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests writing and listing records for a patient.
    ///
    /// Expected: records come back newest first.
    #[tokio::test]
    async fn test_create_and_list_records() {
        let test = TestBuilder::new().with_appointment_tables()
            .with_table(entity::prelude::MedicalRecord)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let clinic = factory::create_clinic(db).await.unwrap();
        let patient = factory::create_patient(db, clinic.id).await.unwrap();
        let service = MedicalRecordService::new(db);

        service
            .create(
                1,
                CreateMedicalRecordParam {
                    clinic_id: clinic.id,
                    patient_id: patient.id,
                    appointment_id: None,
                    content: "# First visit".to_string(),
                },
            )
            .await
            .unwrap();

        let records = service.get_for_patient(clinic.id, patient.id).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].content, "# First visit");
        assert!(records[0].appointment_id.is_none());
    }

    /// Tests writing a record attached to an appointment.
    ///
    /// Expected: the record carries the appointment reference.
    #[tokio::test]
    async fn test_create_record_with_appointment() {
        let test = TestBuilder::new().with_appointment_tables()
            .with_table(entity::prelude::MedicalRecord)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (clinic, _, patient, appointment) =
            factory::helpers::create_appointment_with_dependencies(db).await.unwrap();
        let service = MedicalRecordService::new(db);

        let record = service
            .create(
                1,
                CreateMedicalRecordParam {
                    clinic_id: clinic.id,
                    patient_id: patient.id,
                    appointment_id: Some(appointment.id),
                    content: "Prescribed rest.".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(record.appointment_id, Some(appointment.id));
    }

    /// Tests writing a record that references another clinic's appointment.
    ///
    /// Expected: BadRequest error.
    #[tokio::test]
    async fn test_create_record_foreign_appointment_fails() {
        let test = TestBuilder::new().with_appointment_tables()
            .with_table(entity::prelude::MedicalRecord)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, _, _, appointment) =
            factory::helpers::create_appointment_with_dependencies(db).await.unwrap();
        let other_clinic = factory::create_clinic(db).await.unwrap();
        let other_patient = factory::create_patient(db, other_clinic.id).await.unwrap();
        let service = MedicalRecordService::new(db);

        let result = service
            .create(
                1,
                CreateMedicalRecordParam {
                    clinic_id: other_clinic.id,
                    patient_id: other_patient.id,
                    appointment_id: Some(appointment.id),
                    content: "Prescribed rest.".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests writing a record with empty content.
    ///
    /// Expected: BadRequest error.
    #[tokio::test]
    async fn test_create_record_empty_content_fails() {
        let test = TestBuilder::new().with_appointment_tables()
            .with_table(entity::prelude::MedicalRecord)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let clinic = factory::create_clinic(db).await.unwrap();
        let patient = factory::create_patient(db, clinic.id).await.unwrap();
        let service = MedicalRecordService::new(db);

        let result = service
            .create(
                1,
                CreateMedicalRecordParam {
                    clinic_id: clinic.id,
                    patient_id: patient.id,
                    appointment_id: None,
                    content: "   ".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests editing and removing a record.
    ///
    /// Expected: the edit is visible, then the removal empties the history.
    #[tokio::test]
    async fn test_update_and_delete_record() {
        let test = TestBuilder::new().with_appointment_tables()
            .with_table(entity::prelude::MedicalRecord)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let clinic = factory::create_clinic(db).await.unwrap();
        let patient = factory::create_patient(db, clinic.id).await.unwrap();
        let record = factory::create_medical_record(db, clinic.id, patient.id, "Draft note")
            .await
            .unwrap();
        let service = MedicalRecordService::new(db);

        let updated = service
            .update(
                1,
                UpdateMedicalRecordParam {
                    clinic_id: clinic.id,
                    record_id: record.id,
                    content: "Final note".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.content, "Final note");

        service.delete(1, clinic.id, record.id).await.unwrap();

        let records = service.get_for_patient(clinic.id, patient.id).await.unwrap();
        assert!(records.is_empty());
    }
}
