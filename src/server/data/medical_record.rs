use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::medical_record::{
    CreateMedicalRecordParam, MedicalRecord, UpdateMedicalRecordParam,
};

pub struct MedicalRecordRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MedicalRecordRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Writes a new medical record
    ///
    /// # Returns
    /// - `Ok(MedicalRecord)`: The created record
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, param: CreateMedicalRecordParam) -> Result<MedicalRecord, DbErr> {
        let entity = entity::medical_record::ActiveModel {
            clinic_id: ActiveValue::Set(param.clinic_id),
            patient_id: ActiveValue::Set(param.patient_id),
            appointment_id: ActiveValue::Set(param.appointment_id),
            content: ActiveValue::Set(param.content),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MedicalRecord::from_entity(entity))
    }

    /// Gets a record by ID within a clinic
    ///
    /// # Returns
    /// - `Ok(Some(MedicalRecord))`: The record
    /// - `Ok(None)`: No such record in that clinic
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(
        &self,
        clinic_id: i32,
        record_id: i32,
    ) -> Result<Option<MedicalRecord>, DbErr> {
        let entity = entity::prelude::MedicalRecord::find_by_id(record_id)
            .filter(entity::medical_record::Column::ClinicId.eq(clinic_id))
            .one(self.db)
            .await?;

        Ok(entity.map(MedicalRecord::from_entity))
    }

    /// Gets all records for a patient, newest first
    ///
    /// # Returns
    /// - `Ok(Vec<MedicalRecord>)`: The patient's history
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_patient(
        &self,
        clinic_id: i32,
        patient_id: i32,
    ) -> Result<Vec<MedicalRecord>, DbErr> {
        let entities = entity::prelude::MedicalRecord::find()
            .filter(entity::medical_record::Column::ClinicId.eq(clinic_id))
            .filter(entity::medical_record::Column::PatientId.eq(patient_id))
            .order_by_desc(entity::medical_record::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MedicalRecord::from_entity).collect())
    }

    /// Replaces a record's content
    ///
    /// # Returns
    /// - `Ok(Some(MedicalRecord))`: The updated record
    /// - `Ok(None)`: No such record in that clinic
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        param: UpdateMedicalRecordParam,
    ) -> Result<Option<MedicalRecord>, DbErr> {
        let Some(entity) = entity::prelude::MedicalRecord::find_by_id(param.record_id)
            .filter(entity::medical_record::Column::ClinicId.eq(param.clinic_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::medical_record::ActiveModel = entity.into();
        active.content = ActiveValue::Set(param.content);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(MedicalRecord::from_entity(updated)))
    }

    /// Deletes a record within a clinic
    ///
    /// # Returns
    /// - `Ok(true)`: The record was deleted
    /// - `Ok(false)`: No such record in that clinic
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, clinic_id: i32, record_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MedicalRecord::delete_many()
            .filter(entity::medical_record::Column::Id.eq(record_id))
            .filter(entity::medical_record::Column::ClinicId.eq(clinic_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
