use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::patient::{
    CreatePatientParam, GetPatientsParam, Patient, UpdatePatientParam,
};

pub struct PatientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PatientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new patient
    ///
    /// # Arguments
    /// - `param`: Patient creation parameters
    ///
    /// # Returns
    /// - `Ok(Patient)`: The created patient
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, param: CreatePatientParam) -> Result<Patient, DbErr> {
        let entity = entity::patient::ActiveModel {
            clinic_id: ActiveValue::Set(param.clinic_id),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            phone_number: ActiveValue::Set(param.phone_number),
            sex: ActiveValue::Set(param.sex),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Patient::from_entity(entity))
    }

    /// Gets a patient by ID within a clinic
    ///
    /// # Returns
    /// - `Ok(Some(Patient))`: The patient
    /// - `Ok(None)`: No such patient in that clinic
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(
        &self,
        clinic_id: i32,
        patient_id: i32,
    ) -> Result<Option<Patient>, DbErr> {
        let entity = entity::prelude::Patient::find_by_id(patient_id)
            .filter(entity::patient::Column::ClinicId.eq(clinic_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Patient::from_entity))
    }

    /// Gets paginated patients for a clinic, ordered by name
    ///
    /// When a search string is given, only patients whose name contains it are
    /// returned. SQLite's LIKE makes the match case-insensitive for ASCII.
    ///
    /// # Arguments
    /// - `param`: Query parameters with clinic ID, optional search, and page bounds
    ///
    /// # Returns
    /// - `Ok((patients, total))`: Patients for the page and total match count
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(
        &self,
        param: GetPatientsParam,
    ) -> Result<(Vec<Patient>, u64), DbErr> {
        let mut query = entity::prelude::Patient::find()
            .filter(entity::patient::Column::ClinicId.eq(param.clinic_id));

        if let Some(search) = &param.search {
            query = query.filter(entity::patient::Column::Name.contains(search));
        }

        let paginator = query
            .order_by_asc(entity::patient::Column::Name)
            .paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(param.page).await?;
        let patients = entities.into_iter().map(Patient::from_entity).collect();

        Ok((patients, total))
    }

    /// Updates a patient's details
    ///
    /// # Returns
    /// - `Ok(Some(Patient))`: The updated patient
    /// - `Ok(None)`: No such patient in that clinic
    /// - `Err(DbErr)`: Database error
    pub async fn update(&self, param: UpdatePatientParam) -> Result<Option<Patient>, DbErr> {
        let Some(entity) = entity::prelude::Patient::find_by_id(param.patient_id)
            .filter(entity::patient::Column::ClinicId.eq(param.clinic_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::patient::ActiveModel = entity.into();
        active.name = ActiveValue::Set(param.name);
        active.email = ActiveValue::Set(param.email);
        active.phone_number = ActiveValue::Set(param.phone_number);
        active.sex = ActiveValue::Set(param.sex);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Patient::from_entity(updated)))
    }

    /// Gets a map of patient ID to name
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, String>)`: Patient names keyed by ID
    /// - `Err(DbErr)`: Database error
    pub async fn get_name_map(
        &self,
        patient_ids: Vec<i32>,
    ) -> Result<HashMap<i32, String>, DbErr> {
        if patient_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::Patient::find()
            .filter(entity::patient::Column::Id.is_in(patient_ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|p| (p.id, p.name)).collect())
    }

    /// Deletes a patient within a clinic
    ///
    /// Appointments and medical records for the patient are removed by the
    /// cascade on their foreign keys.
    ///
    /// # Returns
    /// - `Ok(true)`: The patient was deleted
    /// - `Ok(false)`: No such patient in that clinic
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, clinic_id: i32, patient_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Patient::delete_many()
            .filter(entity::patient::Column::Id.eq(patient_id))
            .filter(entity::patient::Column::ClinicId.eq(clinic_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
