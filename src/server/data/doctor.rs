use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::doctor::{
    BusinessHour, CreateDoctorParam, Doctor, GetDoctorsParam, UpdateDoctorParam,
};

pub struct DoctorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DoctorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new doctor
    ///
    /// The doctor starts without schedule rows; the weekly schedule is set
    /// through `replace_business_hours` afterwards.
    ///
    /// # Arguments
    /// - `param`: Doctor creation parameters
    ///
    /// # Returns
    /// - `Ok(Doctor)`: The created doctor
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, param: CreateDoctorParam) -> Result<Doctor, DbErr> {
        let entity = entity::doctor::ActiveModel {
            clinic_id: ActiveValue::Set(param.clinic_id),
            name: ActiveValue::Set(param.name),
            specialty: ActiveValue::Set(param.specialty),
            appointment_price_cents: ActiveValue::Set(param.appointment_price_cents),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Doctor::from_entity(entity, Vec::new()))
    }

    /// Gets a doctor by ID within a clinic, with schedule rows loaded
    ///
    /// # Returns
    /// - `Ok(Some(Doctor))`: The doctor with their weekly schedule
    /// - `Ok(None)`: No such doctor in that clinic
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, clinic_id: i32, doctor_id: i32) -> Result<Option<Doctor>, DbErr> {
        let Some(entity) = entity::prelude::Doctor::find_by_id(doctor_id)
            .filter(entity::doctor::Column::ClinicId.eq(clinic_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let hours = self.get_business_hour_rows(doctor_id).await?;

        Ok(Some(Doctor::from_entity(entity, hours)))
    }

    /// Gets paginated doctors for a clinic, ordered by name
    ///
    /// Schedule rows for the whole page are fetched in one query and grouped
    /// by doctor.
    ///
    /// # Arguments
    /// - `param`: Query parameters with clinic ID and page bounds
    ///
    /// # Returns
    /// - `Ok((doctors, total))`: Doctors for the page and the total doctor count
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(&self, param: GetDoctorsParam) -> Result<(Vec<Doctor>, u64), DbErr> {
        let paginator = entity::prelude::Doctor::find()
            .filter(entity::doctor::Column::ClinicId.eq(param.clinic_id))
            .order_by_asc(entity::doctor::Column::Name)
            .paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(param.page).await?;

        if entities.is_empty() {
            return Ok((Vec::new(), total));
        }

        let doctor_ids: Vec<i32> = entities.iter().map(|d| d.id).collect();

        let mut hours_by_doctor: HashMap<i32, Vec<entity::doctor_business_hour::Model>> =
            HashMap::new();
        let hour_rows = entity::prelude::DoctorBusinessHour::find()
            .filter(entity::doctor_business_hour::Column::DoctorId.is_in(doctor_ids))
            .all(self.db)
            .await?;
        for row in hour_rows {
            hours_by_doctor.entry(row.doctor_id).or_default().push(row);
        }

        let doctors = entities
            .into_iter()
            .map(|entity| {
                let hours = hours_by_doctor.remove(&entity.id).unwrap_or_default();
                Doctor::from_entity(entity, hours)
            })
            .collect();

        Ok((doctors, total))
    }

    /// Updates a doctor's details
    ///
    /// # Returns
    /// - `Ok(Some(Doctor))`: The updated doctor with schedule rows
    /// - `Ok(None)`: No such doctor in that clinic
    /// - `Err(DbErr)`: Database error
    pub async fn update(&self, param: UpdateDoctorParam) -> Result<Option<Doctor>, DbErr> {
        let Some(entity) = entity::prelude::Doctor::find_by_id(param.doctor_id)
            .filter(entity::doctor::Column::ClinicId.eq(param.clinic_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::doctor::ActiveModel = entity.into();
        active.name = ActiveValue::Set(param.name);
        active.specialty = ActiveValue::Set(param.specialty);
        active.appointment_price_cents = ActiveValue::Set(param.appointment_price_cents);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;
        let hours = self.get_business_hour_rows(updated.id).await?;

        Ok(Some(Doctor::from_entity(updated, hours)))
    }

    /// Deletes a doctor within a clinic
    ///
    /// # Returns
    /// - `Ok(true)`: The doctor was deleted
    /// - `Ok(false)`: No such doctor in that clinic
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, clinic_id: i32, doctor_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Doctor::delete_many()
            .filter(entity::doctor::Column::Id.eq(doctor_id))
            .filter(entity::doctor::Column::ClinicId.eq(clinic_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Replaces a doctor's weekly schedule rows
    ///
    /// Deletes the existing rows and inserts the new set, then clears the
    /// legacy availability columns so the record no longer carries two
    /// representations of its schedule.
    ///
    /// # Arguments
    /// - `clinic_id`: Clinic the doctor must belong to
    /// - `doctor_id`: Database ID of the doctor
    /// - `days`: New schedule rows
    ///
    /// # Returns
    /// - `Ok(Some(Doctor))`: The doctor with the new schedule loaded
    /// - `Ok(None)`: No such doctor in that clinic
    /// - `Err(DbErr)`: Database error
    pub async fn replace_business_hours(
        &self,
        clinic_id: i32,
        doctor_id: i32,
        days: &[BusinessHour],
    ) -> Result<Option<Doctor>, DbErr> {
        let Some(entity) = entity::prelude::Doctor::find_by_id(doctor_id)
            .filter(entity::doctor::Column::ClinicId.eq(clinic_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        entity::prelude::DoctorBusinessHour::delete_many()
            .filter(entity::doctor_business_hour::Column::DoctorId.eq(doctor_id))
            .exec(self.db)
            .await?;

        for day in days {
            entity::doctor_business_hour::ActiveModel {
                doctor_id: ActiveValue::Set(doctor_id),
                weekday: ActiveValue::Set(day.weekday),
                enabled: ActiveValue::Set(day.enabled),
                start_time: ActiveValue::Set(day.start_time.clone()),
                end_time: ActiveValue::Set(day.end_time.clone()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        let mut active: entity::doctor::ActiveModel = entity.into();
        active.available_from_weekday = ActiveValue::Set(None);
        active.available_to_weekday = ActiveValue::Set(None);
        active.available_from_time = ActiveValue::Set(None);
        active.available_to_time = ActiveValue::Set(None);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;
        let hours = self.get_business_hour_rows(doctor_id).await?;

        Ok(Some(Doctor::from_entity(updated, hours)))
    }

    /// Gets a map of doctor ID to name for a clinic
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, String>)`: Doctor names keyed by ID
    /// - `Err(DbErr)`: Database error
    pub async fn get_name_map(&self, clinic_id: i32) -> Result<HashMap<i32, String>, DbErr> {
        let entities = entity::prelude::Doctor::find()
            .filter(entity::doctor::Column::ClinicId.eq(clinic_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|d| (d.id, d.name)).collect())
    }

    /// Fetches the schedule rows for one doctor, ordered by weekday.
    async fn get_business_hour_rows(
        &self,
        doctor_id: i32,
    ) -> Result<Vec<entity::doctor_business_hour::Model>, DbErr> {
        entity::prelude::DoctorBusinessHour::find()
            .filter(entity::doctor_business_hour::Column::DoctorId.eq(doctor_id))
            .order_by_asc(entity::doctor_business_hour::Column::Weekday)
            .all(self.db)
            .await
    }
}
