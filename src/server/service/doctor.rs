use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{appointment::AppointmentRepository, doctor::DoctorRepository},
    error::AppError,
    model::{
        doctor::{
            CreateDoctorParam, Doctor, GetDoctorsParam, PaginatedDoctors,
            UpdateBusinessHoursParam, UpdateDoctorParam,
        },
        schedule::WeeklySchedule,
    },
    service::{availability, security_log::SecurityLogService},
    util::parse::parse_time_of_day,
};

/// Service for doctor management and slot availability.
///
/// Owns the doctor roster of a clinic, the weekly schedules attached to each
/// doctor, and the computation of open booking slots for a given day.
pub struct DoctorService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> DoctorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves doctors for a clinic with pagination.
    ///
    /// # Arguments
    /// - `param` - Parameters with the clinic ID and page bounds
    ///
    /// # Returns
    /// - `Ok(PaginatedDoctors)` - Doctors with pagination metadata
    /// - `Err(AppError)` - Database error during the query
    pub async fn get_paginated(&self, param: GetDoctorsParam) -> Result<PaginatedDoctors, AppError> {
        let doctor_repo = DoctorRepository::new(self.db);

        let page = param.page;
        let per_page = param.per_page;

        let (doctors, total) = doctor_repo.get_paginated(param).await?;
        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedDoctors {
            doctors,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Retrieves a single doctor with their schedule rows.
    ///
    /// # Arguments
    /// - `clinic_id` - Clinic the doctor must belong to
    /// - `doctor_id` - ID of the doctor to fetch
    ///
    /// # Returns
    /// - `Ok(Doctor)` - The requested doctor
    /// - `Err(AppError::NotFound)` - No such doctor in that clinic
    pub async fn get(&self, clinic_id: i32, doctor_id: i32) -> Result<Doctor, AppError> {
        let doctor_repo = DoctorRepository::new(self.db);

        let Some(doctor) = doctor_repo.get_by_id(clinic_id, doctor_id).await? else {
            return Err(AppError::NotFound("Doctor not found.".to_string()));
        };

        Ok(doctor)
    }

    /// Adds a doctor to a clinic's roster.
    ///
    /// # Arguments
    /// - `acting_user_id` - User performing the creation
    /// - `param` - Parameters with the doctor's details
    ///
    /// # Returns
    /// - `Ok(Doctor)` - The newly created doctor
    /// - `Err(AppError::BadRequest)` - Empty name or specialty, or a negative
    ///   price
    pub async fn create(
        &self,
        acting_user_id: i32,
        param: CreateDoctorParam,
    ) -> Result<Doctor, AppError> {
        let clinic_id = param.clinic_id;
        let result = self.create_validated(param).await;

        SecurityLogService::new(self.db)
            .record_outcome(
                Some(clinic_id),
                Some(acting_user_id),
                "create",
                "doctor",
                result.as_ref().map(|d| d.id).ok(),
                &result,
            )
            .await;

        result
    }

    async fn create_validated(&self, param: CreateDoctorParam) -> Result<Doctor, AppError> {
        let doctor_repo = DoctorRepository::new(self.db);

        validate_details(&param.name, &param.specialty, param.appointment_price_cents)?;

        Ok(doctor_repo.create(param).await?)
    }

    /// Updates a doctor's name, specialty, and default price.
    ///
    /// # Arguments
    /// - `acting_user_id` - User performing the update
    /// - `param` - Parameters with the doctor ID and new details
    ///
    /// # Returns
    /// - `Ok(Doctor)` - The updated doctor
    /// - `Err(AppError::NotFound)` - No such doctor in that clinic
    /// - `Err(AppError::BadRequest)` - Empty name or specialty, or a negative
    ///   price
    pub async fn update(
        &self,
        acting_user_id: i32,
        param: UpdateDoctorParam,
    ) -> Result<Doctor, AppError> {
        let clinic_id = param.clinic_id;
        let doctor_id = param.doctor_id;
        let result = self.update_validated(param).await;

        SecurityLogService::new(self.db)
            .record_outcome(
                Some(clinic_id),
                Some(acting_user_id),
                "update",
                "doctor",
                Some(doctor_id),
                &result,
            )
            .await;

        result
    }

    async fn update_validated(&self, param: UpdateDoctorParam) -> Result<Doctor, AppError> {
        let doctor_repo = DoctorRepository::new(self.db);

        validate_details(&param.name, &param.specialty, param.appointment_price_cents)?;

        let Some(doctor) = doctor_repo.update(param).await? else {
            return Err(AppError::NotFound("Doctor not found.".to_string()));
        };

        Ok(doctor)
    }

    /// Removes a doctor from a clinic's roster.
    ///
    /// The doctor's appointments are removed by the cascade on their foreign
    /// key.
    ///
    /// # Arguments
    /// - `acting_user_id` - User performing the deletion
    /// - `clinic_id` - Clinic the doctor must belong to
    /// - `doctor_id` - ID of the doctor to remove
    ///
    /// # Returns
    /// - `Ok(())` - The doctor was removed
    /// - `Err(AppError::NotFound)` - No such doctor in that clinic
    pub async fn delete(
        &self,
        acting_user_id: i32,
        clinic_id: i32,
        doctor_id: i32,
    ) -> Result<(), AppError> {
        let result = self.delete_by_id(clinic_id, doctor_id).await;

        SecurityLogService::new(self.db)
            .record_outcome(
                Some(clinic_id),
                Some(acting_user_id),
                "delete",
                "doctor",
                Some(doctor_id),
                &result,
            )
            .await;

        result
    }

    async fn delete_by_id(&self, clinic_id: i32, doctor_id: i32) -> Result<(), AppError> {
        let doctor_repo = DoctorRepository::new(self.db);

        if !doctor_repo.delete(clinic_id, doctor_id).await? {
            return Err(AppError::NotFound("Doctor not found.".to_string()));
        }

        Ok(())
    }

    /// Replaces a doctor's weekly schedule.
    ///
    /// Existing schedule rows are dropped in favor of the submitted set, and
    /// the legacy availability window is cleared from the doctor record.
    ///
    /// # Arguments
    /// - `acting_user_id` - User performing the update
    /// - `param` - Parameters with the doctor ID and new schedule rows
    ///
    /// # Returns
    /// - `Ok(Doctor)` - The doctor with the new schedule loaded
    /// - `Err(AppError::NotFound)` - No such doctor in that clinic
    /// - `Err(AppError::BadRequest)` - A row has a weekday outside 0 to 6, or
    ///   an open day is missing a readable start or end time
    pub async fn update_business_hours(
        &self,
        acting_user_id: i32,
        param: UpdateBusinessHoursParam,
    ) -> Result<Doctor, AppError> {
        let clinic_id = param.clinic_id;
        let doctor_id = param.doctor_id;
        let result = self.replace_schedule(param).await;

        SecurityLogService::new(self.db)
            .record_outcome(
                Some(clinic_id),
                Some(acting_user_id),
                "update",
                "doctor_schedule",
                Some(doctor_id),
                &result,
            )
            .await;

        result
    }

    async fn replace_schedule(&self, param: UpdateBusinessHoursParam) -> Result<Doctor, AppError> {
        let doctor_repo = DoctorRepository::new(self.db);

        for day in &param.days {
            if !(0..7).contains(&day.weekday) {
                return Err(AppError::BadRequest(
                    "Weekday must be between 0 and 6.".to_string(),
                ));
            }

            if !day.enabled {
                continue;
            }

            let start = day.start_time.as_deref().and_then(parse_time_of_day);
            let end = day.end_time.as_deref().and_then(parse_time_of_day);

            if start.is_none() || end.is_none() {
                return Err(AppError::BadRequest(
                    "Open days need start and end times as HH:MM:SS.".to_string(),
                ));
            }
        }

        let Some(doctor) = doctor_repo
            .replace_business_hours(param.clinic_id, param.doctor_id, &param.days)
            .await?
        else {
            return Err(AppError::NotFound("Doctor not found.".to_string()));
        };

        Ok(doctor)
    }

    /// Computes the open booking slots for a doctor on a calendar day.
    ///
    /// Slots already taken by another appointment are excluded. When an
    /// existing appointment is being rescheduled its own slot stays available,
    /// so saving it without moving it does not fail.
    ///
    /// # Arguments
    /// - `clinic_id` - Clinic the doctor must belong to
    /// - `doctor_id` - Doctor whose schedule to consult
    /// - `date` - Calendar day to compute slots for
    /// - `editing_appointment_id` - Appointment being rescheduled, if any
    ///
    /// # Returns
    /// - `Ok(Vec<NaiveTime>)` - Open slot start times in UTC, earliest first
    /// - `Err(AppError::NotFound)` - No such doctor in that clinic
    pub async fn available_slots(
        &self,
        clinic_id: i32,
        doctor_id: i32,
        date: NaiveDate,
        editing_appointment_id: Option<i32>,
    ) -> Result<Vec<NaiveTime>, AppError> {
        let doctor_repo = DoctorRepository::new(self.db);
        let appointment_repo = AppointmentRepository::new(self.db);

        let Some(doctor) = doctor_repo.get_by_id(clinic_id, doctor_id).await? else {
            return Err(AppError::NotFound("Doctor not found.".to_string()));
        };

        let schedule = WeeklySchedule::from_doctor(&doctor);

        let day_start = DateTime::<Utc>::from_naive_utc_and_offset(
            date.and_hms_opt(0, 0, 0).unwrap_or_default(),
            Utc,
        );
        let day_end = day_start + Duration::days(1);

        let booked_rows = appointment_repo
            .get_booked_times(doctor_id, day_start, day_end)
            .await?;

        let editing_slot = editing_appointment_id.and_then(|id| {
            booked_rows
                .iter()
                .find(|(appointment_id, _)| *appointment_id == id)
                .map(|(_, start)| start.time())
        });
        let booked: Vec<NaiveTime> = booked_rows.iter().map(|(_, start)| start.time()).collect();

        Ok(availability::available_slots(
            &schedule,
            date,
            &booked,
            editing_slot,
        ))
    }
}

fn validate_details(
    name: &str,
    specialty: &str,
    appointment_price_cents: i32,
) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Doctor name must not be empty.".to_string(),
        ));
    }

    if specialty.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Specialty must not be empty.".to_string(),
        ));
    }

    if appointment_price_cents < 0 {
        return Err(AppError::BadRequest(
            "Appointment price must not be negative.".to_string(),
        ));
    }

    Ok(())
}
