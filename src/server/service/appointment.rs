use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        appointment::AppointmentRepository, doctor::DoctorRepository,
        insurance_plan::HealthInsurancePlanRepository, patient::PatientRepository,
        payment::PaymentRepository,
    },
    error::AppError,
    model::{
        appointment::{
            Appointment, CreateAppointmentParam, GetAppointmentsParam, PaginatedAppointments,
            UpdateAppointmentParam,
        },
        payment::PaymentStatus,
    },
    service::{
        doctor::DoctorService, mail::Mailer, payment::PaymentService,
        security_log::SecurityLogService,
    },
};

/// Service for appointment booking and scheduling.
///
/// Bookings are validated against the doctor's computed availability, priced
/// from the covering insurance plan or the doctor's default, and open a
/// payment aggregate on creation. Patient notifications go out after the
/// mutation commits and never fail it.
pub struct AppointmentService<'a> {
    pub db: &'a DatabaseConnection,
    pub mailer: &'a Mailer,
}

impl<'a> AppointmentService<'a> {
    pub fn new(db: &'a DatabaseConnection, mailer: &'a Mailer) -> Self {
        Self { db, mailer }
    }

    /// Retrieves appointments for a clinic with pagination and filters.
    ///
    /// # Arguments
    /// - `param` - Parameters with the clinic ID, optional doctor and day
    ///   filters, and page bounds
    ///
    /// # Returns
    /// - `Ok(PaginatedAppointments)` - Appointments with pagination metadata
    /// - `Err(AppError)` - Database error during the query
    pub async fn get_paginated(
        &self,
        param: GetAppointmentsParam,
    ) -> Result<PaginatedAppointments, AppError> {
        let appointment_repo = AppointmentRepository::new(self.db);

        let page = param.page;
        let per_page = param.per_page;

        let (appointments, total) = appointment_repo.get_paginated(param).await?;
        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedAppointments {
            appointments,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Retrieves a single appointment with its display data.
    ///
    /// # Arguments
    /// - `clinic_id` - Clinic the appointment must belong to
    /// - `appointment_id` - ID of the appointment to fetch
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The requested appointment
    /// - `Err(AppError::NotFound)` - No such appointment in that clinic
    pub async fn get(&self, clinic_id: i32, appointment_id: i32) -> Result<Appointment, AppError> {
        let appointment_repo = AppointmentRepository::new(self.db);

        let Some(appointment) = appointment_repo.get_by_id(clinic_id, appointment_id).await? else {
            return Err(AppError::NotFound("Appointment not found.".to_string()));
        };

        Ok(appointment)
    }

    /// Retrieves the occupied slot times for a doctor on a calendar day.
    ///
    /// # Arguments
    /// - `clinic_id` - Clinic the doctor must belong to
    /// - `doctor_id` - Doctor whose bookings to read
    /// - `date` - Calendar day to read
    ///
    /// # Returns
    /// - `Ok(Vec<NaiveTime>)` - Booked slot start times in UTC
    /// - `Err(AppError::NotFound)` - No such doctor in that clinic
    pub async fn booked_times(
        &self,
        clinic_id: i32,
        doctor_id: i32,
        date: chrono::NaiveDate,
    ) -> Result<Vec<chrono::NaiveTime>, AppError> {
        let doctor_repo = DoctorRepository::new(self.db);
        let appointment_repo = AppointmentRepository::new(self.db);

        if doctor_repo.get_by_id(clinic_id, doctor_id).await?.is_none() {
            return Err(AppError::NotFound("Doctor not found.".to_string()));
        }

        let day_start = DateTime::<Utc>::from_naive_utc_and_offset(
            date.and_hms_opt(0, 0, 0).unwrap_or_default(),
            Utc,
        );
        let day_end = day_start + chrono::Duration::days(1);

        let booked = appointment_repo
            .get_booked_times(doctor_id, day_start, day_end)
            .await?;

        Ok(booked.into_iter().map(|(_, start)| start.time()).collect())
    }

    /// Books an appointment.
    ///
    /// The slot must be one the doctor currently offers for that day. The
    /// price is taken from the covering plan when one is given, otherwise from
    /// the doctor's default. A pending payment aggregate is opened alongside
    /// the appointment and the patient gets a confirmation email.
    ///
    /// # Arguments
    /// - `acting_user_id` - User booking the appointment
    /// - `param` - Parameters with the people, plan, and slot
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The booked appointment
    /// - `Err(AppError::BadRequest)` - Patient, doctor, or plan outside the
    ///   clinic
    /// - `Err(AppError::Conflict)` - The slot is taken or outside the doctor's
    ///   hours
    pub async fn create(
        &self,
        acting_user_id: i32,
        param: CreateAppointmentParam,
    ) -> Result<Appointment, AppError> {
        let clinic_id = param.clinic_id;
        let result = self.create_validated(param).await;

        SecurityLogService::new(self.db)
            .record_outcome(
                Some(clinic_id),
                Some(acting_user_id),
                "create",
                "appointment",
                result.as_ref().map(|a| a.id).ok(),
                &result,
            )
            .await;

        result
    }

    async fn create_validated(
        &self,
        param: CreateAppointmentParam,
    ) -> Result<Appointment, AppError> {
        let patient_repo = PatientRepository::new(self.db);
        let doctor_repo = DoctorRepository::new(self.db);
        let plan_repo = HealthInsurancePlanRepository::new(self.db);
        let appointment_repo = AppointmentRepository::new(self.db);
        let payment_repo = PaymentRepository::new(self.db);

        let Some(patient) = patient_repo
            .get_by_id(param.clinic_id, param.patient_id)
            .await?
        else {
            return Err(AppError::BadRequest(
                "Patient does not belong to this clinic.".to_string(),
            ));
        };

        let Some(doctor) = doctor_repo
            .get_by_id(param.clinic_id, param.doctor_id)
            .await?
        else {
            return Err(AppError::BadRequest(
                "Doctor does not belong to this clinic.".to_string(),
            ));
        };

        let plan = match param.health_insurance_plan_id {
            Some(plan_id) => {
                let Some(plan) = plan_repo.get_by_id(param.clinic_id, plan_id).await? else {
                    return Err(AppError::BadRequest(
                        "Insurance plan does not belong to this clinic.".to_string(),
                    ));
                };
                Some(plan)
            }
            None => None,
        };

        let offered = DoctorService::new(self.db)
            .available_slots(param.clinic_id, param.doctor_id, param.date, None)
            .await?;
        if !offered.contains(&param.time) {
            return Err(AppError::Conflict("This slot is not available.".to_string()));
        }

        let price_cents = plan
            .as_ref()
            .map(|p| p.base_price_cents)
            .unwrap_or(doctor.appointment_price_cents);
        let date = DateTime::<Utc>::from_naive_utc_and_offset(param.date.and_time(param.time), Utc);

        let entity = appointment_repo
            .create(
                param.clinic_id,
                param.patient_id,
                param.doctor_id,
                param.health_insurance_plan_id,
                date,
                price_cents,
            )
            .await?;

        payment_repo
            .open_for_appointment(param.clinic_id, entity.id, price_cents)
            .await?;

        self.mailer
            .send_appointment_confirmation(
                &patient.email,
                &patient.name,
                &doctor.name,
                date,
                price_cents,
            )
            .await;

        Ok(Appointment::from_entity(
            entity,
            patient.name,
            doctor.name,
            doctor.specialty,
            plan.map(|p| p.name),
            PaymentStatus::Pending,
        ))
    }

    /// Edits or reschedules an appointment.
    ///
    /// The appointment's own slot stays bookable during the edit, so saving
    /// without moving it succeeds. The price is re-derived from the submitted
    /// plan and doctor, and the payment aggregate follows it. Moving the slot
    /// clears the reminder stamp and notifies the patient of the new time.
    ///
    /// # Arguments
    /// - `acting_user_id` - User editing the appointment
    /// - `param` - Parameters with the appointment ID and new details
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The updated appointment
    /// - `Err(AppError::NotFound)` - No such appointment in that clinic
    /// - `Err(AppError::BadRequest)` - Patient, doctor, or plan outside the
    ///   clinic
    /// - `Err(AppError::Conflict)` - The new slot is taken or outside the
    ///   doctor's hours
    pub async fn update(
        &self,
        acting_user_id: i32,
        param: UpdateAppointmentParam,
    ) -> Result<Appointment, AppError> {
        let clinic_id = param.clinic_id;
        let appointment_id = param.appointment_id;
        let result = self.update_validated(param).await;

        SecurityLogService::new(self.db)
            .record_outcome(
                Some(clinic_id),
                Some(acting_user_id),
                "update",
                "appointment",
                Some(appointment_id),
                &result,
            )
            .await;

        result
    }

    async fn update_validated(
        &self,
        param: UpdateAppointmentParam,
    ) -> Result<Appointment, AppError> {
        let patient_repo = PatientRepository::new(self.db);
        let doctor_repo = DoctorRepository::new(self.db);
        let plan_repo = HealthInsurancePlanRepository::new(self.db);
        let appointment_repo = AppointmentRepository::new(self.db);

        let Some(existing) = appointment_repo
            .get_row_by_id(param.clinic_id, param.appointment_id)
            .await?
        else {
            return Err(AppError::NotFound("Appointment not found.".to_string()));
        };

        let Some(patient) = patient_repo
            .get_by_id(param.clinic_id, param.patient_id)
            .await?
        else {
            return Err(AppError::BadRequest(
                "Patient does not belong to this clinic.".to_string(),
            ));
        };

        let Some(doctor) = doctor_repo
            .get_by_id(param.clinic_id, param.doctor_id)
            .await?
        else {
            return Err(AppError::BadRequest(
                "Doctor does not belong to this clinic.".to_string(),
            ));
        };

        let plan = match param.health_insurance_plan_id {
            Some(plan_id) => {
                let Some(plan) = plan_repo.get_by_id(param.clinic_id, plan_id).await? else {
                    return Err(AppError::BadRequest(
                        "Insurance plan does not belong to this clinic.".to_string(),
                    ));
                };
                Some(plan)
            }
            None => None,
        };

        let offered = DoctorService::new(self.db)
            .available_slots(
                param.clinic_id,
                param.doctor_id,
                param.date,
                Some(param.appointment_id),
            )
            .await?;
        if !offered.contains(&param.time) {
            return Err(AppError::Conflict("This slot is not available.".to_string()));
        }

        let price_cents = plan
            .as_ref()
            .map(|p| p.base_price_cents)
            .unwrap_or(doctor.appointment_price_cents);
        let date = DateTime::<Utc>::from_naive_utc_and_offset(param.date.and_time(param.time), Utc);
        let date_changed = date != existing.date;

        if appointment_repo
            .update(
                param.clinic_id,
                param.appointment_id,
                param.patient_id,
                param.doctor_id,
                param.health_insurance_plan_id,
                date,
                price_cents,
                date_changed,
            )
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Appointment not found.".to_string()));
        }

        PaymentService::new(self.db)
            .sync_total(param.clinic_id, param.appointment_id, price_cents)
            .await?;

        if date_changed {
            self.mailer
                .send_appointment_rescheduled(&patient.email, &patient.name, &doctor.name, date)
                .await;
        }

        self.get(param.clinic_id, param.appointment_id).await
    }

    /// Cancels an appointment.
    ///
    /// The payment aggregate and its transactions go with it, and the patient
    /// is notified of the cancellation.
    ///
    /// # Arguments
    /// - `acting_user_id` - User cancelling the appointment
    /// - `clinic_id` - Clinic the appointment must belong to
    /// - `appointment_id` - ID of the appointment to cancel
    ///
    /// # Returns
    /// - `Ok(())` - The appointment was cancelled
    /// - `Err(AppError::NotFound)` - No such appointment in that clinic
    pub async fn delete(
        &self,
        acting_user_id: i32,
        clinic_id: i32,
        appointment_id: i32,
    ) -> Result<(), AppError> {
        let result = self.delete_by_id(clinic_id, appointment_id).await;

        SecurityLogService::new(self.db)
            .record_outcome(
                Some(clinic_id),
                Some(acting_user_id),
                "delete",
                "appointment",
                Some(appointment_id),
                &result,
            )
            .await;

        result
    }

    async fn delete_by_id(&self, clinic_id: i32, appointment_id: i32) -> Result<(), AppError> {
        let appointment_repo = AppointmentRepository::new(self.db);
        let patient_repo = PatientRepository::new(self.db);
        let doctor_repo = DoctorRepository::new(self.db);

        let Some(row) = appointment_repo
            .get_row_by_id(clinic_id, appointment_id)
            .await?
        else {
            return Err(AppError::NotFound("Appointment not found.".to_string()));
        };

        let patient = patient_repo.get_by_id(clinic_id, row.patient_id).await?;
        let doctor = doctor_repo.get_by_id(clinic_id, row.doctor_id).await?;

        if !appointment_repo.delete(clinic_id, appointment_id).await? {
            return Err(AppError::NotFound("Appointment not found.".to_string()));
        }

        if let (Some(patient), Some(doctor)) = (patient, doctor) {
            self.mailer
                .send_appointment_cancelled(&patient.email, &patient.name, &doctor.name, row.date)
                .await;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, TimeZone};
    use test_utils::{builder::TestBuilder, factory};

    fn disabled_mailer() -> Mailer {
        Mailer::new(
            reqwest::Client::new(),
            "http://localhost:8080".to_string(),
            None,
            None,
            None,
        )
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 4).unwrap()
    }

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    /// Tests booking an appointment without a plan.
    ///
    /// Expected: the doctor's default price is charged and a pending payment
    /// aggregate is opened for the full amount.
    #[tokio::test]
    async fn test_create_appointment() {
        let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (clinic, doctor, patient, _) =
            factory::helpers::create_appointment_with_dependencies(db).await.unwrap();
        let mailer = disabled_mailer();
        let service = AppointmentService::new(db, &mailer);

        let appointment = service
            .create(
                1,
                CreateAppointmentParam {
                    clinic_id: clinic.id,
                    patient_id: patient.id,
                    doctor_id: doctor.id,
                    health_insurance_plan_id: None,
                    date: day(),
                    time: time(10, 0),
                },
            )
            .await
            .unwrap();

        assert_eq!(appointment.price_cents, doctor.appointment_price_cents);
        assert_eq!(appointment.payment_status, PaymentStatus::Pending);
        assert_eq!(appointment.patient_name, patient.name);

        let payment = PaymentRepository::new(db)
            .get_by_appointment(clinic.id, appointment.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(payment.total_cents, doctor.appointment_price_cents);
        assert_eq!(payment.paid_cents, 0);
    }

    /// Tests booking under an insurance plan.
    ///
    /// Expected: the plan's base price replaces the doctor's default.
    #[tokio::test]
    async fn test_create_appointment_uses_plan_price() {
        let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (clinic, doctor, patient, _) =
            factory::helpers::create_appointment_with_dependencies(db).await.unwrap();
        let plan = factory::insurance_plan::InsurancePlanFactory::new(db, clinic.id)
            .base_price_cents(15_000)
            .build()
            .await
            .unwrap();
        let mailer = disabled_mailer();
        let service = AppointmentService::new(db, &mailer);

        let appointment = service
            .create(
                1,
                CreateAppointmentParam {
                    clinic_id: clinic.id,
                    patient_id: patient.id,
                    doctor_id: doctor.id,
                    health_insurance_plan_id: Some(plan.id),
                    date: day(),
                    time: time(10, 0),
                },
            )
            .await
            .unwrap();

        assert_eq!(appointment.price_cents, 15_000);
        assert_eq!(appointment.health_insurance_plan_name, Some(plan.name));
    }

    /// Tests booking a slot that is already taken.
    ///
    /// The seeded appointment occupies 09:00 on the same day.
    /// Expected: Conflict error.
    #[tokio::test]
    async fn test_create_appointment_taken_slot_fails() {
        let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (clinic, doctor, patient, _) =
            factory::helpers::create_appointment_with_dependencies(db).await.unwrap();
        let mailer = disabled_mailer();
        let service = AppointmentService::new(db, &mailer);

        let result = service
            .create(
                1,
                CreateAppointmentParam {
                    clinic_id: clinic.id,
                    patient_id: patient.id,
                    doctor_id: doctor.id,
                    health_insurance_plan_id: None,
                    date: day(),
                    time: time(9, 0),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    /// Tests booking outside the doctor's business hours.
    ///
    /// The doctor attends 08:00 to 18:00 UTC.
    /// Expected: Conflict error.
    #[tokio::test]
    async fn test_create_appointment_outside_hours_fails() {
        let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (clinic, doctor, patient, _) =
            factory::helpers::create_appointment_with_dependencies(db).await.unwrap();
        let mailer = disabled_mailer();
        let service = AppointmentService::new(db, &mailer);

        let result = service
            .create(
                1,
                CreateAppointmentParam {
                    clinic_id: clinic.id,
                    patient_id: patient.id,
                    doctor_id: doctor.id,
                    health_insurance_plan_id: None,
                    date: day(),
                    time: time(20, 0),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    /// Tests booking with a patient from another clinic.
    ///
    /// Expected: BadRequest error.
    #[tokio::test]
    async fn test_create_appointment_foreign_patient_fails() {
        let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (clinic, doctor, _, _) =
            factory::helpers::create_appointment_with_dependencies(db).await.unwrap();
        let other_clinic = factory::create_clinic(db).await.unwrap();
        let foreign_patient = factory::create_patient(db, other_clinic.id).await.unwrap();
        let mailer = disabled_mailer();
        let service = AppointmentService::new(db, &mailer);

        let result = service
            .create(
                1,
                CreateAppointmentParam {
                    clinic_id: clinic.id,
                    patient_id: foreign_patient.id,
                    doctor_id: doctor.id,
                    health_insurance_plan_id: None,
                    date: day(),
                    time: time(10, 0),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests rescheduling an appointment to a new slot.
    ///
    /// Expected: the date moves and the reminder stamp is cleared so the
    /// scheduler sends a fresh reminder for the new time.
    #[tokio::test]
    async fn test_update_reschedule_clears_reminder() {
        let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (clinic, doctor, patient, _) =
            factory::helpers::create_appointment_with_dependencies(db).await.unwrap();
        let reminded = factory::appointment::AppointmentFactory::new(
            db, clinic.id, patient.id, doctor.id,
        )
        .date(Utc.with_ymd_and_hms(2026, 3, 4, 14, 0, 0).unwrap())
        .reminder_sent_at(Utc.with_ymd_and_hms(2026, 3, 3, 14, 0, 0).unwrap())
        .build()
        .await
        .unwrap();
        factory::create_payment(db, clinic.id, reminded.id, reminded.price_cents)
            .await
            .unwrap();
        let mailer = disabled_mailer();
        let service = AppointmentService::new(db, &mailer);

        service
            .update(
                1,
                UpdateAppointmentParam {
                    clinic_id: clinic.id,
                    appointment_id: reminded.id,
                    patient_id: patient.id,
                    doctor_id: doctor.id,
                    health_insurance_plan_id: None,
                    date: day(),
                    time: time(15, 0),
                },
            )
            .await
            .unwrap();

        let row = AppointmentRepository::new(db)
            .get_row_by_id(clinic.id, reminded.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.date, Utc.with_ymd_and_hms(2026, 3, 4, 15, 0, 0).unwrap());
        assert!(row.reminder_sent_at.is_none());
    }

    /// Tests saving an appointment without moving it.
    ///
    /// The appointment's own slot must stay bookable during the edit.
    /// Expected: the update succeeds and the reminder stamp survives.
    #[tokio::test]
    async fn test_update_same_slot_succeeds() {
        let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (clinic, doctor, patient, appointment) =
            factory::helpers::create_appointment_with_dependencies(db).await.unwrap();
        factory::create_payment(db, clinic.id, appointment.id, appointment.price_cents)
            .await
            .unwrap();
        let mailer = disabled_mailer();
        let service = AppointmentService::new(db, &mailer);

        let updated = service
            .update(
                1,
                UpdateAppointmentParam {
                    clinic_id: clinic.id,
                    appointment_id: appointment.id,
                    patient_id: patient.id,
                    doctor_id: doctor.id,
                    health_insurance_plan_id: None,
                    date: day(),
                    time: time(9, 0),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.date, appointment.date);
    }

    /// Tests that editing the plan re-derives the price and payment total.
    ///
    /// Expected: both the appointment and its payment aggregate carry the
    /// plan's base price afterwards.
    #[tokio::test]
    async fn test_update_plan_syncs_payment_total() {
        let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (clinic, doctor, patient, _) =
            factory::helpers::create_appointment_with_dependencies(db).await.unwrap();
        let plan = factory::insurance_plan::InsurancePlanFactory::new(db, clinic.id)
            .base_price_cents(12_000)
            .build()
            .await
            .unwrap();
        let mailer = disabled_mailer();
        let service = AppointmentService::new(db, &mailer);

        let appointment = service
            .create(
                1,
                CreateAppointmentParam {
                    clinic_id: clinic.id,
                    patient_id: patient.id,
                    doctor_id: doctor.id,
                    health_insurance_plan_id: None,
                    date: day(),
                    time: time(10, 0),
                },
            )
            .await
            .unwrap();
        assert_eq!(appointment.price_cents, 20_000);

        let updated = service
            .update(
                1,
                UpdateAppointmentParam {
                    clinic_id: clinic.id,
                    appointment_id: appointment.id,
                    patient_id: patient.id,
                    doctor_id: doctor.id,
                    health_insurance_plan_id: Some(plan.id),
                    date: day(),
                    time: time(10, 0),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.price_cents, 12_000);

        let payment = PaymentRepository::new(db)
            .get_by_appointment(clinic.id, appointment.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(payment.total_cents, 12_000);
    }

    /// Tests cancelling an appointment.
    ///
    /// Expected: the appointment and its payment aggregate are both gone.
    #[tokio::test]
    async fn test_delete_appointment_removes_payment() {
        let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (clinic, doctor, patient, _) =
            factory::helpers::create_appointment_with_dependencies(db).await.unwrap();
        let mailer = disabled_mailer();
        let service = AppointmentService::new(db, &mailer);

        let appointment = service
            .create(
                1,
                CreateAppointmentParam {
                    clinic_id: clinic.id,
                    patient_id: patient.id,
                    doctor_id: doctor.id,
                    health_insurance_plan_id: None,
                    date: day(),
                    time: time(10, 0),
                },
            )
            .await
            .unwrap();

        service.delete(1, clinic.id, appointment.id).await.unwrap();

        let result = service.get(clinic.id, appointment.id).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        let payment = PaymentRepository::new(db)
            .get_by_appointment(clinic.id, appointment.id)
            .await
            .unwrap();
        assert!(payment.is_none());
    }

    /// Tests the booked-times listing for a doctor's day.
    ///
    /// Expected: the seeded 09:00 appointment shows up.
    #[tokio::test]
    async fn test_booked_times() {
        let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (clinic, doctor, _, _) =
            factory::helpers::create_appointment_with_dependencies(db).await.unwrap();
        let mailer = disabled_mailer();
        let service = AppointmentService::new(db, &mailer);

        let booked = service.booked_times(clinic.id, doctor.id, day()).await.unwrap();

        assert_eq!(booked, vec![time(9, 0)]);
    }
}
