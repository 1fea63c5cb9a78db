use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        appointment::{Appointment, GetAppointmentsParam},
        payment::PaymentStatus,
    },
};

pub struct AppointmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new appointment row
    ///
    /// The price must already be resolved by the caller; the repository stores
    /// what it is given.
    ///
    /// # Arguments
    /// - `clinic_id`: Clinic the appointment belongs to
    /// - `patient_id`: Patient being seen
    /// - `doctor_id`: Doctor attending
    /// - `health_insurance_plan_id`: Covering plan, if any
    /// - `date`: Slot start in UTC
    /// - `price_cents`: Agreed price in cents
    ///
    /// # Returns
    /// - `Ok(Model)`: The created appointment
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        clinic_id: i32,
        patient_id: i32,
        doctor_id: i32,
        health_insurance_plan_id: Option<i32>,
        date: DateTime<Utc>,
        price_cents: i32,
    ) -> Result<entity::appointment::Model, DbErr> {
        entity::appointment::ActiveModel {
            clinic_id: ActiveValue::Set(clinic_id),
            patient_id: ActiveValue::Set(patient_id),
            doctor_id: ActiveValue::Set(doctor_id),
            health_insurance_plan_id: ActiveValue::Set(health_insurance_plan_id),
            date: ActiveValue::Set(date),
            price_cents: ActiveValue::Set(price_cents),
            reminder_sent_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets an appointment by ID within a clinic, enriched for display
    ///
    /// # Returns
    /// - `Ok(Some(Appointment))`: The appointment with names and payment status
    /// - `Ok(None)`: No such appointment in that clinic
    /// - `Err(AppError)`: Database error or unreadable stored payment status
    pub async fn get_by_id(
        &self,
        clinic_id: i32,
        appointment_id: i32,
    ) -> Result<Option<Appointment>, AppError> {
        let Some(entity) = entity::prelude::Appointment::find_by_id(appointment_id)
            .filter(entity::appointment::Column::ClinicId.eq(clinic_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut enriched = self.enrich(vec![entity]).await?;

        Ok(enriched.pop())
    }

    /// Gets the raw appointment row by ID within a clinic
    ///
    /// Used by mutations that need the stored values without display data.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The appointment row
    /// - `Ok(None)`: No such appointment in that clinic
    /// - `Err(DbErr)`: Database error
    pub async fn get_row_by_id(
        &self,
        clinic_id: i32,
        appointment_id: i32,
    ) -> Result<Option<entity::appointment::Model>, DbErr> {
        entity::prelude::Appointment::find_by_id(appointment_id)
            .filter(entity::appointment::Column::ClinicId.eq(clinic_id))
            .one(self.db)
            .await
    }

    /// Gets paginated appointments for a clinic, ordered by date
    ///
    /// Optional filters restrict the result to one doctor and to a UTC day
    /// range (both bounds inclusive). Display names and payment statuses for
    /// the whole page are fetched in batched queries.
    ///
    /// # Arguments
    /// - `param`: Query parameters with clinic ID, filters, and page bounds
    ///
    /// # Returns
    /// - `Ok((appointments, total))`: Enriched page and total match count
    /// - `Err(AppError)`: Database error or unreadable stored payment status
    pub async fn get_paginated(
        &self,
        param: GetAppointmentsParam,
    ) -> Result<(Vec<Appointment>, u64), AppError> {
        let mut query = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::ClinicId.eq(param.clinic_id));

        if let Some(doctor_id) = param.doctor_id {
            query = query.filter(entity::appointment::Column::DoctorId.eq(doctor_id));
        }
        if let Some(from) = param.from {
            let start = DateTime::<Utc>::from_naive_utc_and_offset(
                from.and_hms_opt(0, 0, 0).unwrap_or_default(),
                Utc,
            );
            query = query.filter(entity::appointment::Column::Date.gte(start));
        }
        if let Some(to) = param.to {
            let end = DateTime::<Utc>::from_naive_utc_and_offset(
                to.succ_opt().unwrap_or(to).and_hms_opt(0, 0, 0).unwrap_or_default(),
                Utc,
            );
            query = query.filter(entity::appointment::Column::Date.lt(end));
        }

        let paginator = query
            .order_by_asc(entity::appointment::Column::Date)
            .paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(param.page).await?;
        let appointments = self.enrich(entities).await?;

        Ok((appointments, total))
    }

    /// Updates an appointment's slot, people, plan, and price
    ///
    /// # Arguments
    /// - `clinic_id`: Clinic the appointment must belong to
    /// - `appointment_id`: Database ID of the appointment
    /// - `patient_id`: Patient being seen
    /// - `doctor_id`: Doctor attending
    /// - `health_insurance_plan_id`: Covering plan, if any
    /// - `date`: Slot start in UTC
    /// - `price_cents`: Agreed price in cents
    /// - `reset_reminder`: Clear `reminder_sent_at` so a rescheduled
    ///   appointment gets a fresh reminder
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated row
    /// - `Ok(None)`: No such appointment in that clinic
    /// - `Err(DbErr)`: Database error
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        clinic_id: i32,
        appointment_id: i32,
        patient_id: i32,
        doctor_id: i32,
        health_insurance_plan_id: Option<i32>,
        date: DateTime<Utc>,
        price_cents: i32,
        reset_reminder: bool,
    ) -> Result<Option<entity::appointment::Model>, DbErr> {
        let Some(entity) = entity::prelude::Appointment::find_by_id(appointment_id)
            .filter(entity::appointment::Column::ClinicId.eq(clinic_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::appointment::ActiveModel = entity.into();
        active.patient_id = ActiveValue::Set(patient_id);
        active.doctor_id = ActiveValue::Set(doctor_id);
        active.health_insurance_plan_id = ActiveValue::Set(health_insurance_plan_id);
        active.date = ActiveValue::Set(date);
        active.price_cents = ActiveValue::Set(price_cents);
        if reset_reminder {
            active.reminder_sent_at = ActiveValue::Set(None);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Deletes an appointment within a clinic
    ///
    /// The payment aggregate and its transactions are removed by the cascade
    /// on their foreign keys.
    ///
    /// # Returns
    /// - `Ok(true)`: The appointment was deleted
    /// - `Ok(false)`: No such appointment in that clinic
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, clinic_id: i32, appointment_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Appointment::delete_many()
            .filter(entity::appointment::Column::Id.eq(appointment_id))
            .filter(entity::appointment::Column::ClinicId.eq(clinic_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the occupied slots for a doctor within a UTC time range
    ///
    /// Returns each appointment's ID alongside its start so callers can exempt
    /// the appointment currently being edited.
    ///
    /// # Arguments
    /// - `doctor_id`: Doctor whose bookings to read
    /// - `start`: Range start in UTC, inclusive
    /// - `end`: Range end in UTC, exclusive
    ///
    /// # Returns
    /// - `Ok(Vec<(i32, DateTime<Utc>)>)`: Appointment IDs and their start times
    /// - `Err(DbErr)`: Database error
    pub async fn get_booked_times(
        &self,
        doctor_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<(i32, DateTime<Utc>)>, DbErr> {
        let entities = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::DoctorId.eq(doctor_id))
            .filter(entity::appointment::Column::Date.gte(start))
            .filter(entity::appointment::Column::Date.lt(end))
            .order_by_asc(entity::appointment::Column::Date)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|a| (a.id, a.date)).collect())
    }

    /// Gets appointments due for a reminder email
    ///
    /// An appointment is due when it starts inside the given window and no
    /// reminder has been stamped on it yet.
    ///
    /// # Arguments
    /// - `from`: Window start in UTC, inclusive
    /// - `until`: Window end in UTC, exclusive
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Due appointments, soonest first
    /// - `Err(DbErr)`: Database error
    pub async fn get_due_for_reminder(
        &self,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<entity::appointment::Model>, DbErr> {
        entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::Date.gte(from))
            .filter(entity::appointment::Column::Date.lt(until))
            .filter(entity::appointment::Column::ReminderSentAt.is_null())
            .order_by_asc(entity::appointment::Column::Date)
            .all(self.db)
            .await
    }

    /// Stamps the reminder timestamp on an appointment
    ///
    /// Written only after the reminder email was accepted by the provider, so
    /// a failed send is retried on the next scheduler tick.
    ///
    /// # Returns
    /// - `Ok(())`: Timestamp written (or no matching appointment)
    /// - `Err(DbErr)`: Database error
    pub async fn stamp_reminder_sent(&self, appointment_id: i32) -> Result<(), DbErr> {
        entity::prelude::Appointment::update_many()
            .filter(entity::appointment::Column::Id.eq(appointment_id))
            .col_expr(
                entity::appointment::Column::ReminderSentAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Gets all appointments for a clinic within a UTC time range
    ///
    /// Used by revenue reporting, which aggregates in memory over the fetched
    /// rows.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Matching appointment rows, oldest first
    /// - `Err(DbErr)`: Database error
    pub async fn get_all_in_range(
        &self,
        clinic_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<entity::appointment::Model>, DbErr> {
        entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::ClinicId.eq(clinic_id))
            .filter(entity::appointment::Column::Date.gte(start))
            .filter(entity::appointment::Column::Date.lt(end))
            .order_by_asc(entity::appointment::Column::Date)
            .all(self.db)
            .await
    }

    /// Gets appointment rows by ID within a clinic
    ///
    /// Used by reporting to resolve the appointments behind a set of
    /// transactions regardless of the reporting window.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: The matching rows
    /// - `Err(DbErr)`: Database error
    pub async fn get_rows_by_ids(
        &self,
        clinic_id: i32,
        appointment_ids: Vec<i32>,
    ) -> Result<Vec<entity::appointment::Model>, DbErr> {
        if appointment_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::ClinicId.eq(clinic_id))
            .filter(entity::appointment::Column::Id.is_in(appointment_ids))
            .all(self.db)
            .await
    }

    /// Composes appointment rows with their display names and payment statuses.
    ///
    /// Related patients, doctors, plans, and payment aggregates are each
    /// fetched in a single batched query and joined in memory.
    async fn enrich(
        &self,
        entities: Vec<entity::appointment::Model>,
    ) -> Result<Vec<Appointment>, AppError> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let appointment_ids: Vec<i32> = entities.iter().map(|a| a.id).collect();
        let patient_ids: Vec<i32> = entities.iter().map(|a| a.patient_id).collect();
        let doctor_ids: Vec<i32> = entities.iter().map(|a| a.doctor_id).collect();
        let plan_ids: Vec<i32> = entities
            .iter()
            .filter_map(|a| a.health_insurance_plan_id)
            .collect();

        let patient_names: HashMap<i32, String> = entity::prelude::Patient::find()
            .filter(entity::patient::Column::Id.is_in(patient_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect();

        let doctor_info: HashMap<i32, (String, String)> = entity::prelude::Doctor::find()
            .filter(entity::doctor::Column::Id.is_in(doctor_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|d| (d.id, (d.name, d.specialty)))
            .collect();

        let plan_names: HashMap<i32, String> = if plan_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::HealthInsurancePlan::find()
                .filter(entity::health_insurance_plan::Column::Id.is_in(plan_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|p| (p.id, p.name))
                .collect()
        };

        let mut payment_statuses: HashMap<i32, PaymentStatus> = HashMap::new();
        let payment_rows = entity::prelude::AppointmentPayment::find()
            .filter(entity::appointment_payment::Column::AppointmentId.is_in(appointment_ids))
            .all(self.db)
            .await?;
        for row in payment_rows {
            payment_statuses.insert(row.appointment_id, PaymentStatus::from_db(&row.status)?);
        }

        let appointments = entities
            .into_iter()
            .map(|entity| {
                let patient_name = patient_names
                    .get(&entity.patient_id)
                    .cloned()
                    .unwrap_or_else(|| "Unknown".to_string());
                let (doctor_name, doctor_specialty) = doctor_info
                    .get(&entity.doctor_id)
                    .cloned()
                    .unwrap_or_else(|| ("Unknown".to_string(), String::new()));
                let plan_name = entity
                    .health_insurance_plan_id
                    .and_then(|id| plan_names.get(&id).cloned());
                let status = payment_statuses
                    .get(&entity.id)
                    .copied()
                    .unwrap_or(PaymentStatus::Pending);

                Appointment::from_entity(
                    entity,
                    patient_name,
                    doctor_name,
                    doctor_specialty,
                    plan_name,
                    status,
                )
            })
            .collect();

        Ok(appointments)
    }
}
