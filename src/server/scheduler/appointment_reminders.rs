use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::{appointment::AppointmentRepository, doctor::DoctorRepository, patient::PatientRepository},
    error::AppError,
    service::mail::Mailer,
};

/// How far ahead of an appointment the reminder email goes out.
const REMINDER_WINDOW_HOURS: i64 = 24;

/// Starts the appointment reminder scheduler
///
/// This scheduler runs every minute and emails patients whose appointments
/// start within the next day. Each appointment is reminded once; a failed
/// send leaves the appointment unstamped so the next tick retries it.
///
/// When no email provider is configured the scheduler is not started at all.
///
/// # Arguments
/// - `db`: Database connection
/// - `mailer`: Transactional email sender
pub async fn start_scheduler(db: DatabaseConnection, mailer: Mailer) -> Result<(), AppError> {
    if !mailer.enabled() {
        tracing::info!("Appointment reminder scheduler not started, email is not configured");
        return Ok(());
    }

    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_db = db.clone();
    let job_mailer = mailer.clone();

    // Schedule job to run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let mailer = job_mailer.clone();

        Box::pin(async move {
            if let Err(e) = process_due_reminders(&db, &mailer).await {
                tracing::error!("Error processing appointment reminders: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Appointment reminder scheduler started");

    Ok(())
}

/// Sends reminder emails for appointments starting within the window
///
/// An appointment is due when it starts between now and the reminder window
/// and carries no reminder stamp. The stamp is only written after the
/// provider accepts the email.
pub async fn process_due_reminders(
    db: &DatabaseConnection,
    mailer: &Mailer,
) -> Result<(), AppError> {
    let appointment_repo = AppointmentRepository::new(db);
    let patient_repo = PatientRepository::new(db);
    let doctor_repo = DoctorRepository::new(db);

    let now = Utc::now();
    let until = now + chrono::Duration::hours(REMINDER_WINDOW_HOURS);

    let due = appointment_repo.get_due_for_reminder(now, until).await?;

    for appointment in due {
        let patient = patient_repo
            .get_by_id(appointment.clinic_id, appointment.patient_id)
            .await?;
        let doctor = doctor_repo
            .get_by_id(appointment.clinic_id, appointment.doctor_id)
            .await?;

        let (Some(patient), Some(doctor)) = (patient, doctor) else {
            tracing::warn!(
                "Skipping reminder for appointment {}, its patient or doctor is gone",
                appointment.id
            );
            continue;
        };

        tracing::info!(
            "Sending reminder for appointment {} to {}",
            appointment.id,
            patient.email
        );

        let sent = mailer
            .send_appointment_reminder(&patient.email, &patient.name, &doctor.name, appointment.date)
            .await;

        if sent {
            appointment_repo.stamp_reminder_sent(appointment.id).await?;
        }
    }

    Ok(())
}
