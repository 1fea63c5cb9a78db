use std::collections::{BTreeMap, HashMap};

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        appointment::AppointmentRepository, doctor::DoctorRepository, patient::PatientRepository,
        payment::PaymentRepository,
    },
    error::AppError,
    model::{
        payment::PaymentMethod,
        report::{
            DailyRevenue, DoctorRevenue, GetRevenueReportParam, MethodRevenue, RecentTransaction,
            RevenueReport, RevenueSummary,
        },
    },
    util::time::{local_to_utc, utc_to_local},
};

/// Upper bound on the doctors listed in the report's ranking.
const TOP_DOCTOR_LIMIT: usize = 5;

/// Upper bound on the transactions listed in the report's recent activity.
const RECENT_TRANSACTION_LIMIT: usize = 10;

/// Service for clinic revenue reporting.
///
/// Appointment revenue is attributed to the day the appointment takes place,
/// while collected amounts follow the day the payment was recorded. Both sides
/// of the report use the clinic's local calendar, so the requested period is
/// translated to a UTC range before querying.
pub struct ReportService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the revenue report for a clinic over a local-day period.
    ///
    /// Omitted bounds fall back to a trailing thirty-day window ending today
    /// in clinic local time.
    ///
    /// # Arguments
    /// - `param` - Parameters with the clinic ID and optional period bounds
    ///
    /// # Returns
    /// - `Ok(RevenueReport)` - The report bundle for the period
    /// - `Err(AppError::BadRequest)` - The period starts after it ends
    pub async fn get_revenue_report(
        &self,
        param: GetRevenueReportParam,
    ) -> Result<RevenueReport, AppError> {
        let appointment_repo = AppointmentRepository::new(self.db);
        let payment_repo = PaymentRepository::new(self.db);
        let doctor_repo = DoctorRepository::new(self.db);
        let patient_repo = PatientRepository::new(self.db);

        let today = utc_to_local(Utc::now()).date();
        let to = param.to.unwrap_or(today);
        let from = param.from.unwrap_or(to - Duration::days(29));

        if from > to {
            return Err(AppError::BadRequest(
                "Report start must not be after its end.".to_string(),
            ));
        }

        let range_start = local_to_utc(from.and_hms_opt(0, 0, 0).unwrap_or_default());
        let range_end =
            local_to_utc((to + Duration::days(1)).and_hms_opt(0, 0, 0).unwrap_or_default());

        let appointments = appointment_repo
            .get_all_in_range(param.clinic_id, range_start, range_end)
            .await?;
        let transactions = payment_repo
            .get_clinic_transactions_in_range(param.clinic_id, range_start, range_end)
            .await?;

        let revenue_cents: i64 = appointments.iter().map(|a| a.price_cents as i64).sum();
        let paid_cents: i64 = transactions.iter().map(|(t, _)| t.amount_cents as i64).sum();

        let payments = payment_repo
            .get_by_appointment_ids(appointments.iter().map(|a| a.id).collect())
            .await?;
        let outstanding_cents: i64 = payments
            .iter()
            .map(|p| (p.total_cents - p.paid_cents).max(0) as i64)
            .sum();

        let summary = RevenueSummary {
            revenue_cents,
            appointment_count: appointments.len() as u64,
            paid_cents,
            outstanding_cents,
        };

        let mut parsed = Vec::with_capacity(transactions.len());
        for (transaction, appointment_id) in &transactions {
            parsed.push((PaymentMethod::from_db(&transaction.method)?, transaction, *appointment_id));
        }

        let mut daily_buckets: BTreeMap<chrono::NaiveDate, i64> = BTreeMap::new();
        for (_, transaction, _) in &parsed {
            let day = utc_to_local(transaction.created_at).date();
            *daily_buckets.entry(day).or_insert(0) += transaction.amount_cents as i64;
        }
        let daily = daily_buckets
            .into_iter()
            .map(|(date, revenue_cents)| DailyRevenue { date, revenue_cents })
            .collect();

        let mut methods: Vec<MethodRevenue> = Vec::new();
        for method in PaymentMethod::ALL {
            let amount_cents: i64 = parsed
                .iter()
                .filter(|(m, _, _)| *m == method)
                .map(|(_, t, _)| t.amount_cents as i64)
                .sum();
            let transaction_count = parsed.iter().filter(|(m, _, _)| *m == method).count() as u64;

            if transaction_count > 0 {
                methods.push(MethodRevenue {
                    method,
                    amount_cents,
                    transaction_count,
                });
            }
        }
        methods.sort_by(|a, b| b.amount_cents.cmp(&a.amount_cents));

        let mut doctor_totals: HashMap<i32, (i64, u64)> = HashMap::new();
        for appointment in &appointments {
            let entry = doctor_totals.entry(appointment.doctor_id).or_insert((0, 0));
            entry.0 += appointment.price_cents as i64;
            entry.1 += 1;
        }
        let doctor_names = doctor_repo.get_name_map(param.clinic_id).await?;
        let mut top_doctors: Vec<DoctorRevenue> = doctor_totals
            .into_iter()
            .map(|(doctor_id, (revenue_cents, appointment_count))| DoctorRevenue {
                doctor_id,
                doctor_name: doctor_names
                    .get(&doctor_id)
                    .cloned()
                    .unwrap_or_else(|| "Unknown".to_string()),
                revenue_cents,
                appointment_count,
            })
            .collect();
        top_doctors.sort_by(|a, b| {
            b.revenue_cents
                .cmp(&a.revenue_cents)
                .then(a.doctor_id.cmp(&b.doctor_id))
        });
        top_doctors.truncate(TOP_DOCTOR_LIMIT);

        let recent: Vec<_> = parsed.iter().rev().take(RECENT_TRANSACTION_LIMIT).collect();
        let recent_appointments = appointment_repo
            .get_rows_by_ids(
                param.clinic_id,
                recent.iter().map(|(_, _, appointment_id)| *appointment_id).collect(),
            )
            .await?;
        let patient_by_appointment: HashMap<i32, i32> = recent_appointments
            .iter()
            .map(|a| (a.id, a.patient_id))
            .collect();
        let patient_names = patient_repo
            .get_name_map(patient_by_appointment.values().copied().collect())
            .await?;

        let recent_transactions = recent
            .into_iter()
            .map(|(method, transaction, appointment_id)| RecentTransaction {
                id: transaction.id,
                patient_name: patient_by_appointment
                    .get(appointment_id)
                    .and_then(|patient_id| patient_names.get(patient_id))
                    .cloned()
                    .unwrap_or_else(|| "Unknown".to_string()),
                method: *method,
                amount_cents: transaction.amount_cents,
                created_at: transaction.created_at,
            })
            .collect();

        Ok(RevenueReport {
            from,
            to,
            summary,
            daily,
            methods,
            top_doctors,
            recent_transactions,
        })
    }
}
