//! REST API route definitions.
//!
//! Builds the axum router for every `/api` endpoint, mounts the Swagger UI and
//! rate-limits the credential endpoints. Route handlers live in
//! [`crate::server::controller`].

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        appointment::{
            AppointmentDto, AppointmentListItemDto, CreateAppointmentDto,
            PaginatedAppointmentsDto, UpdateAppointmentDto,
        },
        clinic::{AddClinicMemberDto, ClinicDto, ClinicMemberDto, CreateClinicDto, UpdateClinicDto},
        doctor::{
            BusinessHourDto, CreateDoctorDto, DoctorDto, DoctorListItemDto, PaginatedDoctorsDto,
            SlotDto, UpdateBusinessHoursDto, UpdateDoctorDto,
        },
        insurance::{
            CreateHealthInsurancePlanDto, HealthInsurancePlanDto, UpdateHealthInsurancePlanDto,
        },
        medical_record::{CreateMedicalRecordDto, MedicalRecordDto, UpdateMedicalRecordDto},
        patient::{CreatePatientDto, PaginatedPatientsDto, PatientDto, UpdatePatientDto},
        payment::{CreatePaymentTransactionDto, PaymentDto, PaymentTransactionDto},
        report::{
            DailyRevenueDto, DoctorRevenueDto, MethodRevenueDto, RecentTransactionDto,
            RevenueReportDto, RevenueSummaryDto,
        },
        security_log::{PaginatedSecurityLogsDto, SecurityLogDto},
        user::{LoginDto, PaginatedUsersDto, RegisterDto, UserDto, UserListItemDto},
    },
    server::{
        controller::{
            appointment, auth, clinic, doctor, insurance_plan, medical_record, patient, payment,
            report, security_log, user,
        },
        error::AppError,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::get_user,
        clinic::get_clinics,
        clinic::create_clinic,
        clinic::get_clinic,
        clinic::update_clinic,
        clinic::get_clinic_members,
        clinic::add_clinic_member,
        doctor::get_doctors,
        doctor::create_doctor,
        doctor::get_doctor_by_id,
        doctor::update_doctor,
        doctor::delete_doctor,
        doctor::update_business_hours,
        doctor::get_available_slots,
        patient::get_patients,
        patient::create_patient,
        patient::get_patient_by_id,
        patient::update_patient,
        patient::delete_patient,
        medical_record::get_medical_records,
        medical_record::create_medical_record,
        medical_record::update_medical_record,
        medical_record::delete_medical_record,
        insurance_plan::get_insurance_plans,
        insurance_plan::create_insurance_plan,
        insurance_plan::update_insurance_plan,
        insurance_plan::delete_insurance_plan,
        appointment::get_appointments,
        appointment::create_appointment,
        appointment::get_appointment_by_id,
        appointment::update_appointment,
        appointment::delete_appointment,
        appointment::get_booked_times,
        payment::get_payment,
        payment::add_payment_transaction,
        payment::delete_payment_transaction,
        report::get_revenue_report,
        report::export_revenue_report_csv,
        report::export_revenue_report_pdf,
        security_log::get_security_logs,
        user::get_users,
    ),
    components(schemas(
        ErrorDto,
        UserDto,
        RegisterDto,
        LoginDto,
        UserListItemDto,
        PaginatedUsersDto,
        ClinicDto,
        CreateClinicDto,
        UpdateClinicDto,
        ClinicMemberDto,
        AddClinicMemberDto,
        DoctorDto,
        DoctorListItemDto,
        BusinessHourDto,
        CreateDoctorDto,
        UpdateDoctorDto,
        UpdateBusinessHoursDto,
        SlotDto,
        PaginatedDoctorsDto,
        PatientDto,
        CreatePatientDto,
        UpdatePatientDto,
        PaginatedPatientsDto,
        HealthInsurancePlanDto,
        CreateHealthInsurancePlanDto,
        UpdateHealthInsurancePlanDto,
        MedicalRecordDto,
        CreateMedicalRecordDto,
        UpdateMedicalRecordDto,
        AppointmentDto,
        AppointmentListItemDto,
        CreateAppointmentDto,
        UpdateAppointmentDto,
        PaginatedAppointmentsDto,
        PaymentDto,
        PaymentTransactionDto,
        CreatePaymentTransactionDto,
        RevenueReportDto,
        RevenueSummaryDto,
        DailyRevenueDto,
        MethodRevenueDto,
        DoctorRevenueDto,
        RecentTransactionDto,
        SecurityLogDto,
        PaginatedSecurityLogsDto,
    ))
)]
struct ApiDoc;

/// Builds the API router with all routes and middleware attached.
///
/// The register and login endpoints sit behind a per-client rate limiter to
/// slow credential stuffing. The client IP is taken from forwarding headers
/// first, so the limiter keys on real clients when running behind a reverse
/// proxy.
pub fn router() -> Result<Router<AppState>, AppError> {
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_second(1)
            .burst_size(5)
            .finish()
            .ok_or_else(|| AppError::InternalError("Invalid rate limiter settings".to_string()))?,
    );

    let credential_routes = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .layer(GovernorLayer::new(governor_config));

    let router = Router::new()
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route(
            "/api/clinics",
            get(clinic::get_clinics).post(clinic::create_clinic),
        )
        .route(
            "/api/clinics/{clinic_id}",
            get(clinic::get_clinic).put(clinic::update_clinic),
        )
        .route(
            "/api/clinics/{clinic_id}/members",
            get(clinic::get_clinic_members).post(clinic::add_clinic_member),
        )
        .route(
            "/api/clinics/{clinic_id}/doctors",
            get(doctor::get_doctors).post(doctor::create_doctor),
        )
        .route(
            "/api/clinics/{clinic_id}/doctors/{doctor_id}",
            get(doctor::get_doctor_by_id)
                .put(doctor::update_doctor)
                .delete(doctor::delete_doctor),
        )
        .route(
            "/api/clinics/{clinic_id}/doctors/{doctor_id}/business-hours",
            put(doctor::update_business_hours),
        )
        .route(
            "/api/clinics/{clinic_id}/doctors/{doctor_id}/available-slots",
            get(doctor::get_available_slots),
        )
        .route(
            "/api/clinics/{clinic_id}/patients",
            get(patient::get_patients).post(patient::create_patient),
        )
        .route(
            "/api/clinics/{clinic_id}/patients/{patient_id}",
            get(patient::get_patient_by_id)
                .put(patient::update_patient)
                .delete(patient::delete_patient),
        )
        .route(
            "/api/clinics/{clinic_id}/patients/{patient_id}/records",
            get(medical_record::get_medical_records).post(medical_record::create_medical_record),
        )
        .route(
            "/api/clinics/{clinic_id}/records/{record_id}",
            put(medical_record::update_medical_record)
                .delete(medical_record::delete_medical_record),
        )
        .route(
            "/api/clinics/{clinic_id}/insurance-plans",
            get(insurance_plan::get_insurance_plans).post(insurance_plan::create_insurance_plan),
        )
        .route(
            "/api/clinics/{clinic_id}/insurance-plans/{plan_id}",
            put(insurance_plan::update_insurance_plan)
                .delete(insurance_plan::delete_insurance_plan),
        )
        .route(
            "/api/clinics/{clinic_id}/appointments",
            get(appointment::get_appointments).post(appointment::create_appointment),
        )
        .route(
            "/api/clinics/{clinic_id}/appointments/booked",
            get(appointment::get_booked_times),
        )
        .route(
            "/api/clinics/{clinic_id}/appointments/{appointment_id}",
            get(appointment::get_appointment_by_id)
                .put(appointment::update_appointment)
                .delete(appointment::delete_appointment),
        )
        .route(
            "/api/clinics/{clinic_id}/appointments/{appointment_id}/payment",
            get(payment::get_payment),
        )
        .route(
            "/api/clinics/{clinic_id}/appointments/{appointment_id}/payment/transactions",
            post(payment::add_payment_transaction),
        )
        .route(
            "/api/clinics/{clinic_id}/appointments/{appointment_id}/payment/transactions/{transaction_id}",
            delete(payment::delete_payment_transaction),
        )
        .route(
            "/api/clinics/{clinic_id}/reports/revenue",
            get(report::get_revenue_report),
        )
        .route(
            "/api/clinics/{clinic_id}/reports/revenue/export.csv",
            get(report::export_revenue_report_csv),
        )
        .route(
            "/api/clinics/{clinic_id}/reports/revenue/export.pdf",
            get(report::export_revenue_report_pdf),
        )
        .route(
            "/api/clinics/{clinic_id}/security-logs",
            get(security_log::get_security_logs),
        )
        .route("/api/admin/users", get(user::get_users))
        .merge(credential_routes)
        .merge(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive());

    Ok(router)
}
