pub use super::appointment::Entity as Appointment;
pub use super::appointment_payment::Entity as AppointmentPayment;
pub use super::clinic::Entity as Clinic;
pub use super::doctor::Entity as Doctor;
pub use super::doctor_business_hour::Entity as DoctorBusinessHour;
pub use super::health_insurance_plan::Entity as HealthInsurancePlan;
pub use super::medical_record::Entity as MedicalRecord;
pub use super::patient::Entity as Patient;
pub use super::payment_transaction::Entity as PaymentTransaction;
pub use super::security_log::Entity as SecurityLog;
pub use super::user::Entity as User;
pub use super::user_clinic::Entity as UserClinic;
