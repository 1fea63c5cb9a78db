//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let clinic = factory::clinic::create_clinic(&db).await?;
//!
//!     // Create with all dependencies
//!     let (clinic, doctor, patient, appointment) =
//!         factory::helpers::create_appointment_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Using builder pattern for customization
//! let doctor = factory::doctor::DoctorFactory::new(&db, clinic.id)
//!     .name("Dr. Custom")
//!     .specialty("Dermatology")
//!     .appointment_price_cents(35_000)
//!     .build()
//!     .await?;
//!
//! // Using convenience functions with custom values
//! let hour = factory::create_business_hour(&db, doctor.id, 1, "08:00:00", "12:00:00").await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `clinic` - Create clinic entities
//! - `user_clinic` - Create clinic membership rows
//! - `doctor` - Create doctor entities and business hour rows
//! - `patient` - Create patient entities
//! - `insurance_plan` - Create health insurance plan entities
//! - `appointment` - Create appointment entities
//! - `payment` - Create payment aggregates and transactions
//! - `medical_record` - Create medical record entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod appointment;
pub mod clinic;
pub mod doctor;
pub mod helpers;
pub mod insurance_plan;
pub mod medical_record;
pub mod patient;
pub mod payment;
pub mod user;
pub mod user_clinic;

// Re-export commonly used factory functions for concise usage
pub use appointment::create_appointment;
pub use clinic::create_clinic;
pub use doctor::{create_business_hour, create_doctor};
pub use insurance_plan::create_insurance_plan;
pub use medical_record::create_medical_record;
pub use patient::create_patient;
pub use payment::{create_payment, create_transaction, create_transaction_at};
pub use user::create_user;
pub use user_clinic::create_membership;
