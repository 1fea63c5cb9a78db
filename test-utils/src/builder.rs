use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Clinic};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Clinic)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// Initializes an empty builder ready to have entity tables added via `with_table()`.
    /// Chain method calls to configure the test environment before calling `build()`.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Chain multiple
    /// calls to add multiple tables. Tables should be added in dependency order (tables
    /// with foreign keys should be added after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for clinic membership operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - Clinic
    /// - UserClinic
    /// - SecurityLog
    ///
    /// The audit table is included because every mutation under test writes
    /// to it.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_clinic_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_clinic_tables(self) -> Self {
        self.with_table(User)
            .with_table(Clinic)
            .with_table(UserClinic)
            .with_table(SecurityLog)
    }

    /// Adds the tables required for appointment scheduling operations.
    ///
    /// This convenience method adds the clinic tables plus, in dependency order:
    /// - Doctor
    /// - DoctorBusinessHour
    /// - Patient
    /// - HealthInsurancePlan
    /// - Appointment
    ///
    /// Use this when testing scheduling functionality that doesn't touch
    /// billing. For tests involving payments, use `with_billing_tables()`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_appointment_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_appointment_tables(self) -> Self {
        self.with_clinic_tables()
            .with_table(Doctor)
            .with_table(DoctorBusinessHour)
            .with_table(Patient)
            .with_table(HealthInsurancePlan)
            .with_table(Appointment)
    }

    /// Adds the tables required for billing operations.
    ///
    /// This convenience method adds the appointment tables plus:
    /// - AppointmentPayment
    /// - PaymentTransaction
    ///
    /// This is equivalent to calling `with_appointment_tables()` followed by
    /// `with_table(AppointmentPayment)` and `with_table(PaymentTransaction)`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_billing_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_billing_tables(self) -> Self {
        self.with_appointment_tables()
            .with_table(AppointmentPayment)
            .with_table(PaymentTransaction)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`. Tables are created in the order
    /// they were added to the builder.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
