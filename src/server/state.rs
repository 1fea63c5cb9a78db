//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Mailer for transactional email delivery
//! - Setup code service for first-run admin registration

use sea_orm::DatabaseConnection;

use super::service::{mail::Mailer, setup_code::SetupCodeService};

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Mailer` wraps a `reqwest::Client`, which uses an `Arc` internally
/// - `SetupCodeService` uses `Arc` for shared state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all requests and manages a pool of
    /// connections to the SQLite database.
    pub db: DatabaseConnection,

    /// Transactional email sender.
    ///
    /// Posts templated messages to the configured email provider API. When the
    /// provider is not configured the mailer silently drops messages.
    pub mailer: Mailer,

    /// Service for managing the one-time setup code.
    ///
    /// Used to generate and validate a temporary code that allows the first
    /// registered user to gain admin access when no users exist yet.
    pub setup_code_service: SetupCodeService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `mailer` - Transactional email sender
    /// - `setup_code_service` - Service for managing the setup code
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        mailer: Mailer,
        setup_code_service: SetupCodeService,
    ) -> Self {
        Self {
            db,
            mailer,
            setup_code_service,
        }
    }
}
