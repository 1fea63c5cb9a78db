use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    service::setup_code::SetupCodeService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the application database.
///
/// Sessions are persisted in a dedicated table of the same SQLite database so
/// that logins survive server restarts. Sessions expire after seven days of
/// inactivity.
///
/// # Arguments
/// - `db` - Connected database whose pool backs the session store
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Ready-to-mount session middleware
/// - `Err(AppError)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();

    let session_store = SqliteStore::new(pool);
    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session_layer)
}

/// Creates the shared HTTP client for outbound requests.
///
/// Redirects are disabled so that a misconfigured provider URL cannot bounce
/// requests to unexpected hosts.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Generates a one-time setup code when the application has no users yet.
///
/// The code is printed to the server log; registering with it grants the new
/// account admin privileges. Once any user exists this is a no-op.
///
/// # Arguments
/// - `db` - Database connection for checking existing users
/// - `setup_code_service` - Service that stores the generated code
///
/// # Returns
/// - `Ok(())` - Check completed (code generated or not needed)
/// - `Err(AppError)` - Database error while counting users
pub async fn check_for_first_run(
    db: &DatabaseConnection,
    setup_code_service: &SetupCodeService,
) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.any_exists().await? {
        return Ok(());
    }

    let code = setup_code_service.generate().await;
    tracing::info!(
        "No users found. Register with setup code {} within 10 minutes to create the first admin account.",
        code
    );

    Ok(())
}
