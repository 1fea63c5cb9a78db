use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{LoginDto, RegisterDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::{
            security_log::RecordSecurityLogParam,
            user::{CreateUserParam, User},
        },
        service::{security_log::SecurityLogService, setup_code::SetupCodeService},
    },
};

/// Minimum accepted password length for new accounts.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Service for credentials-based registration and login.
///
/// Handles account creation with argon2 password hashing, login verification,
/// and the one-time setup code that elevates the first registered account to
/// platform admin. Both operations write audit rows for successful and
/// rejected attempts.
pub struct AuthService<'a> {
    /// Database connection for user operations.
    pub db: &'a DatabaseConnection,
    /// In-memory store holding the one-time setup code.
    pub setup_codes: &'a SetupCodeService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `setup_codes` - Reference to the setup code store
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, setup_codes: &'a SetupCodeService) -> Self {
        Self { db, setup_codes }
    }

    /// Registers a new user account.
    ///
    /// Normalizes the email (trimmed, lowercased), validates the name, email
    /// shape, and password length, then hashes the password with argon2 and
    /// creates the account. Presenting a valid setup code grants platform
    /// admin; presenting an invalid one rejects the registration rather than
    /// silently downgrading it.
    ///
    /// # Arguments
    /// - `dto` - Registration payload with name, email, password, and an
    ///   optional setup code
    ///
    /// # Returns
    /// - `Ok(User)` - The newly created user
    /// - `Err(AppError::BadRequest)` - Empty name, malformed email, or a
    ///   password shorter than 8 characters
    /// - `Err(AppError::AuthErr)` - Email already registered or invalid setup code
    /// - `Err(AppError::DbErr)` - Database error during creation
    pub async fn register(&self, dto: RegisterDto) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let audit = SecurityLogService::new(self.db);

        let name = dto.name.trim().to_string();
        let email = normalize_email(&dto.email);

        if name.is_empty() {
            return Err(AppError::BadRequest("Name must not be empty.".to_string()));
        }
        if !email.contains('@') {
            return Err(AppError::BadRequest("Invalid email address.".to_string()));
        }
        if dto.password.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(
                "Password must be at least 8 characters.".to_string(),
            ));
        }

        let admin = match &dto.setup_code {
            Some(code) => {
                if !self.setup_codes.validate_and_consume(code).await {
                    audit
                        .record(RecordSecurityLogParam {
                            clinic_id: None,
                            user_id: None,
                            action: "register".to_string(),
                            entity: "user".to_string(),
                            entity_id: None,
                            success: false,
                            detail: Some("invalid setup code".to_string()),
                        })
                        .await;

                    return Err(AuthError::InvalidSetupCode.into());
                }

                true
            }
            None => false,
        };

        if user_repo.get_by_email(&email).await?.is_some() {
            audit
                .record(RecordSecurityLogParam {
                    clinic_id: None,
                    user_id: None,
                    action: "register".to_string(),
                    entity: "user".to_string(),
                    entity_id: None,
                    success: false,
                    detail: Some("email already registered".to_string()),
                })
                .await;

            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = hash_password(&dto.password)?;

        let user = user_repo
            .create(CreateUserParam {
                name,
                email,
                password_hash,
                admin,
            })
            .await?;

        if admin {
            tracing::info!("User {} registered as platform admin", user.name);
        }

        audit
            .record(RecordSecurityLogParam {
                clinic_id: None,
                user_id: Some(user.id),
                action: "register".to_string(),
                entity: "user".to_string(),
                entity_id: Some(user.id),
                success: true,
                detail: None,
            })
            .await;

        Ok(user)
    }

    /// Authenticates a user by email and password.
    ///
    /// All failure modes (unknown email, wrong password, unreadable stored
    /// hash) collapse into the same `InvalidCredentials` error so responses
    /// cannot be used to probe which emails have accounts.
    ///
    /// # Arguments
    /// - `dto` - Login payload with email and password
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AppError::AuthErr)` - Credentials did not match
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, dto: LoginDto) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let audit = SecurityLogService::new(self.db);

        let email = normalize_email(&dto.email);

        let Some(user) = user_repo.get_by_email(&email).await? else {
            audit
                .record(RecordSecurityLogParam {
                    clinic_id: None,
                    user_id: None,
                    action: "login".to_string(),
                    entity: "user".to_string(),
                    entity_id: None,
                    success: false,
                    detail: Some("unknown email".to_string()),
                })
                .await;

            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&user, &dto.password) {
            audit
                .record(RecordSecurityLogParam {
                    clinic_id: None,
                    user_id: Some(user.id),
                    action: "login".to_string(),
                    entity: "user".to_string(),
                    entity_id: Some(user.id),
                    success: false,
                    detail: Some("wrong password".to_string()),
                })
                .await;

            return Err(AuthError::InvalidCredentials.into());
        }

        audit
            .record(RecordSecurityLogParam {
                clinic_id: None,
                user_id: Some(user.id),
                action: "login".to_string(),
                entity: "user".to_string(),
                entity_id: Some(user.id),
                success: true,
                detail: None,
            })
            .await;

        Ok(user)
    }
}

/// Lowercases and trims an email so lookups are case-insensitive.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Hashes a password with argon2 and a fresh random salt.
///
/// # Arguments
/// - `password` - Plaintext password to hash
///
/// # Returns
/// - `Ok(String)` - PHC-format hash string for storage
/// - `Err(AppError::InternalError)` - Hashing failed
fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| AppError::InternalError(format!("Failed to hash password: {}", err)))?;

    Ok(hash.to_string())
}

/// Checks a plaintext password against a user's stored hash.
///
/// A stored hash that cannot be parsed is treated as a mismatch; the row is
/// logged so the broken account can be found and repaired.
fn verify_password(user: &User, password: &str) -> bool {
    let parsed = match PasswordHash::new(&user.password_hash) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::warn!(
                "Stored password hash for user {} is unreadable: {}",
                user.id,
                err
            );
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
