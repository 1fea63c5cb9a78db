use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{clinic::UserClinicRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// A permission a handler can require before running.
pub enum Permission {
    /// Platform administrator (`user.admin`).
    Admin,
    /// Membership in the clinic with the given ID.
    ClinicMember(i32),
}

/// Session-based access control for API handlers.
///
/// Every protected handler constructs an `AuthGuard` and calls
/// [`AuthGuard::require`] with the permissions the operation needs. The guard
/// resolves the session to a user row and checks each permission against the
/// database, so a revoked membership takes effect on the next request.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session user and checks the given permissions.
    ///
    /// # Arguments
    /// - `permissions` - Every permission listed must hold; an empty slice
    ///   only requires a valid login
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AppError::AuthErr(_))` - Not logged in (401) or lacking a
    ///   permission (403)
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.get_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "user lacks the admin flag required by this endpoint".to_string(),
                        )
                        .into());
                    }
                }
                Permission::ClinicMember(clinic_id) => {
                    let member_repo = UserClinicRepository::new(self.db);
                    if !member_repo.is_member(user_id, *clinic_id).await? {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("user is not a member of clinic {}", clinic_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
