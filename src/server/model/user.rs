//! User account domain models and parameters.
//!
//! Provides domain models for application users with login credentials and admin
//! tracking. Includes parameter types for account registration and credential checks
//! during authentication.

use chrono::{DateTime, Utc};

use crate::model::user::{PaginatedUsersDto, UserDto, UserListItemDto};

/// Application user account.
///
/// Tracks the user's display name, login email, hashed password, and whether the
/// account carries admin privileges. The password hash never leaves the server;
/// `into_dto` drops it before the model crosses the controller boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Database ID of the user.
    pub id: i32,
    /// Display name of the user.
    pub name: String,
    /// Login email, unique across the application.
    pub email: String,
    /// Argon2 hash of the user's password.
    pub password_hash: String,
    /// Whether the user has admin privileges.
    pub admin: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is intentionally dropped here.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO without credential material
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            admin: self.admin,
        }
    }

    /// Converts the user domain model to an admin listing DTO.
    ///
    /// # Returns
    /// - `UserListItemDto` - The converted DTO including creation time
    pub fn into_list_item_dto(self) -> UserListItemDto {
        UserListItemDto {
            id: self.id,
            name: self.name,
            email: self.email,
            admin: self.admin,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            admin: entity.admin,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a user account during registration.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    /// Display name of the new user.
    pub name: String,
    /// Login email for the new account.
    pub email: String,
    /// Argon2 hash of the chosen password.
    pub password_hash: String,
    /// Whether the new account has admin privileges.
    pub admin: bool,
}

/// Paginated collection of users with metadata.
///
/// Contains a page of users along with pagination metadata for building the
/// admin user management interface.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    /// Users for this page.
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of users per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedUsers {
    /// Converts the paginated users domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `PaginatedUsersDto` - The converted page of users
    pub fn into_dto(self) -> PaginatedUsersDto {
        let users = self
            .users
            .into_iter()
            .map(|u| u.into_list_item_dto())
            .collect();

        PaginatedUsersDto {
            users,
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for paginated user queries.
///
/// Specifies which page and how many users per page to retrieve.
#[derive(Debug, Clone)]
pub struct GetAllUsersParam {
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of users to return per page.
    pub per_page: u64,
}
