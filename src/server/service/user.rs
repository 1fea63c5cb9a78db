//! User service for business logic.
//!
//! This module provides the `UserService` for platform-level user queries.
//! Account creation and login live in the auth service; this service backs the
//! admin user list.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{GetAllUsersParam, PaginatedUsers},
};

/// Service providing business logic for user administration.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all registered users with pagination, ordered by name.
    ///
    /// # Arguments
    /// - `param` - Parameters with the page bounds
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users with pagination metadata
    /// - `Err(AppError)` - Database error during the query
    pub async fn get_all(&self, param: GetAllUsersParam) -> Result<PaginatedUsers, AppError> {
        let user_repo = UserRepository::new(self.db);

        let page = param.page;
        let per_page = param.per_page;
        let (users, total) = user_repo.get_all_paginated(page, per_page).await?;

        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages,
        })
    }
}
