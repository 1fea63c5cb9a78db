use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        clinic::{ClinicRepository, UserClinicRepository},
        user::UserRepository,
    },
    error::AppError,
    model::clinic::{AddClinicMemberParam, Clinic, ClinicMember, CreateClinicParam, UpdateClinicParam},
    service::security_log::SecurityLogService,
};

/// Service for clinic administration.
///
/// Covers clinic creation, settings, and membership. Every clinic is a tenant
/// boundary: membership rows decide which users may touch its data, and the
/// creating user always becomes the first member.
pub struct ClinicService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ClinicService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all clinics the user is a member of, ordered by name.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Clinic>, AppError> {
        let membership_repo = UserClinicRepository::new(self.db);

        Ok(membership_repo.get_clinics_for_user(user_id).await?)
    }

    /// Retrieves a single clinic.
    ///
    /// # Arguments
    /// - `clinic_id` - ID of the clinic to fetch
    ///
    /// # Returns
    /// - `Ok(Clinic)` - The requested clinic
    /// - `Err(AppError::NotFound)` - No clinic with this ID exists
    pub async fn get(&self, clinic_id: i32) -> Result<Clinic, AppError> {
        let clinic_repo = ClinicRepository::new(self.db);

        let Some(clinic) = clinic_repo.get_by_id(clinic_id).await? else {
            return Err(AppError::NotFound("Clinic not found.".to_string()));
        };

        Ok(clinic)
    }

    /// Creates a clinic and enrolls the creator as its first member.
    ///
    /// # Arguments
    /// - `acting_user_id` - User creating the clinic
    /// - `param` - Parameters with the clinic name
    ///
    /// # Returns
    /// - `Ok(Clinic)` - The newly created clinic
    /// - `Err(AppError::BadRequest)` - Empty clinic name
    /// - `Err(AppError::DbErr)` - Database error during creation
    pub async fn create(
        &self,
        acting_user_id: i32,
        param: CreateClinicParam,
    ) -> Result<Clinic, AppError> {
        let result = self.create_with_owner(acting_user_id, param).await;

        SecurityLogService::new(self.db)
            .record_outcome(
                result.as_ref().map(|c| c.id).ok(),
                Some(acting_user_id),
                "create",
                "clinic",
                result.as_ref().map(|c| c.id).ok(),
                &result,
            )
            .await;

        result
    }

    async fn create_with_owner(
        &self,
        acting_user_id: i32,
        param: CreateClinicParam,
    ) -> Result<Clinic, AppError> {
        let clinic_repo = ClinicRepository::new(self.db);
        let membership_repo = UserClinicRepository::new(self.db);

        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Clinic name must not be empty.".to_string(),
            ));
        }

        let clinic = clinic_repo.create(param).await?;
        membership_repo.add_member(acting_user_id, clinic.id).await?;

        Ok(clinic)
    }

    /// Updates a clinic's settings.
    ///
    /// # Arguments
    /// - `acting_user_id` - User performing the update
    /// - `param` - Parameters with the clinic ID and new name
    ///
    /// # Returns
    /// - `Ok(Clinic)` - The updated clinic
    /// - `Err(AppError::NotFound)` - No clinic with this ID exists
    /// - `Err(AppError::BadRequest)` - Empty clinic name
    pub async fn update(
        &self,
        acting_user_id: i32,
        param: UpdateClinicParam,
    ) -> Result<Clinic, AppError> {
        let clinic_id = param.clinic_id;
        let result = self.update_settings(param).await;

        SecurityLogService::new(self.db)
            .record_outcome(
                Some(clinic_id),
                Some(acting_user_id),
                "update",
                "clinic",
                Some(clinic_id),
                &result,
            )
            .await;

        result
    }

    async fn update_settings(&self, param: UpdateClinicParam) -> Result<Clinic, AppError> {
        let clinic_repo = ClinicRepository::new(self.db);

        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Clinic name must not be empty.".to_string(),
            ));
        }

        let Some(clinic) = clinic_repo.update(param).await? else {
            return Err(AppError::NotFound("Clinic not found.".to_string()));
        };

        Ok(clinic)
    }

    /// Retrieves a clinic's members, ordered by name.
    pub async fn get_members(&self, clinic_id: i32) -> Result<Vec<ClinicMember>, AppError> {
        let membership_repo = UserClinicRepository::new(self.db);

        Ok(membership_repo.get_members(clinic_id).await?)
    }

    /// Adds an existing user to a clinic by email.
    ///
    /// Adding a user who is already a member is a no-op rather than an error,
    /// so re-sending an invitation cannot fail.
    ///
    /// # Arguments
    /// - `acting_user_id` - User performing the addition
    /// - `param` - Parameters with the clinic ID and the new member's email
    ///
    /// # Returns
    /// - `Ok(ClinicMember)` - The added member
    /// - `Err(AppError::NotFound)` - No user account with this email
    pub async fn add_member(
        &self,
        acting_user_id: i32,
        param: AddClinicMemberParam,
    ) -> Result<ClinicMember, AppError> {
        let clinic_id = param.clinic_id;
        let result = self.add_member_by_email(param).await;

        SecurityLogService::new(self.db)
            .record_outcome(
                Some(clinic_id),
                Some(acting_user_id),
                "add_member",
                "clinic",
                Some(clinic_id),
                &result,
            )
            .await;

        result
    }

    async fn add_member_by_email(
        &self,
        param: AddClinicMemberParam,
    ) -> Result<ClinicMember, AppError> {
        let user_repo = UserRepository::new(self.db);
        let membership_repo = UserClinicRepository::new(self.db);

        let email = param.email.trim().to_lowercase();

        let Some(user) = user_repo.get_by_email(&email).await? else {
            return Err(AppError::NotFound(
                "No user account with this email.".to_string(),
            ));
        };

        membership_repo.add_member(user.id, param.clinic_id).await?;

        Ok(ClinicMember {
            user_id: user.id,
            name: user.name,
            email: user.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::user::CreateUserParam;
    use test_utils::builder::TestBuilder;

    async fn seed_user(db: &DatabaseConnection, email: &str) -> i32 {
        UserRepository::new(db)
            .create(CreateUserParam {
                name: "Ana Souza".to_string(),
                email: email.to_string(),
                password_hash: "$argon2id$test".to_string(),
                admin: false,
            })
            .await
            .unwrap()
            .id
    }

    /// Tests clinic creation.
    ///
    /// Verifies that the creating user is enrolled as the clinic's first
    /// member.
    /// Expected: clinic listed for the creator with one member row.
    #[tokio::test]
    async fn test_create_enrolls_creator_as_member() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::Clinic)
            .with_table(entity::prelude::UserClinic)
            .with_table(entity::prelude::SecurityLog)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user_id = seed_user(db, "ana@example.com").await;
        let service = ClinicService::new(db);

        let clinic = service
            .create(
                user_id,
                CreateClinicParam {
                    name: "Clinica Central".to_string(),
                },
            )
            .await
            .unwrap();

        let clinics = service.get_for_user(user_id).await.unwrap();
        assert_eq!(clinics.len(), 1);
        assert_eq!(clinics[0].id, clinic.id);

        let members = service.get_members(clinic.id).await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].user_id, user_id);
    }

    /// Tests adding a member by email.
    ///
    /// Verifies that lookup is case-insensitive and that re-adding the same
    /// member stays a single membership row.
    /// Expected: two members after the addition, still two after repeating it.
    #[tokio::test]
    async fn test_add_member_by_email() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::Clinic)
            .with_table(entity::prelude::UserClinic)
            .with_table(entity::prelude::SecurityLog)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let owner_id = seed_user(db, "ana@example.com").await;
        let invited_id = seed_user(db, "bruno@example.com").await;
        let service = ClinicService::new(db);

        let clinic = service
            .create(
                owner_id,
                CreateClinicParam {
                    name: "Clinica Central".to_string(),
                },
            )
            .await
            .unwrap();

        let member = service
            .add_member(
                owner_id,
                AddClinicMemberParam {
                    clinic_id: clinic.id,
                    email: " Bruno@Example.com ".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(member.user_id, invited_id);

        service
            .add_member(
                owner_id,
                AddClinicMemberParam {
                    clinic_id: clinic.id,
                    email: "bruno@example.com".to_string(),
                },
            )
            .await
            .unwrap();

        let members = service.get_members(clinic.id).await.unwrap();
        assert_eq!(members.len(), 2);
    }

    /// Tests adding a member with an email that has no account.
    ///
    /// Expected: NotFound error.
    #[tokio::test]
    async fn test_add_member_unknown_email_fails() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::Clinic)
            .with_table(entity::prelude::UserClinic)
            .with_table(entity::prelude::SecurityLog)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let owner_id = seed_user(db, "ana@example.com").await;
        let service = ClinicService::new(db);

        let clinic = service
            .create(
                owner_id,
                CreateClinicParam {
                    name: "Clinica Central".to_string(),
                },
            )
            .await
            .unwrap();

        let result = service
            .add_member(
                owner_id,
                AddClinicMemberParam {
                    clinic_id: clinic.id,
                    email: "nobody@example.com".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    /// Tests updating a clinic that does not exist.
    ///
    /// Expected: NotFound error.
    #[tokio::test]
    async fn test_update_missing_clinic_fails() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::Clinic)
            .with_table(entity::prelude::UserClinic)
            .with_table(entity::prelude::SecurityLog)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user_id = seed_user(db, "ana@example.com").await;
        let service = ClinicService::new(db);

        let result = service
            .update(
                user_id,
                UpdateClinicParam {
                    clinic_id: 42,
                    name: "Renamed".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
