use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::clinic::{Clinic, ClinicMember, CreateClinicParam, UpdateClinicParam};

pub struct ClinicRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClinicRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new clinic
    ///
    /// # Arguments
    /// - `param`: Clinic creation parameters
    ///
    /// # Returns
    /// - `Ok(Clinic)`: The created clinic
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, param: CreateClinicParam) -> Result<Clinic, DbErr> {
        let entity = entity::clinic::ActiveModel {
            name: ActiveValue::Set(param.name),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Clinic::from_entity(entity))
    }

    /// Gets a clinic by ID
    ///
    /// # Returns
    /// - `Ok(Some(Clinic))`: The clinic
    /// - `Ok(None)`: Clinic not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, clinic_id: i32) -> Result<Option<Clinic>, DbErr> {
        let entity = entity::prelude::Clinic::find_by_id(clinic_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Clinic::from_entity))
    }

    /// Renames a clinic
    ///
    /// # Arguments
    /// - `param`: Update parameters with the clinic ID and new name
    ///
    /// # Returns
    /// - `Ok(Some(Clinic))`: The updated clinic
    /// - `Ok(None)`: Clinic not found
    /// - `Err(DbErr)`: Database error
    pub async fn update(&self, param: UpdateClinicParam) -> Result<Option<Clinic>, DbErr> {
        let Some(entity) = entity::prelude::Clinic::find_by_id(param.clinic_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::clinic::ActiveModel = entity.into();
        active.name = ActiveValue::Set(param.name);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Clinic::from_entity(updated)))
    }
}

pub struct UserClinicRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserClinicRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a user is a member of a clinic
    ///
    /// # Arguments
    /// - `user_id`: Database ID of the user
    /// - `clinic_id`: Database ID of the clinic
    ///
    /// # Returns
    /// - `Ok(true)`: The user is a member
    /// - `Ok(false)`: No membership row exists
    /// - `Err(DbErr)`: Database error
    pub async fn is_member(&self, user_id: i32, clinic_id: i32) -> Result<bool, DbErr> {
        let membership = entity::prelude::UserClinic::find()
            .filter(entity::user_clinic::Column::UserId.eq(user_id))
            .filter(entity::user_clinic::Column::ClinicId.eq(clinic_id))
            .one(self.db)
            .await?;

        Ok(membership.is_some())
    }

    /// Grants a user membership in a clinic
    ///
    /// Checks for an existing membership first so repeated adds are harmless.
    ///
    /// # Arguments
    /// - `user_id`: Database ID of the user
    /// - `clinic_id`: Database ID of the clinic
    ///
    /// # Returns
    /// - `Ok(())`: Membership exists after the call
    /// - `Err(DbErr)`: Database error
    pub async fn add_member(&self, user_id: i32, clinic_id: i32) -> Result<(), DbErr> {
        if self.is_member(user_id, clinic_id).await? {
            return Ok(());
        }

        entity::user_clinic::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            clinic_id: ActiveValue::Set(clinic_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Gets all members of a clinic with their account details
    ///
    /// Fetches the membership rows, then the matching user accounts in one
    /// query, and composes the two.
    ///
    /// # Arguments
    /// - `clinic_id`: Database ID of the clinic
    ///
    /// # Returns
    /// - `Ok(Vec<ClinicMember>)`: Members ordered by name
    /// - `Err(DbErr)`: Database error
    pub async fn get_members(&self, clinic_id: i32) -> Result<Vec<ClinicMember>, DbErr> {
        let memberships = entity::prelude::UserClinic::find()
            .filter(entity::user_clinic::Column::ClinicId.eq(clinic_id))
            .all(self.db)
            .await?;

        if memberships.is_empty() {
            return Ok(Vec::new());
        }

        let user_ids: Vec<i32> = memberships.iter().map(|m| m.user_id).collect();

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?;

        Ok(users
            .into_iter()
            .map(|user| ClinicMember {
                user_id: user.id,
                name: user.name,
                email: user.email,
            })
            .collect())
    }

    /// Gets all clinics a user belongs to
    ///
    /// # Arguments
    /// - `user_id`: Database ID of the user
    ///
    /// # Returns
    /// - `Ok(Vec<Clinic>)`: Clinics the user is a member of, ordered by name
    /// - `Err(DbErr)`: Database error
    pub async fn get_clinics_for_user(&self, user_id: i32) -> Result<Vec<Clinic>, DbErr> {
        let memberships = entity::prelude::UserClinic::find()
            .filter(entity::user_clinic::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        if memberships.is_empty() {
            return Ok(Vec::new());
        }

        let clinic_ids: Vec<i32> = memberships.iter().map(|m| m.clinic_id).collect();

        let clinics = entity::prelude::Clinic::find()
            .filter(entity::clinic::Column::Id.is_in(clinic_ids))
            .order_by_asc(entity::clinic::Column::Name)
            .all(self.db)
            .await?;

        Ok(clinics.into_iter().map(Clinic::from_entity).collect())
    }
}
