use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::security_log::{
    GetSecurityLogsParam, RecordSecurityLogParam, SecurityLog,
};

pub struct SecurityLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SecurityLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Writes one audit row
    ///
    /// # Arguments
    /// - `param`: What was attempted, by whom, and whether it went through
    ///
    /// # Returns
    /// - `Ok(())`: Row written
    /// - `Err(DbErr)`: Database error
    pub async fn insert(&self, param: RecordSecurityLogParam) -> Result<(), DbErr> {
        entity::security_log::ActiveModel {
            clinic_id: ActiveValue::Set(param.clinic_id),
            user_id: ActiveValue::Set(param.user_id),
            action: ActiveValue::Set(param.action),
            entity: ActiveValue::Set(param.entity),
            entity_id: ActiveValue::Set(param.entity_id),
            success: ActiveValue::Set(param.success),
            detail: ActiveValue::Set(param.detail),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Gets paginated audit rows for a clinic, newest first
    ///
    /// Acting user names are joined in for rows whose account still exists;
    /// rows pointing at deleted accounts keep their user ID with no name.
    ///
    /// # Arguments
    /// - `param`: Query parameters with clinic ID and page bounds
    ///
    /// # Returns
    /// - `Ok((logs, total))`: Audit rows for the page and the total row count
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(
        &self,
        param: GetSecurityLogsParam,
    ) -> Result<(Vec<SecurityLog>, u64), DbErr> {
        let paginator = entity::prelude::SecurityLog::find()
            .filter(entity::security_log::Column::ClinicId.eq(param.clinic_id))
            .order_by_desc(entity::security_log::Column::CreatedAt)
            .paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(param.page).await?;

        if entities.is_empty() {
            return Ok((Vec::new(), total));
        }

        let user_ids: Vec<i32> = entities.iter().filter_map(|l| l.user_id).collect();

        let user_names: HashMap<i32, String> = if user_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::User::find()
                .filter(entity::user::Column::Id.is_in(user_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|u| (u.id, u.name))
                .collect()
        };

        let logs = entities
            .into_iter()
            .map(|entity| {
                let user_name = entity.user_id.and_then(|id| user_names.get(&id).cloned());
                SecurityLog::from_entity(entity, user_name)
            })
            .collect();

        Ok((logs, total))
    }
}
