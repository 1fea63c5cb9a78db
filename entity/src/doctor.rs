use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "doctor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub clinic_id: i32,
    pub name: String,
    pub specialty: String,
    pub appointment_price_cents: i32,
    pub available_from_weekday: Option<i32>,
    pub available_to_weekday: Option<i32>,
    pub available_from_time: Option<String>,
    pub available_to_time: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::appointment::Entity")]
    Appointment,
    #[sea_orm(
        belongs_to = "super::clinic::Entity",
        from = "Column::ClinicId",
        to = "super::clinic::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Clinic,
    #[sea_orm(has_many = "super::doctor_business_hour::Entity")]
    DoctorBusinessHour,
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointment.def()
    }
}

impl Related<super::clinic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clinic.def()
    }
}

impl Related<super::doctor_business_hour::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DoctorBusinessHour.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
