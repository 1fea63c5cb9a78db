use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "payment_transaction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub payment_id: i32,
    pub method: String,
    pub amount_cents: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::appointment_payment::Entity",
        from = "Column::PaymentId",
        to = "super::appointment_payment::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AppointmentPayment,
}

impl Related<super::appointment_payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppointmentPayment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
