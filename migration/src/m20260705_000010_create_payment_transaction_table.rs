use sea_orm_migration::{prelude::*, schema::*};

use super::m20260705_000009_create_appointment_payment_table::AppointmentPayment;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaymentTransaction::Table)
                    .if_not_exists()
                    .col(pk_auto(PaymentTransaction::Id))
                    .col(integer(PaymentTransaction::PaymentId))
                    .col(string(PaymentTransaction::Method))
                    .col(integer(PaymentTransaction::AmountCents))
                    .col(
                        timestamp(PaymentTransaction::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_transaction_payment_id")
                            .from(PaymentTransaction::Table, PaymentTransaction::PaymentId)
                            .to(AppointmentPayment::Table, AppointmentPayment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PaymentTransaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PaymentTransaction {
    Table,
    Id,
    PaymentId,
    Method,
    AmountCents,
    CreatedAt,
}
