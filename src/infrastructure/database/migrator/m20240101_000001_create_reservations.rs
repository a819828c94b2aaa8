//! Create reservations table
//!
//! Stores one row per booking with an explicit stay range. The composite
//! index backs the overlap query that guards every create/update.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Reservations::ClientFullName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::RoomNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reservations::StayStart).date().not_null())
                    .col(ColumnDef::new(Reservations::StayEnd).date().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_room_stay")
                    .table(Reservations::Table)
                    .col(Reservations::RoomNumber)
                    .col(Reservations::StayStart)
                    .col(Reservations::StayEnd)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Reservations {
    Table,
    Id,
    ClientFullName,
    RoomNumber,
    StayStart,
    StayEnd,
}
