//! Create `car` table.
//! One row per car record; the id is assigned by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(big_integer(Car::Id).primary_key().auto_increment())
                    .col(string_len(Car::Make, 64))
                    .col(string_len(Car::Model, 64))
                    .col(integer(Car::Year))
                    .col(string_len(Car::Color, 32))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Car::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Car {
    Table,
    Id,
    Make,
    Model,
    Year,
    Color,
}
