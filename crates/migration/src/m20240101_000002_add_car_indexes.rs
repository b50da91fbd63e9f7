use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_car::Car;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Car: index on year for the by-year listing
        manager
            .create_index(
                Index::create()
                    .name("idx_car_year")
                    .table(Car::Table)
                    .col(Car::Year)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_car_year").table(Car::Table).to_owned())
            .await
    }
}
