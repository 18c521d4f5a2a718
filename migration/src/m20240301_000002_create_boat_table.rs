use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Boat::Table)
                    .if_not_exists()
                    .col(pk_auto(Boat::Id))
                    .col(string(Boat::Name))
                    .col(string(Boat::Type))
                    .col(integer(Boat::Length))
                    .col(string(Boat::Owner))
                    .col(json(Boat::Loads))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_boat_owner")
                    .table(Boat::Table)
                    .col(Boat::Owner)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Boat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Boat {
    Table,
    Id,
    Name,
    Type,
    Length,
    Owner,
    Loads,
}
