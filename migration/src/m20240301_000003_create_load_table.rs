use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign key on carrier_id: boat.loads holds the other side.
        manager
            .create_table(
                Table::create()
                    .table(Load::Table)
                    .if_not_exists()
                    .col(pk_auto(Load::Id))
                    .col(string(Load::Item))
                    .col(integer(Load::Volume))
                    .col(string(Load::CreationDate))
                    .col(integer_null(Load::CarrierId))
                    .col(string_null(Load::CarrierName))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_load_carrier_id")
                    .table(Load::Table)
                    .col(Load::CarrierId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Load::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Load {
    Table,
    Id,
    Item,
    Volume,
    CreationDate,
    CarrierId,
    CarrierName,
}
