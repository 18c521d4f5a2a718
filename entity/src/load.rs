use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "load")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub item: String,
    pub volume: i32,
    pub creation_date: String,
    /// Boat currently carrying this load, if any.
    pub carrier_id: Option<i32>,
    /// Name of the carrying boat, kept in step with boat renames.
    pub carrier_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
