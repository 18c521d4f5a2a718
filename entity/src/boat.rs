use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Reference to a load carried by a boat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadRef {
    pub id: i32,
}

/// Ordered list of carried loads, stored as a JSON document column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct LoadRefs(pub Vec<LoadRef>);

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "boat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_name = "type")]
    pub boat_type: String,
    pub length: i32,
    /// Subject of the user owning this boat.
    pub owner: String,
    #[sea_orm(column_type = "Json")]
    pub loads: LoadRefs,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
