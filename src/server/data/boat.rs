//! Boat data repository for database operations.
//!
//! Boats store the ids of the loads they carry as a JSON list. Keeping that list in step
//! with each load's carrier columns is the relationship service's job; this repository
//! only reads and writes rows.

use entity::boat::{LoadRef, LoadRefs};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::boat::{Boat, CreateBoatParams};

pub struct BoatRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BoatRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new boat carrying no loads.
    ///
    /// # Arguments
    /// - `params` - Name, type, length and owner of the boat
    ///
    /// # Returns
    /// - `Ok(Boat)` - The created boat with its store-assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateBoatParams) -> Result<Boat, DbErr> {
        let entity = entity::boat::ActiveModel {
            name: ActiveValue::Set(params.name),
            boat_type: ActiveValue::Set(params.boat_type),
            length: ActiveValue::Set(params.length),
            owner: ActiveValue::Set(params.owner),
            loads: ActiveValue::Set(LoadRefs::default()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Boat::from_entity(entity))
    }

    /// Finds a boat by id.
    ///
    /// # Returns
    /// - `Ok(Some(Boat))` - Boat found
    /// - `Ok(None)` - No boat with this id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Boat>, DbErr> {
        let entity = entity::prelude::Boat::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Boat::from_entity))
    }

    /// Gets boats owned by `owner` in ascending id order, starting after `after`.
    ///
    /// # Arguments
    /// - `owner` - Subject identifier of the owner
    /// - `after` - Id of the last boat on the previous page, if any
    /// - `limit` - Maximum number of boats to return
    ///
    /// # Returns
    /// - `Ok(Vec<Boat>)` - Up to `limit` boats
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_owner_after(
        &self,
        owner: &str,
        after: Option<i32>,
        limit: u64,
    ) -> Result<Vec<Boat>, DbErr> {
        let mut query =
            entity::prelude::Boat::find().filter(entity::boat::Column::Owner.eq(owner));

        if let Some(after) = after {
            query = query.filter(entity::boat::Column::Id.gt(after));
        }

        let entities = query
            .order_by_asc(entity::boat::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Boat::from_entity).collect())
    }

    /// Counts every boat owned by `owner`.
    pub async fn count_by_owner(&self, owner: &str) -> Result<u64, DbErr> {
        entity::prelude::Boat::find()
            .filter(entity::boat::Column::Owner.eq(owner))
            .count(self.db)
            .await
    }

    /// Checks whether another boat already uses `name`, ignoring case.
    ///
    /// Every boat name is compared after lowercasing, so "Titanic" and "titanic"
    /// collide regardless of owner.
    ///
    /// # Arguments
    /// - `name` - Candidate name
    /// - `excluding_id` - Boat to ignore, used when a boat keeps its own name on update
    ///
    /// # Returns
    /// - `Ok(true)` - Some other boat has this name
    /// - `Ok(false)` - The name is free
    /// - `Err(DbErr)` - Database error during query
    pub async fn name_taken(&self, name: &str, excluding_id: Option<i32>) -> Result<bool, DbErr> {
        let names: Vec<(i32, String)> = entity::prelude::Boat::find()
            .select_only()
            .column(entity::boat::Column::Id)
            .column(entity::boat::Column::Name)
            .into_tuple()
            .all(self.db)
            .await?;

        let wanted = name.to_lowercase();

        Ok(names
            .into_iter()
            .any(|(id, existing)| Some(id) != excluding_id && existing.to_lowercase() == wanted))
    }

    /// Overwrites a boat's name, type and length.
    ///
    /// # Returns
    /// - `Ok(Boat)` - The updated boat
    /// - `Err(DbErr::RecordNotUpdated)` - No boat with this id
    /// - `Err(DbErr)` - Other database error
    pub async fn update_details(
        &self,
        id: i32,
        name: String,
        boat_type: String,
        length: i32,
    ) -> Result<Boat, DbErr> {
        let entity = entity::boat::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(name),
            boat_type: ActiveValue::Set(boat_type),
            length: ActiveValue::Set(length),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Boat::from_entity(entity))
    }

    /// Replaces the list of loads a boat carries.
    ///
    /// # Arguments
    /// - `id` - Boat to update
    /// - `loads` - Load ids in carrying order
    ///
    /// # Returns
    /// - `Ok(Boat)` - The updated boat
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_loads(&self, id: i32, loads: &[i32]) -> Result<Boat, DbErr> {
        let refs = LoadRefs(loads.iter().map(|&id| LoadRef { id }).collect());

        let entity = entity::boat::ActiveModel {
            id: ActiveValue::Unchanged(id),
            loads: ActiveValue::Set(refs),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Boat::from_entity(entity))
    }

    /// Deletes a boat row.
    ///
    /// # Returns
    /// - `Ok(true)` - Boat deleted
    /// - `Ok(false)` - No boat with this id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Boat::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
