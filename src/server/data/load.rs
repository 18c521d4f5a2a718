//! Load data repository for database operations.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::load::{Carrier, CreateLoadParams, Load};

pub struct LoadRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LoadRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new load with no carrier.
    pub async fn create(&self, params: CreateLoadParams) -> Result<Load, DbErr> {
        let entity = entity::load::ActiveModel {
            item: ActiveValue::Set(params.item),
            volume: ActiveValue::Set(params.volume),
            creation_date: ActiveValue::Set(params.creation_date),
            carrier_id: ActiveValue::Set(None),
            carrier_name: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Load::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Load>, DbErr> {
        let entity = entity::prelude::Load::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Load::from_entity))
    }

    /// Gets loads in ascending id order, starting after `after`.
    ///
    /// # Arguments
    /// - `after` - Id of the last load on the previous page, if any
    /// - `limit` - Maximum number of loads to return
    pub async fn get_after(&self, after: Option<i32>, limit: u64) -> Result<Vec<Load>, DbErr> {
        let mut query = entity::prelude::Load::find();

        if let Some(after) = after {
            query = query.filter(entity::load::Column::Id.gt(after));
        }

        let entities = query
            .order_by_asc(entity::load::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Load::from_entity).collect())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Load::find().count(self.db).await
    }

    /// Overwrites a load's item, volume and creation date. The carrier is untouched.
    ///
    /// # Returns
    /// - `Ok(Load)` - The updated load
    /// - `Err(DbErr::RecordNotUpdated)` - No load with this id
    pub async fn update_details(
        &self,
        id: i32,
        item: String,
        volume: i32,
        creation_date: String,
    ) -> Result<Load, DbErr> {
        let entity = entity::load::ActiveModel {
            id: ActiveValue::Unchanged(id),
            item: ActiveValue::Set(item),
            volume: ActiveValue::Set(volume),
            creation_date: ActiveValue::Set(creation_date),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Load::from_entity(entity))
    }

    /// Sets or clears the boat carrying a load.
    ///
    /// # Arguments
    /// - `id` - Load to update
    /// - `carrier` - New carrier, or `None` to unassign
    pub async fn set_carrier(&self, id: i32, carrier: Option<Carrier>) -> Result<Load, DbErr> {
        let (carrier_id, carrier_name) = match carrier {
            Some(carrier) => (Some(carrier.id), Some(carrier.name)),
            None => (None, None),
        };

        let entity = entity::load::ActiveModel {
            id: ActiveValue::Unchanged(id),
            carrier_id: ActiveValue::Set(carrier_id),
            carrier_name: ActiveValue::Set(carrier_name),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Load::from_entity(entity))
    }

    /// Clears the carrier of every load carried by `boat_id`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of loads unassigned
    /// - `Err(DbErr)` - Database error during update
    pub async fn clear_carrier(&self, boat_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Load::update_many()
            .col_expr(entity::load::Column::CarrierId, Expr::value(Option::<i32>::None))
            .col_expr(
                entity::load::Column::CarrierName,
                Expr::value(Option::<String>::None),
            )
            .filter(entity::load::Column::CarrierId.eq(boat_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Refreshes the carrier name stored on every load carried by `boat_id`.
    pub async fn rename_carrier(&self, boat_id: i32, name: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Load::update_many()
            .col_expr(entity::load::Column::CarrierName, Expr::value(name))
            .filter(entity::load::Column::CarrierId.eq(boat_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a load row.
    ///
    /// # Returns
    /// - `Ok(true)` - Load deleted
    /// - `Ok(false)` - No load with this id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Load::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
