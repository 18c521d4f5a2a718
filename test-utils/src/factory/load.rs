//! Load factory for creating test load entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test loads with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::load::LoadFactory;
///
/// let load = LoadFactory::new(&db)
///     .item("Crab pots")
///     .volume(12)
///     .build()
///     .await?;
/// ```
pub struct LoadFactory<'a> {
    db: &'a DatabaseConnection,
    item: String,
    volume: i32,
    creation_date: String,
    carrier: Option<(i32, String)>,
}

impl<'a> LoadFactory<'a> {
    /// Creates a new LoadFactory with default values.
    ///
    /// Defaults:
    /// - item: `"Item {id}"` where id is auto-incremented
    /// - volume: `5`
    /// - creation_date: `"01/01/2024"`
    /// - carrier: none
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            item: format!("Item {}", id),
            volume: 5,
            creation_date: "01/01/2024".to_string(),
            carrier: None,
        }
    }

    /// Sets the item description.
    pub fn item(mut self, item: impl Into<String>) -> Self {
        self.item = item.into();
        self
    }

    /// Sets the load volume.
    pub fn volume(mut self, volume: i32) -> Self {
        self.volume = volume;
        self
    }

    /// Sets the creation date string.
    pub fn creation_date(mut self, creation_date: impl Into<String>) -> Self {
        self.creation_date = creation_date.into();
        self
    }

    /// Sets the carrier reference on the load only.
    ///
    /// The boat side is left untouched; callers building a consistent pair should
    /// use `helpers::create_loaded_boat`.
    pub fn carrier(mut self, boat_id: i32, boat_name: impl Into<String>) -> Self {
        self.carrier = Some((boat_id, boat_name.into()));
        self
    }

    /// Builds and inserts the load entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::load::Model)` - Created load entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::load::Model, DbErr> {
        let (carrier_id, carrier_name) = match self.carrier {
            Some((id, name)) => (Some(id), Some(name)),
            None => (None, None),
        };

        entity::load::ActiveModel {
            item: ActiveValue::Set(self.item),
            volume: ActiveValue::Set(self.volume),
            creation_date: ActiveValue::Set(self.creation_date),
            carrier_id: ActiveValue::Set(carrier_id),
            carrier_name: ActiveValue::Set(carrier_name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unassigned load with default values.
///
/// Shorthand for `LoadFactory::new(db).build().await`.
pub async fn create_load(db: &DatabaseConnection) -> Result<entity::load::Model, DbErr> {
    LoadFactory::new(db).build().await
}
