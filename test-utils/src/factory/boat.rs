//! Boat factory for creating test boat entities.

use crate::factory::helpers::next_id;
use entity::boat::LoadRefs;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test boats with customizable fields.
///
/// New boats carry no loads; use `helpers::create_loaded_boat` for a boat with
/// an established relationship.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::boat::BoatFactory;
///
/// let boat = BoatFactory::new(&db, "owner-1")
///     .name("Orca")
///     .boat_type("Trawler")
///     .build()
///     .await?;
/// ```
pub struct BoatFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    boat_type: String,
    length: i32,
    owner: String,
}

impl<'a> BoatFactory<'a> {
    /// Creates a new BoatFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Boat {id}"` where id is auto-incremented
    /// - boat_type: `"Sloop"`
    /// - length: `28`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner` - Subject identifier of the owning user
    pub fn new(db: &'a DatabaseConnection, owner: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Boat {}", id),
            boat_type: "Sloop".to_string(),
            length: 28,
            owner: owner.into(),
        }
    }

    /// Sets the boat name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the boat type.
    pub fn boat_type(mut self, boat_type: impl Into<String>) -> Self {
        self.boat_type = boat_type.into();
        self
    }

    /// Sets the boat length.
    pub fn length(mut self, length: i32) -> Self {
        self.length = length;
        self
    }

    /// Builds and inserts the boat entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::boat::Model)` - Created boat entity with an empty loads list
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::boat::Model, DbErr> {
        entity::boat::ActiveModel {
            name: ActiveValue::Set(self.name),
            boat_type: ActiveValue::Set(self.boat_type),
            length: ActiveValue::Set(self.length),
            owner: ActiveValue::Set(self.owner),
            loads: ActiveValue::Set(LoadRefs::default()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a boat with default values for the given owner.
///
/// Shorthand for `BoatFactory::new(db, owner).build().await`.
pub async fn create_boat(
    db: &DatabaseConnection,
    owner: impl Into<String>,
) -> Result<entity::boat::Model, DbErr> {
    BoatFactory::new(db, owner).build().await
}
