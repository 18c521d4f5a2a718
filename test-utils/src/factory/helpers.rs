//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their relationships already established.

use entity::boat::{LoadRef, LoadRefs};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a boat owned by `owner` that carries a single load.
///
/// Both sides of the relation are written directly so tests start from a
/// consistent state without going through the relationship service:
/// the boat's `loads` list contains the load and the load's carrier points back
/// at the boat.
///
/// # Arguments
/// - `db` - Database connection
/// - `owner` - Subject identifier of the boat owner
///
/// # Returns
/// - `Ok((boat, load))` - The boat and the load it carries
/// - `Err(DbErr)` - Database error during creation
pub async fn create_loaded_boat(
    db: &DatabaseConnection,
    owner: &str,
) -> Result<(entity::boat::Model, entity::load::Model), DbErr> {
    let boat = crate::factory::boat::create_boat(db, owner).await?;
    let load = crate::factory::load::LoadFactory::new(db)
        .carrier(boat.id, &boat.name)
        .build()
        .await?;

    let mut active: entity::boat::ActiveModel = boat.into();
    active.loads = ActiveValue::Set(LoadRefs(vec![LoadRef { id: load.id }]));
    let boat = active.update(db).await?;

    Ok((boat, load))
}
