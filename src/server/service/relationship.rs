//! Boat and load relationship management.
//!
//! A boat lists the ids of the loads it carries and each carried load points back at
//! its boat. Every operation here changes both sides inside one database transaction,
//! so a failure part way through leaves neither side modified.
//!
//! A load is either unassigned or carried by exactly one boat. It becomes carried
//! through `assign` and unassigned through `remove` or deletion of its boat. Moving a
//! load between boats requires removing it first.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{boat::BoatRepository, load::LoadRepository},
    error::{relationship::RelationshipError, AppError},
    model::load::Carrier,
};

pub struct RelationshipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RelationshipService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Puts a load on a boat.
    ///
    /// Appends the load to the boat's loads and records the boat as the load's carrier.
    ///
    /// # Arguments
    /// - `boat_id` - Boat receiving the load
    /// - `load_id` - Load to assign
    /// - `owner` - Subject identifier of the caller
    ///
    /// # Returns
    /// - `Ok(())` - Both sides updated
    /// - `Err(RelationshipError::BoatOrLoadNotFound)` - Boat or load does not exist
    /// - `Err(RelationshipError::Unauthorized)` - Caller does not own the boat
    /// - `Err(RelationshipError::AlreadyLoaded)` - The load already has a carrier
    pub async fn assign(&self, boat_id: i32, load_id: i32, owner: &str) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let boat_repo = BoatRepository::new(&txn);
        let load_repo = LoadRepository::new(&txn);

        let (Some(boat), Some(load)) = (
            boat_repo.find_by_id(boat_id).await?,
            load_repo.find_by_id(load_id).await?,
        ) else {
            return Err(RelationshipError::BoatOrLoadNotFound.into());
        };

        if !boat.is_owned_by(owner) {
            return Err(RelationshipError::Unauthorized.into());
        }

        if load.carrier.is_some() {
            return Err(RelationshipError::AlreadyLoaded.into());
        }

        let mut loads = boat.loads;
        loads.push(load.id);

        boat_repo.set_loads(boat.id, &loads).await?;
        load_repo
            .set_carrier(
                load.id,
                Some(Carrier {
                    id: boat.id,
                    name: boat.name,
                }),
            )
            .await?;

        txn.commit().await?;

        tracing::debug!("Assigned load {} to boat {}", load_id, boat_id);

        Ok(())
    }

    /// Takes a load off a boat.
    ///
    /// # Arguments
    /// - `boat_id` - Boat carrying the load
    /// - `load_id` - Load to unassign
    /// - `owner` - Subject identifier of the caller
    ///
    /// # Returns
    /// - `Ok(())` - Both sides updated
    /// - `Err(RelationshipError::NotCarried)` - Boat or load missing, or the load is not on this boat
    /// - `Err(RelationshipError::Forbidden)` - Caller does not own the boat
    pub async fn remove(&self, boat_id: i32, load_id: i32, owner: &str) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let boat_repo = BoatRepository::new(&txn);
        let load_repo = LoadRepository::new(&txn);

        let (Some(boat), Some(load)) = (
            boat_repo.find_by_id(boat_id).await?,
            load_repo.find_by_id(load_id).await?,
        ) else {
            return Err(RelationshipError::NotCarried.into());
        };

        if load.carrier.as_ref().map(|carrier| carrier.id) != Some(boat.id) {
            return Err(RelationshipError::NotCarried.into());
        }

        if !boat.is_owned_by(owner) {
            return Err(RelationshipError::Forbidden(
                "You are not authorized to perform this action.".to_string(),
            )
            .into());
        }

        let loads: Vec<i32> = boat.loads.into_iter().filter(|&id| id != load.id).collect();

        boat_repo.set_loads(boat.id, &loads).await?;
        load_repo.set_carrier(load.id, None).await?;

        txn.commit().await?;

        tracing::debug!("Removed load {} from boat {}", load_id, boat_id);

        Ok(())
    }

    /// Deletes a boat, unassigning every load it carries first.
    ///
    /// # Returns
    /// - `Ok(())` - Loads unassigned and boat deleted
    /// - `Err(RelationshipError::BoatNotFound)` - No boat with this id
    /// - `Err(RelationshipError::Forbidden)` - Caller does not own the boat
    pub async fn delete_boat(&self, boat_id: i32, owner: &str) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let boat_repo = BoatRepository::new(&txn);

        let Some(boat) = boat_repo.find_by_id(boat_id).await? else {
            return Err(RelationshipError::BoatNotFound.into());
        };

        if !boat.is_owned_by(owner) {
            return Err(RelationshipError::Forbidden(
                "You are not authorized to delete this boat.".to_string(),
            )
            .into());
        }

        let unassigned = LoadRepository::new(&txn).clear_carrier(boat.id).await?;
        boat_repo.delete(boat.id).await?;

        txn.commit().await?;

        tracing::debug!("Deleted boat {} and unassigned {} loads", boat_id, unassigned);

        Ok(())
    }

    /// Deletes a load, taking it off its carrier first.
    ///
    /// Loads are public, so no ownership is checked.
    ///
    /// # Returns
    /// - `Ok(())` - Carrier updated if there was one and load deleted
    /// - `Err(RelationshipError::LoadNotFound)` - No load with this id
    pub async fn delete_load(&self, load_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let boat_repo = BoatRepository::new(&txn);
        let load_repo = LoadRepository::new(&txn);

        let Some(load) = load_repo.find_by_id(load_id).await? else {
            return Err(RelationshipError::LoadNotFound.into());
        };

        if let Some(carrier) = load.carrier {
            if let Some(boat) = boat_repo.find_by_id(carrier.id).await? {
                let loads: Vec<i32> = boat.loads.into_iter().filter(|&id| id != load.id).collect();
                boat_repo.set_loads(boat.id, &loads).await?;
            }
        }

        load_repo.delete(load.id).await?;

        txn.commit().await?;

        tracing::debug!("Deleted load {}", load_id);

        Ok(())
    }
}
