use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{boat::BoatRepository, load::LoadRepository},
    error::AppError,
    model::boat::{Boat, BoatPage, CreateBoatParams, UpdateBoatParams},
    util::pagination::{split_page, PAGE_SIZE},
};

pub const BOAT_NOT_FOUND: &str = "No boat with this boat_id exists.";

pub struct BoatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks that no other boat uses `name`, ignoring case.
    ///
    /// # Arguments
    /// - `name` - Candidate name
    /// - `excluding_id` - Boat being updated, which may keep its own name
    pub async fn name_available(
        &self,
        name: &str,
        excluding_id: Option<i32>,
    ) -> Result<bool, AppError> {
        let repo = BoatRepository::new(self.db);

        Ok(!repo.name_taken(name, excluding_id).await?)
    }

    /// Creates a new boat owned by the caller
    pub async fn create(&self, params: CreateBoatParams) -> Result<Boat, AppError> {
        let repo = BoatRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Gets a boat the caller owns.
    ///
    /// # Returns
    /// - `Ok(Boat)` - Boat found and owned by `owner`
    /// - `Err(AppError::NotFound)` - No boat with this id
    /// - `Err(AppError::Forbidden)` - Boat belongs to someone else
    pub async fn get(&self, id: i32, owner: &str) -> Result<Boat, AppError> {
        let repo = BoatRepository::new(self.db);

        let Some(boat) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound(BOAT_NOT_FOUND.to_string()));
        };

        if !boat.is_owned_by(owner) {
            return Err(AppError::Forbidden(
                "You are not authorized to view this boat.".to_string(),
            ));
        }

        Ok(boat)
    }

    /// Gets one page of the caller's boats.
    ///
    /// Fetches one row beyond the page size to decide whether a next page exists.
    ///
    /// # Arguments
    /// - `owner` - Subject identifier of the caller
    /// - `cursor` - Id of the last boat on the previous page
    pub async fn list(&self, owner: &str, cursor: Option<i32>) -> Result<BoatPage, AppError> {
        let repo = BoatRepository::new(self.db);

        let rows = repo.get_by_owner_after(owner, cursor, PAGE_SIZE + 1).await?;
        let total_boats = repo.count_by_owner(owner).await?;

        let (boats, next_cursor) = split_page(rows, |boat| boat.id);

        Ok(BoatPage {
            boats,
            total_boats,
            next_cursor,
        })
    }

    /// Edits a boat the caller owns.
    ///
    /// Attributes missing from `params` keep their stored values. A rename is copied
    /// onto every load the boat carries within the same transaction.
    ///
    /// # Returns
    /// - `Ok(Boat)` - The edited boat
    /// - `Err(AppError::NotFound)` - No boat with this id
    /// - `Err(AppError::Forbidden)` - Boat belongs to someone else
    pub async fn update(&self, params: UpdateBoatParams) -> Result<Boat, AppError> {
        let txn = self.db.begin().await?;
        let boat_repo = BoatRepository::new(&txn);

        let Some(boat) = boat_repo.find_by_id(params.id).await? else {
            return Err(AppError::NotFound(BOAT_NOT_FOUND.to_string()));
        };

        if !boat.is_owned_by(&params.owner) {
            return Err(AppError::Forbidden(
                "You are not authorized to edit this boat.".to_string(),
            ));
        }

        let renamed = params.name.as_ref().is_some_and(|name| *name != boat.name);

        let updated = boat_repo
            .update_details(
                boat.id,
                params.name.unwrap_or(boat.name),
                params.boat_type.unwrap_or(boat.boat_type),
                params.length.unwrap_or(boat.length),
            )
            .await?;

        if renamed {
            LoadRepository::new(&txn)
                .rename_carrier(updated.id, &updated.name)
                .await?;
        }

        txn.commit().await?;

        Ok(updated)
    }
}
