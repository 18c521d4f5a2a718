use sea_orm::DatabaseConnection;

use crate::server::{
    data::load::LoadRepository,
    error::AppError,
    model::load::{CreateLoadParams, Load, LoadPage, UpdateLoadParams},
    util::pagination::{split_page, PAGE_SIZE},
};

pub const LOAD_NOT_FOUND: &str = "No load with this load_id exists.";

pub struct LoadService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LoadService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new load with no carrier
    pub async fn create(&self, params: CreateLoadParams) -> Result<Load, AppError> {
        let repo = LoadRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Gets a load by id, `AppError::NotFound` if it does not exist
    pub async fn get(&self, id: i32) -> Result<Load, AppError> {
        let repo = LoadRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(LOAD_NOT_FOUND.to_string()))
    }

    /// Gets one page of loads along with the total number of loads.
    pub async fn list(&self, cursor: Option<i32>) -> Result<LoadPage, AppError> {
        let repo = LoadRepository::new(self.db);

        let rows = repo.get_after(cursor, PAGE_SIZE + 1).await?;
        let total = repo.count().await?;

        let (loads, next_cursor) = split_page(rows, |load| load.id);

        Ok(LoadPage {
            loads,
            total,
            next_cursor,
        })
    }

    /// Edits a load. Attributes missing from `params` keep their stored values and
    /// the carrier is never changed here.
    pub async fn update(&self, params: UpdateLoadParams) -> Result<Load, AppError> {
        let repo = LoadRepository::new(self.db);

        let load = self.get(params.id).await?;

        let updated = repo
            .update_details(
                load.id,
                params.item.unwrap_or(load.item),
                params.volume.unwrap_or(load.volume),
                params.creation_date.unwrap_or(load.creation_date),
            )
            .await?;

        Ok(updated)
    }
}
