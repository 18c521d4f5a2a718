use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{GoogleProfile, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every user who has logged in
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Returns the stored user for a Google profile, creating it on first login.
    ///
    /// Existing users are returned as stored; names are not refreshed from the profile.
    pub async fn find_or_create(&self, profile: GoogleProfile) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if let Some(user) = repo.find_by_unique_id(&profile.unique_id).await? {
            return Ok(user);
        }

        tracing::info!("Creating user for subject {}", profile.unique_id);

        Ok(repo.create(profile).await?)
    }
}
