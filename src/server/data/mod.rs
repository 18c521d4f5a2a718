//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories borrow any `ConnectionTrait`, so the same repository works on the shared
//! connection pool and inside a `DatabaseTransaction` when a service needs several writes
//! to commit together.

pub mod boat;
pub mod load;
pub mod user;

#[cfg(test)]
mod test;
