//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Ownership checks, name uniqueness and pagination
//! - **Orchestration**: Coordinating multiple repository calls and calls to Google
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Committing both sides of a boat and load change together

pub mod auth;
pub mod boat;
pub mod load;
pub mod relationship;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;
