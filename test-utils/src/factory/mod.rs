//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let load = factory::load::create_load(&db).await?;
//!
//!     // Create a boat already carrying a load
//!     let (boat, load) = factory::helpers::create_loaded_boat(&db, "owner-1").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let boat = factory::boat::BoatFactory::new(&db, "owner-1")
//!     .name("Orca")
//!     .length(42)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `boat` - Create boat entities
//! - `load` - Create load entities
//! - `helpers` - Convenience methods for creating entities with relationships

pub mod boat;
pub mod helpers;
pub mod load;
pub mod user;

pub use boat::create_boat;
pub use load::create_load;
pub use user::create_user;
