//! Domain models and operation-specific parameter types.
//!
//! Repositories convert SeaORM entities into these models at the data boundary and
//! controllers convert them into DTOs. Links in DTOs are absolute and built from the
//! configured application URL.

pub mod boat;
pub mod load;
pub mod user;
