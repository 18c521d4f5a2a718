//! SeaORM entity definitions for the marina database.

pub mod boat;
pub mod load;
pub mod prelude;
pub mod user;
