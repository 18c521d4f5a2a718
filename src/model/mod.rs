//! Request and response shapes shared by every endpoint.
//!
//! These types are the wire format of the API. Server-side domain models convert into
//! them at the controller boundary so link construction and field naming stay in one place.

pub mod api;
pub mod boat;
pub mod load;
pub mod user;
