//! HTTP request handlers.
//!
//! Controllers authenticate the caller, run the content-type and accept checks in the
//! order each endpoint documents, convert DTOs into parameters and map domain models back
//! into DTOs. Business rules live in the service layer.

pub mod auth;
pub mod boat;
pub mod load;
pub mod user;
