//! Small request helpers shared by controllers and services.

pub mod negotiate;
pub mod pagination;
pub mod path;
