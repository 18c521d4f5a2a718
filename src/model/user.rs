use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub unique_id: String,
    pub first_name: String,
    pub last_name: String,
}

/// Returned once the Google login completes.
///
/// `token` is the Google ID token; clients send it back as `Authorization: Bearer <token>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub first_name: String,
    pub last_name: String,
    pub unique_id: String,
    pub token: String,
}
