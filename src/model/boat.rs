use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Load reference embedded in a boat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BoatLoadDto {
    pub id: i32,
    #[serde(rename = "self")]
    pub self_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BoatDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub boat_type: String,
    pub length: i32,
    /// Subject identifier of the owning user.
    pub owner: String,
    pub loads: Vec<BoatLoadDto>,
    #[serde(rename = "self")]
    pub self_link: String,
}

/// Body accepted by create, replace and edit.
///
/// Every attribute is optional at the parsing stage; each endpoint decides which
/// combination it requires.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BoatInputDto {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub boat_type: Option<String>,
    pub length: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedBoatsDto {
    pub boats: Vec<BoatDto>,
    /// Number of boats owned by the caller across all pages.
    pub total_boats: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}
