use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Boat currently carrying a load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CarrierDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "self")]
    pub self_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LoadDto {
    pub id: i32,
    pub item: String,
    pub volume: i32,
    pub creation_date: String,
    /// `null` while the load sits on no boat.
    pub carrier: Option<CarrierDto>,
    #[serde(rename = "self")]
    pub self_link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LoadInputDto {
    pub item: Option<String>,
    pub volume: Option<i32>,
    pub creation_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedLoadsDto {
    pub loads: Vec<LoadDto>,
    pub total: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}
