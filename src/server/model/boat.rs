//! Boat domain models and parameters.

use crate::model::boat::{BoatDto, BoatInputDto, BoatLoadDto, PaginatedBoatsDto};

/// Builds the absolute link to a single boat.
pub fn boat_link(app_url: &str, id: i32) -> String {
    format!("{}/boats/{}", app_url, id)
}

/// A boat with the ids of the loads it carries, in load order.
#[derive(Debug, Clone, PartialEq)]
pub struct Boat {
    pub id: i32,
    pub name: String,
    pub boat_type: String,
    pub length: i32,
    /// Subject identifier of the owning user.
    pub owner: String,
    pub loads: Vec<i32>,
}

impl Boat {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::boat::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            boat_type: entity.boat_type,
            length: entity.length,
            owner: entity.owner,
            loads: entity.loads.0.into_iter().map(|load| load.id).collect(),
        }
    }

    /// Converts the domain model to a DTO, attaching `self` links to the boat and
    /// to every carried load.
    ///
    /// # Arguments
    /// - `app_url` - Base URL the links are built from
    pub fn into_dto(self, app_url: &str) -> BoatDto {
        BoatDto {
            self_link: boat_link(app_url, self.id),
            id: self.id,
            name: self.name,
            boat_type: self.boat_type,
            length: self.length,
            owner: self.owner,
            loads: self
                .loads
                .into_iter()
                .map(|id| BoatLoadDto {
                    id,
                    self_link: crate::server::model::load::load_link(app_url, id),
                })
                .collect(),
        }
    }

    /// Whether `owner` is the subject that owns this boat.
    pub fn is_owned_by(&self, owner: &str) -> bool {
        self.owner == owner
    }
}

/// Parameters for creating a boat. All attributes are required.
#[derive(Debug, Clone)]
pub struct CreateBoatParams {
    pub name: String,
    pub boat_type: String,
    pub length: i32,
    pub owner: String,
}

impl CreateBoatParams {
    /// Converts a request body into creation parameters.
    ///
    /// # Returns
    /// - `Some(CreateBoatParams)` - Every attribute was present
    /// - `None` - At least one attribute was missing
    pub fn from_dto(dto: BoatInputDto, owner: String) -> Option<Self> {
        Some(Self {
            name: dto.name?,
            boat_type: dto.boat_type?,
            length: dto.length?,
            owner,
        })
    }
}

/// Parameters for editing a boat. Absent attributes keep their stored values.
#[derive(Debug, Clone)]
pub struct UpdateBoatParams {
    pub id: i32,
    /// Subject identifier of the caller, checked against the stored owner.
    pub owner: String,
    pub name: Option<String>,
    pub boat_type: Option<String>,
    pub length: Option<i32>,
}

impl UpdateBoatParams {
    /// Builds parameters for a partial edit.
    ///
    /// An empty name or type and a zero length count as present for the attribute
    /// check but leave the stored value unchanged.
    ///
    /// # Returns
    /// - `Some(UpdateBoatParams)` - At least one attribute was present
    /// - `None` - The body carried no attribute at all
    pub fn partial(id: i32, owner: String, dto: BoatInputDto) -> Option<Self> {
        if dto.name.is_none() && dto.boat_type.is_none() && dto.length.is_none() {
            return None;
        }

        Some(Self {
            id,
            owner,
            name: dto.name.filter(|name| !name.is_empty()),
            boat_type: dto.boat_type.filter(|boat_type| !boat_type.is_empty()),
            length: dto.length.filter(|&length| length != 0),
        })
    }

    /// Builds parameters for a full replacement.
    ///
    /// # Returns
    /// - `Some(UpdateBoatParams)` - Every attribute was present
    /// - `None` - At least one attribute was missing
    pub fn full(id: i32, owner: String, dto: BoatInputDto) -> Option<Self> {
        if dto.name.is_none() || dto.boat_type.is_none() || dto.length.is_none() {
            return None;
        }

        Self::partial(id, owner, dto)
    }
}

/// One page of a caller's boats.
#[derive(Debug, Clone)]
pub struct BoatPage {
    pub boats: Vec<Boat>,
    pub total_boats: u64,
    /// Cursor for the following page, present while more boats remain.
    pub next_cursor: Option<String>,
}

impl BoatPage {
    pub fn into_dto(self, app_url: &str) -> PaginatedBoatsDto {
        PaginatedBoatsDto {
            boats: self
                .boats
                .into_iter()
                .map(|boat| boat.into_dto(app_url))
                .collect(),
            total_boats: self.total_boats,
            next: self
                .next_cursor
                .map(|cursor| format!("{}/boats?cursor={}", app_url, cursor)),
        }
    }
}
