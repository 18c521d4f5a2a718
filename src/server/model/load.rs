//! Load domain models and parameters.

use crate::{
    model::load::{CarrierDto, LoadDto, LoadInputDto, PaginatedLoadsDto},
    server::model::boat::boat_link,
};

/// Builds the absolute link to a single load.
pub fn load_link(app_url: &str, id: i32) -> String {
    format!("{}/loads/{}", app_url, id)
}

/// Reference from a load to the boat carrying it.
#[derive(Debug, Clone, PartialEq)]
pub struct Carrier {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Load {
    pub id: i32,
    pub item: String,
    pub volume: i32,
    pub creation_date: String,
    pub carrier: Option<Carrier>,
}

impl Load {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// The carrier is present whenever `carrier_id` is set.
    pub fn from_entity(entity: entity::load::Model) -> Self {
        let carrier = entity.carrier_id.map(|id| Carrier {
            id,
            name: entity.carrier_name.unwrap_or_default(),
        });

        Self {
            id: entity.id,
            item: entity.item,
            volume: entity.volume,
            creation_date: entity.creation_date,
            carrier,
        }
    }

    /// Converts the domain model to a DTO with `self` links on the load and its carrier.
    pub fn into_dto(self, app_url: &str) -> LoadDto {
        LoadDto {
            self_link: load_link(app_url, self.id),
            id: self.id,
            item: self.item,
            volume: self.volume,
            creation_date: self.creation_date,
            carrier: self.carrier.map(|carrier| CarrierDto {
                self_link: boat_link(app_url, carrier.id),
                id: carrier.id,
                name: carrier.name,
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLoadParams {
    pub item: String,
    pub volume: i32,
    pub creation_date: String,
}

impl CreateLoadParams {
    /// # Returns
    /// - `Some(CreateLoadParams)` - Every attribute was present
    /// - `None` - At least one attribute was missing
    pub fn from_dto(dto: LoadInputDto) -> Option<Self> {
        Some(Self {
            item: dto.item?,
            volume: dto.volume?,
            creation_date: dto.creation_date?,
        })
    }
}

/// Parameters for editing a load. Absent attributes keep their stored values.
#[derive(Debug, Clone)]
pub struct UpdateLoadParams {
    pub id: i32,
    pub item: Option<String>,
    pub volume: Option<i32>,
    pub creation_date: Option<String>,
}

impl UpdateLoadParams {
    /// Builds parameters for a partial edit, `None` when no attribute is present.
    ///
    /// Empty strings and a zero volume leave the stored value unchanged.
    pub fn partial(id: i32, dto: LoadInputDto) -> Option<Self> {
        if dto.item.is_none() && dto.volume.is_none() && dto.creation_date.is_none() {
            return None;
        }

        Some(Self {
            id,
            item: dto.item.filter(|item| !item.is_empty()),
            volume: dto.volume.filter(|&volume| volume != 0),
            creation_date: dto.creation_date.filter(|date| !date.is_empty()),
        })
    }

    /// Builds parameters for a full replacement, `None` when any attribute is missing.
    pub fn full(id: i32, dto: LoadInputDto) -> Option<Self> {
        if dto.item.is_none() || dto.volume.is_none() || dto.creation_date.is_none() {
            return None;
        }

        Self::partial(id, dto)
    }
}

/// One page of loads.
#[derive(Debug, Clone)]
pub struct LoadPage {
    pub loads: Vec<Load>,
    pub total: u64,
    pub next_cursor: Option<String>,
}

impl LoadPage {
    pub fn into_dto(self, app_url: &str) -> PaginatedLoadsDto {
        PaginatedLoadsDto {
            loads: self
                .loads
                .into_iter()
                .map(|load| load.into_dto(app_url))
                .collect(),
            total: self.total,
            next: self
                .next_cursor
                .map(|cursor| format!("{}/loads?cursor={}", app_url, cursor)),
        }
    }
}
