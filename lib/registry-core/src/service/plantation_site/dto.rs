use shared_types::{PlantationSiteId, UserId};
use time::OffsetDateTime;

use crate::model::common::{EcosystemType, GeoPoint};
use crate::model::plantation_site::PlantationSiteStateEnum;

#[derive(Clone, Debug)]
pub struct CreatePlantationSiteRequestDTO {
    pub panchayat_id: UserId,
    pub name: String,
    pub ecosystem: EcosystemType,
    pub area_hectares: f64,
    pub coordinates: GeoPoint,
}

#[derive(Clone, Debug)]
pub struct PlantationSiteResponseDTO {
    pub id: PlantationSiteId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub panchayat_id: UserId,
    pub name: String,
    pub ecosystem: EcosystemType,
    pub area_hectares: f64,
    pub coordinates: GeoPoint,
    pub state: PlantationSiteStateEnum,
}
