use shared_types::{PlantationSiteId, UserId};
use strum::Display;
use time::OffsetDateTime;

use super::common::{EcosystemType, GeoPoint};

#[derive(Clone, Debug, PartialEq)]
pub struct PlantationSite {
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

/// Sites never revert: a project proposal consumes an `Available` site, and
/// starting plantation moves it on to `UnderRestoration`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum PlantationSiteStateEnum {
    Available,
    Assigned,
    UnderRestoration,
}
