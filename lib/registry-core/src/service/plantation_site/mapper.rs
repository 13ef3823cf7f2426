use time::OffsetDateTime;

use super::dto::{CreatePlantationSiteRequestDTO, PlantationSiteResponseDTO};
use crate::model::plantation_site::{PlantationSite, PlantationSiteStateEnum};

pub(super) fn from_create_request(request: CreatePlantationSiteRequestDTO) -> PlantationSite {
    let now = OffsetDateTime::now_utc();

    PlantationSite {
        id: Default::default(),
        created_date: now,
        last_modified: now,
        panchayat_id: request.panchayat_id,
        name: request.name,
        ecosystem: request.ecosystem,
        area_hectares: request.area_hectares,
        coordinates: request.coordinates,
        state: PlantationSiteStateEnum::Available,
    }
}

impl From<PlantationSite> for PlantationSiteResponseDTO {
    fn from(value: PlantationSite) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            panchayat_id: value.panchayat_id,
            name: value.name,
            ecosystem: value.ecosystem,
            area_hectares: value.area_hectares,
            coordinates: value.coordinates,
            state: value.state,
        }
    }
}
