use one_dto_mapper::{From, Into};
use registry_core::service::plantation_site::dto::PlantationSiteResponseDTO;
use serde::{Deserialize, Serialize};
use shared_types::{PlantationSiteId, UserId};
use time::OffsetDateTime;
use utoipa::ToSchema;
use validator::Validate;

use crate::serialize::front_time;

#[derive(Clone, Debug, Deserialize, Into, Validate, ToSchema)]
#[into("registry_core::service::plantation_site::dto::CreatePlantationSiteRequestDTO")]
#[serde(rename_all = "camelCase")]
pub struct CreatePlantationSiteRequestRestDTO {
    pub panchayat_id: UserId,
    pub name: String,
    pub ecosystem: EcosystemTypeRestEnum,
    #[validate(range(min = 0.01))]
    pub area_hectares: f64,
    pub coordinates: GeoPointRestDTO,
}

#[derive(Clone, Debug, Serialize, From, ToSchema)]
#[from(PlantationSiteResponseDTO)]
#[serde(rename_all = "camelCase")]
pub struct PlantationSiteResponseRestDTO {
    pub id: PlantationSiteId,
    #[serde(serialize_with = "front_time")]
    #[schema(value_type = String, example = "2023-06-09T14:19:57.000Z")]
    pub created_date: OffsetDateTime,
    #[serde(serialize_with = "front_time")]
    #[schema(value_type = String, example = "2023-06-09T14:19:57.000Z")]
    pub last_modified: OffsetDateTime,
    pub panchayat_id: UserId,
    pub name: String,
    pub ecosystem: EcosystemTypeRestEnum,
    pub area_hectares: f64,
    pub coordinates: GeoPointRestDTO,
    pub state: PlantationSiteStateRestEnum,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, From, Into, ToSchema)]
#[from("registry_core::model::common::GeoPoint")]
#[into("registry_core::model::common::GeoPoint")]
#[serde(rename_all = "camelCase")]
pub struct GeoPointRestDTO {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema, From, Into)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from("registry_core::model::common::EcosystemType")]
#[into("registry_core::model::common::EcosystemType")]
pub enum EcosystemTypeRestEnum {
    Mangrove,
    Seagrass,
    SaltMarsh,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema, From)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from("registry_core::model::plantation_site::PlantationSiteStateEnum")]
pub enum PlantationSiteStateRestEnum {
    Available,
    Assigned,
    UnderRestoration,
}
