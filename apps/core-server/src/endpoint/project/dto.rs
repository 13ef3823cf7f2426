use one_dto_mapper::{From, Into};
use registry_core::service::project::dto::ProjectResponseDTO;
use serde::{Deserialize, Serialize};
use shared_types::{PlantationSiteId, ProjectId, UserId};
use time::OffsetDateTime;
use utoipa::ToSchema;
use validator::Validate;

use super::super::plantation_site::dto::EcosystemTypeRestEnum;
use crate::serialize::front_time;

#[derive(Clone, Debug, Deserialize, Into, Validate, ToSchema)]
#[into("registry_core::service::project::dto::CreateProjectRequestDTO")]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequestRestDTO {
    pub ngo_id: UserId,
    pub panchayat_id: UserId,
    pub plantation_site_id: PlantationSiteId,
    pub name: String,
    pub ecosystem: EcosystemTypeRestEnum,
    #[validate(range(min = 0.01))]
    pub area_hectares: f64,
    #[validate(range(min = 0.01))]
    pub carbon_credits_target: f64,
    #[serde(default = "default_submit_immediately")]
    pub submit_immediately: bool,
}

fn default_submit_immediately() -> bool {
    true
}

#[derive(Clone, Debug, Serialize, From, ToSchema)]
#[from(ProjectResponseDTO)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponseRestDTO {
    pub id: ProjectId,
    #[serde(serialize_with = "front_time")]
    #[schema(value_type = String, example = "2023-06-09T14:19:57.000Z")]
    pub created_date: OffsetDateTime,
    #[serde(serialize_with = "front_time")]
    #[schema(value_type = String, example = "2023-06-09T14:19:57.000Z")]
    pub last_modified: OffsetDateTime,
    pub version: u64,
    pub ngo_id: UserId,
    pub panchayat_id: UserId,
    pub plantation_site_id: PlantationSiteId,
    pub name: String,
    pub ecosystem: EcosystemTypeRestEnum,
    pub area_hectares: f64,
    pub carbon_credits_target: f64,
    pub carbon_credits_issued: f64,
    pub state: ProjectStateRestEnum,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema, From)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from("registry_core::model::project::ProjectStateEnum")]
pub enum ProjectStateRestEnum {
    Draft,
    PendingVerification,
    Approved,
    BaselineUploaded,
    PlantationStarted,
    Monitoring,
    Completed,
    Rejected,
}
