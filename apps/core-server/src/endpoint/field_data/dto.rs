use one_dto_mapper::{From, Into, convert_inner};
use registry_core::service::field_data::dto::FieldDataResponseDTO;
use serde::{Deserialize, Serialize};
use shared_types::{FieldDataId, ProjectId, UserId};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

use super::super::plantation_site::dto::GeoPointRestDTO;
use crate::serialize::front_time;

#[derive(Clone, Debug, Deserialize, Into, ToSchema)]
#[into("registry_core::service::field_data::dto::CreateFieldDataRequestDTO")]
#[serde(rename_all = "camelCase")]
pub struct CreateFieldDataRequestRestDTO {
    pub project_id: ProjectId,
    pub submitted_by: UserId,
    pub kind: FieldDataKindRestEnum,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2023-06-09T14:19:57.000Z")]
    pub captured_date: OffsetDateTime,
    pub plant_count: u32,
    pub area_covered_hectares: f64,
    pub survival_rate_pct: Option<f64>,
    pub health_score: Option<f64>,
    #[serde(default)]
    pub image_refs: Vec<String>,
    #[into(with_fn = convert_inner)]
    pub coordinates: Option<GeoPointRestDTO>,
}

#[derive(Clone, Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FieldDataQueryRestDTO {
    pub project_id: Option<ProjectId>,
    pub state: Option<FieldDataStateRestEnum>,
}

#[derive(Clone, Debug, Serialize, From, ToSchema)]
#[from(FieldDataResponseDTO)]
#[serde(rename_all = "camelCase")]
pub struct FieldDataResponseRestDTO {
    pub id: FieldDataId,
    #[serde(serialize_with = "front_time")]
    #[schema(value_type = String, example = "2023-06-09T14:19:57.000Z")]
    pub created_date: OffsetDateTime,
    #[serde(serialize_with = "front_time")]
    #[schema(value_type = String, example = "2023-06-09T14:19:57.000Z")]
    pub last_modified: OffsetDateTime,
    pub version: u64,
    pub project_id: ProjectId,
    pub submitted_by: UserId,
    pub kind: FieldDataKindRestEnum,
    #[serde(serialize_with = "front_time")]
    #[schema(value_type = String, example = "2023-06-09T14:19:57.000Z")]
    pub captured_date: OffsetDateTime,
    pub plant_count: u32,
    pub area_covered_hectares: f64,
    pub survival_rate_pct: Option<f64>,
    pub health_score: Option<f64>,
    pub image_refs: Vec<String>,
    #[from(with_fn = convert_inner)]
    pub coordinates: Option<GeoPointRestDTO>,
    pub state: FieldDataStateRestEnum,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema, From, Into)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from("registry_core::model::field_data::FieldDataKind")]
#[into("registry_core::model::field_data::FieldDataKind")]
pub enum FieldDataKindRestEnum {
    Baseline,
    Initial,
    Monitoring,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema, From, Into)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from("registry_core::model::field_data::FieldDataStateEnum")]
#[into("registry_core::model::field_data::FieldDataStateEnum")]
pub enum FieldDataStateRestEnum {
    PendingVerification,
    Verified,
    Rejected,
}
