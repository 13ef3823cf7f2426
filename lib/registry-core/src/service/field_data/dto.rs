use shared_types::{FieldDataId, ProjectId, UserId};
use time::OffsetDateTime;

use crate::model::common::GeoPoint;
use crate::model::field_data::{FieldDataKind, FieldDataStateEnum};

#[derive(Clone, Debug)]
pub struct CreateFieldDataRequestDTO {
    pub project_id: ProjectId,
    pub submitted_by: UserId,
    pub kind: FieldDataKind,
    pub captured_date: OffsetDateTime,
    pub plant_count: u32,
    pub area_covered_hectares: f64,
    pub survival_rate_pct: Option<f64>,
    pub health_score: Option<f64>,
    pub image_refs: Vec<String>,
    pub coordinates: Option<GeoPoint>,
}

/// Caller-side filters; both default to "no filter".
#[derive(Clone, Debug, Default)]
pub struct FieldDataFilterDTO {
    pub project_id: Option<ProjectId>,
    pub state: Option<FieldDataStateEnum>,
}

#[derive(Clone, Debug)]
pub struct FieldDataResponseDTO {
    pub id: FieldDataId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub version: u64,
    pub project_id: ProjectId,
    pub submitted_by: UserId,
    pub kind: FieldDataKind,
    pub captured_date: OffsetDateTime,
    pub plant_count: u32,
    pub area_covered_hectares: f64,
    pub survival_rate_pct: Option<f64>,
    pub health_score: Option<f64>,
    pub image_refs: Vec<String>,
    pub coordinates: Option<GeoPoint>,
    pub state: FieldDataStateEnum,
}
