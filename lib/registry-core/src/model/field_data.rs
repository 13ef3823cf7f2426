use shared_types::{FieldDataId, ProjectId, UserId};
use strum::Display;
use time::OffsetDateTime;

use super::common::GeoPoint;

/// A dated measurement report against a project. Immutable once verified or
/// rejected.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldData {
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

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum FieldDataKind {
    Baseline,
    Initial,
    Monitoring,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum FieldDataStateEnum {
    PendingVerification,
    Verified,
    Rejected,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateFieldDataRequest {
    pub id: FieldDataId,
    pub version: u64,
    pub state: Option<FieldDataStateEnum>,
}
