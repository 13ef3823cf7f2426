use time::OffsetDateTime;

use super::dto::{CreateFieldDataRequestDTO, FieldDataResponseDTO};
use crate::model::field_data::{FieldData, FieldDataStateEnum};

pub(super) fn from_create_request(request: CreateFieldDataRequestDTO) -> FieldData {
    let now = OffsetDateTime::now_utc();

    FieldData {
        id: Default::default(),
        created_date: now,
        last_modified: now,
        version: 1,
        project_id: request.project_id,
        submitted_by: request.submitted_by,
        kind: request.kind,
        captured_date: request.captured_date,
        plant_count: request.plant_count,
        area_covered_hectares: request.area_covered_hectares,
        survival_rate_pct: request.survival_rate_pct,
        health_score: request.health_score,
        image_refs: request.image_refs,
        coordinates: request.coordinates,
        state: FieldDataStateEnum::PendingVerification,
    }
}

impl From<FieldData> for FieldDataResponseDTO {
    fn from(value: FieldData) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            version: value.version,
            project_id: value.project_id,
            submitted_by: value.submitted_by,
            kind: value.kind,
            captured_date: value.captured_date,
            plant_count: value.plant_count,
            area_covered_hectares: value.area_covered_hectares,
            survival_rate_pct: value.survival_rate_pct,
            health_score: value.health_score,
            image_refs: value.image_refs,
            coordinates: value.coordinates,
            state: value.state,
        }
    }
}
