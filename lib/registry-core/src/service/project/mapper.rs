use time::OffsetDateTime;

use super::dto::{CreateProjectRequestDTO, ProjectResponseDTO};
use crate::model::project::{Project, ProjectStateEnum};

pub(super) fn from_create_request(request: CreateProjectRequestDTO) -> Project {
    let now = OffsetDateTime::now_utc();

    let state = if request.submit_immediately {
        ProjectStateEnum::PendingVerification
    } else {
        ProjectStateEnum::Draft
    };

    Project {
        id: Default::default(),
        created_date: now,
        last_modified: now,
        version: 1,
        ngo_id: request.ngo_id,
        panchayat_id: request.panchayat_id,
        plantation_site_id: request.plantation_site_id,
        name: request.name,
        ecosystem: request.ecosystem,
        area_hectares: request.area_hectares,
        carbon_credits_target: request.carbon_credits_target,
        carbon_credits_issued: 0.0,
        state,
    }
}

impl From<Project> for ProjectResponseDTO {
    fn from(value: Project) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            version: value.version,
            ngo_id: value.ngo_id,
            panchayat_id: value.panchayat_id,
            plantation_site_id: value.plantation_site_id,
            name: value.name,
            ecosystem: value.ecosystem,
            area_hectares: value.area_hectares,
            carbon_credits_target: value.carbon_credits_target,
            carbon_credits_issued: value.carbon_credits_issued,
            state: value.state,
        }
    }
}
