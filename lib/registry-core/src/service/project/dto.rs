use shared_types::{PlantationSiteId, ProjectId, UserId};
use time::OffsetDateTime;

use crate::model::common::EcosystemType;
use crate::model::project::ProjectStateEnum;

#[derive(Clone, Debug)]
pub struct CreateProjectRequestDTO {
    pub ngo_id: UserId,
    pub panchayat_id: UserId,
    pub plantation_site_id: PlantationSiteId,
    pub name: String,
    pub ecosystem: EcosystemType,
    pub area_hectares: f64,
    pub carbon_credits_target: f64,
    /// Proposals go straight to verification unless explicitly kept as a
    /// draft.
    pub submit_immediately: bool,
}

#[derive(Clone, Debug)]
pub struct ProjectResponseDTO {
    pub id: ProjectId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub version: u64,
    pub ngo_id: UserId,
    pub panchayat_id: UserId,
    pub plantation_site_id: PlantationSiteId,
    pub name: String,
    pub ecosystem: EcosystemType,
    pub area_hectares: f64,
    pub carbon_credits_target: f64,
    pub carbon_credits_issued: f64,
    pub state: ProjectStateEnum,
}
