use shared_types::{PlantationSiteId, ProjectId, UserId};
use strum::Display;
use time::OffsetDateTime;

use super::common::EcosystemType;

/// The central workflow entity. `version` is bumped on every update and
/// checked by the data provider so that two racing writers cannot both win.
#[derive(Clone, Debug, PartialEq)]
pub struct Project {
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

/// Forward-only chain; `Rejected` is terminal and nothing transitions
/// backward.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum ProjectStateEnum {
    Draft,
    PendingVerification,
    Approved,
    BaselineUploaded,
    PlantationStarted,
    Monitoring,
    Completed,
    Rejected,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateProjectRequest {
    pub id: ProjectId,
    /// Version observed by the caller; the update fails if it is stale.
    pub version: u64,
    pub state: Option<ProjectStateEnum>,
    pub carbon_credits_issued: Option<f64>,
}
