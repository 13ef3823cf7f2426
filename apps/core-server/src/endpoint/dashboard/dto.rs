use one_dto_mapper::{From, convert_inner};
use registry_core::service::dashboard::dto::{
    CreditStatsDTO, DashboardResponseDTO, PendingVerificationsDTO, ProjectProgressDTO,
    ProjectStatsDTO, UserStatsDTO,
};
use serde::Serialize;
use shared_types::ProjectId;
use utoipa::ToSchema;

use super::super::project::dto::ProjectStateRestEnum;

#[derive(Clone, Debug, Serialize, From, ToSchema)]
#[from(DashboardResponseDTO)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponseRestDTO {
    pub users: UserStatsRestDTO,
    pub projects: ProjectStatsRestDTO,
    pub credits: CreditStatsRestDTO,
    pub pending_verifications: PendingVerificationsRestDTO,
    #[from(with_fn = convert_inner)]
    pub project_progress: Vec<ProjectProgressRestDTO>,
}

#[derive(Clone, Debug, Serialize, From, ToSchema)]
#[from(UserStatsDTO)]
#[serde(rename_all = "camelCase")]
pub struct UserStatsRestDTO {
    pub total: usize,
    pub ngos: usize,
    pub panchayats: usize,
    pub verifiers: usize,
    pub admins: usize,
    pub pending_registrations: usize,
}

#[derive(Clone, Debug, Serialize, From, ToSchema)]
#[from(ProjectStatsDTO)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatsRestDTO {
    pub total: usize,
    pub pending_verification: usize,
    pub active: usize,
    pub completed: usize,
    pub rejected: usize,
    pub total_area_hectares: f64,
}

#[derive(Clone, Debug, Serialize, From, ToSchema)]
#[from(CreditStatsDTO)]
#[serde(rename_all = "camelCase")]
pub struct CreditStatsRestDTO {
    pub total_target_tonnes: f64,
    pub total_issued_tonnes: f64,
    pub pending_batches: usize,
    pub verified_batches: usize,
    pub issued_batches: usize,
}

#[derive(Clone, Debug, Serialize, From, ToSchema)]
#[from(PendingVerificationsDTO)]
#[serde(rename_all = "camelCase")]
pub struct PendingVerificationsRestDTO {
    pub projects: usize,
    pub field_data: usize,
    pub carbon_credits: usize,
    pub users: usize,
}

#[derive(Clone, Debug, Serialize, From, ToSchema)]
#[from(ProjectProgressDTO)]
#[serde(rename_all = "camelCase")]
pub struct ProjectProgressRestDTO {
    pub project_id: ProjectId,
    pub name: String,
    pub state: ProjectStateRestEnum,
    pub ngo_name: Option<String>,
    pub panchayat_name: Option<String>,
    pub site_name: Option<String>,
    pub carbon_credits_target: f64,
    pub carbon_credits_issued: f64,
    pub progress_pct: f64,
}
