use shared_types::ProjectId;

use crate::model::project::ProjectStateEnum;

#[derive(Clone, Debug)]
pub struct DashboardResponseDTO {
    pub users: UserStatsDTO,
    pub projects: ProjectStatsDTO,
    pub credits: CreditStatsDTO,
    pub pending_verifications: PendingVerificationsDTO,
    pub project_progress: Vec<ProjectProgressDTO>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UserStatsDTO {
    pub total: usize,
    pub ngos: usize,
    pub panchayats: usize,
    pub verifiers: usize,
    pub admins: usize,
    pub pending_registrations: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectStatsDTO {
    pub total: usize,
    pub pending_verification: usize,
    pub active: usize,
    pub completed: usize,
    pub rejected: usize,
    /// Hectares across all projects that were not rejected.
    pub total_area_hectares: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreditStatsDTO {
    pub total_target_tonnes: f64,
    pub total_issued_tonnes: f64,
    pub pending_batches: usize,
    pub verified_batches: usize,
    pub issued_batches: usize,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PendingVerificationsDTO {
    pub projects: usize,
    pub field_data: usize,
    pub carbon_credits: usize,
    pub users: usize,
}

#[derive(Clone, Debug)]
pub struct ProjectProgressDTO {
    pub project_id: ProjectId,
    pub name: String,
    pub state: ProjectStateEnum,
    pub ngo_name: Option<String>,
    pub panchayat_name: Option<String>,
    pub site_name: Option<String>,
    pub carbon_credits_target: f64,
    pub carbon_credits_issued: f64,
    /// `issued / target` in percent; zero when no target is set.
    pub progress_pct: f64,
}
