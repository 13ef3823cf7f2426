use std::collections::HashMap;

use shared_types::{PlantationSiteId, UserId};

use super::DashboardService;
use super::dto::{
    CreditStatsDTO, DashboardResponseDTO, PendingVerificationsDTO, ProjectProgressDTO,
    ProjectStatsDTO, UserStatsDTO,
};
use crate::model::carbon_credit::CarbonCreditStateEnum;
use crate::model::field_data::FieldDataStateEnum;
use crate::model::plantation_site::PlantationSite;
use crate::model::project::ProjectStateEnum;
use crate::model::user::{User, UserRole, UserStateEnum};
use crate::service::error::ServiceError;

impl DashboardService {
    /// Computes the cross-entity aggregates for the role dashboards. Entity
    /// collections are indexed by id once per call; joins are id lookups.
    pub async fn get_dashboard(&self) -> Result<DashboardResponseDTO, ServiceError> {
        let users = self.user_repository.get_user_list().await?;
        let projects = self.project_repository.get_project_list().await?;
        let sites = self
            .plantation_site_repository
            .get_plantation_site_list()
            .await?;
        let field_data = self.field_data_repository.get_field_data_list().await?;
        let credits = self
            .carbon_credit_repository
            .get_carbon_credit_list()
            .await?;

        let users_by_id: HashMap<UserId, &User> =
            users.iter().map(|user| (user.id, user)).collect();
        let sites_by_id: HashMap<PlantationSiteId, &PlantationSite> =
            sites.iter().map(|site| (site.id, site)).collect();

        let user_stats = UserStatsDTO {
            total: users.len(),
            ngos: count_role(&users, UserRole::Ngo),
            panchayats: count_role(&users, UserRole::Panchayat),
            verifiers: count_role(&users, UserRole::Verifier),
            admins: count_role(&users, UserRole::Admin),
            pending_registrations: users
                .iter()
                .filter(|user| user.state == UserStateEnum::Pending)
                .count(),
        };

        let active_states = [
            ProjectStateEnum::Approved,
            ProjectStateEnum::BaselineUploaded,
            ProjectStateEnum::PlantationStarted,
            ProjectStateEnum::Monitoring,
        ];
        let project_stats = ProjectStatsDTO {
            total: projects.len(),
            pending_verification: projects
                .iter()
                .filter(|project| project.state == ProjectStateEnum::PendingVerification)
                .count(),
            active: projects
                .iter()
                .filter(|project| active_states.contains(&project.state))
                .count(),
            completed: projects
                .iter()
                .filter(|project| project.state == ProjectStateEnum::Completed)
                .count(),
            rejected: projects
                .iter()
                .filter(|project| project.state == ProjectStateEnum::Rejected)
                .count(),
            total_area_hectares: projects
                .iter()
                .filter(|project| project.state != ProjectStateEnum::Rejected)
                .map(|project| project.area_hectares)
                .sum(),
        };

        let credit_stats = CreditStatsDTO {
            total_target_tonnes: projects.iter().map(|p| p.carbon_credits_target).sum(),
            total_issued_tonnes: projects.iter().map(|p| p.carbon_credits_issued).sum(),
            pending_batches: credits
                .iter()
                .filter(|credit| credit.state == CarbonCreditStateEnum::Pending)
                .count(),
            verified_batches: credits
                .iter()
                .filter(|credit| credit.state == CarbonCreditStateEnum::Verified)
                .count(),
            issued_batches: credits
                .iter()
                .filter(|credit| credit.state == CarbonCreditStateEnum::Issued)
                .count(),
        };

        let pending_verifications = PendingVerificationsDTO {
            projects: project_stats.pending_verification,
            field_data: field_data
                .iter()
                .filter(|record| record.state == FieldDataStateEnum::PendingVerification)
                .count(),
            carbon_credits: credit_stats.pending_batches,
            users: user_stats.pending_registrations,
        };

        let project_progress = projects
            .iter()
            .map(|project| {
                let progress_pct = if project.carbon_credits_target > 0.0 {
                    project.carbon_credits_issued / project.carbon_credits_target * 100.0
                } else {
                    0.0
                };

                ProjectProgressDTO {
                    project_id: project.id,
                    name: project.name.clone(),
                    state: project.state,
                    ngo_name: users_by_id.get(&project.ngo_id).map(|user| user.name.clone()),
                    panchayat_name: users_by_id
                        .get(&project.panchayat_id)
                        .map(|user| user.name.clone()),
                    site_name: sites_by_id
                        .get(&project.plantation_site_id)
                        .map(|site| site.name.clone()),
                    carbon_credits_target: project.carbon_credits_target,
                    carbon_credits_issued: project.carbon_credits_issued,
                    progress_pct,
                }
            })
            .collect();

        Ok(DashboardResponseDTO {
            users: user_stats,
            projects: project_stats,
            credits: credit_stats,
            pending_verifications,
            project_progress,
        })
    }
}

fn count_role(users: &[User], role: UserRole) -> usize {
    users.iter().filter(|user| user.role == role).count()
}
