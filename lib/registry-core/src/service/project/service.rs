use shared_types::ProjectId;

use super::ProjectService;
use super::dto::{CreateProjectRequestDTO, ProjectResponseDTO};
use super::mapper::from_create_request;
use crate::common_validator::{throw_if_user_not_verified, throw_if_user_role_not_eq};
use crate::model::project::{Project, UpdateProjectRequest};
use crate::model::user::UserRole;
use crate::model::verification_action::VerificationEntityType;
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError};
use crate::workflow::{self, ProjectCommand};

impl ProjectService {
    /// Creates a restoration proposal and assigns the referenced site.
    ///
    /// # Arguments
    ///
    /// * `request` - create project request
    pub async fn create_project(
        &self,
        request: CreateProjectRequestDTO,
    ) -> Result<ProjectId, ServiceError> {
        super::validator::validate_create_request(&request)?;

        let ngo = self
            .user_repository
            .get_user(&request.ngo_id)
            .await?
            .ok_or(EntityNotFoundError::User(request.ngo_id))?;
        throw_if_user_role_not_eq(&ngo, UserRole::Ngo)?;
        throw_if_user_not_verified(&ngo)?;

        let panchayat = self
            .user_repository
            .get_user(&request.panchayat_id)
            .await?
            .ok_or(EntityNotFoundError::User(request.panchayat_id))?;
        throw_if_user_role_not_eq(&panchayat, UserRole::Panchayat)?;

        let site = self
            .plantation_site_repository
            .get_plantation_site(&request.plantation_site_id)
            .await?
            .ok_or(EntityNotFoundError::PlantationSite(request.plantation_site_id))?;

        let assigned = workflow::site_assignment(site.state)
            .ok_or(BusinessLogicError::SiteNotAvailable(site.id))?;

        let project = from_create_request(request);

        let result = self.project_repository.create_project(project).await?;

        self.plantation_site_repository
            .update_plantation_site_state(&site.id, assigned)
            .await?;

        Ok(result)
    }

    /// Moves a draft proposal into verification.
    pub async fn submit_project(&self, project_id: &ProjectId) -> Result<(), ServiceError> {
        self.advance(project_id, ProjectCommand::Submit).await?;
        Ok(())
    }

    /// Begins plantation work; requires an uploaded baseline. The site moves
    /// on to `UnderRestoration`.
    pub async fn start_plantation(&self, project_id: &ProjectId) -> Result<(), ServiceError> {
        let project = self.advance(project_id, ProjectCommand::StartPlantation).await?;

        let site = self
            .plantation_site_repository
            .get_plantation_site(&project.plantation_site_id)
            .await?
            .ok_or(EntityNotFoundError::PlantationSite(project.plantation_site_id))?;

        if let Some(next) = workflow::site_restoration_start(site.state) {
            self.plantation_site_repository
                .update_plantation_site_state(&site.id, next)
                .await?;
        }

        Ok(())
    }

    /// Closes out a project that has been in monitoring.
    pub async fn complete_project(&self, project_id: &ProjectId) -> Result<(), ServiceError> {
        self.advance(project_id, ProjectCommand::Complete).await?;
        Ok(())
    }

    pub async fn get_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<ProjectResponseDTO, ServiceError> {
        let project = self
            .project_repository
            .get_project(project_id)
            .await?
            .ok_or(EntityNotFoundError::Project(*project_id))?;

        Ok(project.into())
    }

    pub async fn get_project_list(&self) -> Result<Vec<ProjectResponseDTO>, ServiceError> {
        let projects = self.project_repository.get_project_list().await?;

        Ok(projects.into_iter().map(Into::into).collect())
    }

    // ============ Private methods

    /// Applies a forward workflow command, enforcing the precondition state.
    async fn advance(
        &self,
        project_id: &ProjectId,
        command: ProjectCommand,
    ) -> Result<Project, ServiceError> {
        let project = self
            .project_repository
            .get_project(project_id)
            .await?
            .ok_or(EntityNotFoundError::Project(*project_id))?;

        let next = workflow::project_command_target(project.state, command).ok_or(
            BusinessLogicError::InvalidStateTransition {
                entity_type: VerificationEntityType::Project,
                entity_id: project.id.into(),
                from: project.state.to_string(),
                action: command.to_string(),
            },
        )?;

        self.project_repository
            .update_project(UpdateProjectRequest {
                id: project.id,
                version: project.version,
                state: Some(next),
                ..Default::default()
            })
            .await?;

        Ok(project)
    }
}
