use shared_types::FieldDataId;

use super::FieldDataService;
use super::dto::{CreateFieldDataRequestDTO, FieldDataFilterDTO, FieldDataResponseDTO};
use super::mapper::from_create_request;
use crate::common_validator::throw_if_user_not_verified;
use crate::model::field_data::FieldDataKind;
use crate::model::project::{Project, ProjectStateEnum, UpdateProjectRequest};
use crate::model::user::UserRole;
use crate::model::verification_action::VerificationEntityType;
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError};
use crate::workflow::{self, ProjectCommand};

impl FieldDataService {
    /// Records a field report against a project. Baseline and monitoring
    /// uploads also advance the project along its forward chain.
    ///
    /// # Arguments
    ///
    /// * `request` - upload request
    pub async fn upload_field_data(
        &self,
        request: CreateFieldDataRequestDTO,
    ) -> Result<FieldDataId, ServiceError> {
        super::validator::validate_upload_request(&request)?;

        let submitter = self
            .user_repository
            .get_user(&request.submitted_by)
            .await?
            .ok_or(EntityNotFoundError::User(request.submitted_by))?;
        throw_if_user_not_verified(&submitter)?;
        if !matches!(submitter.role, UserRole::Ngo | UserRole::Panchayat) {
            return Err(BusinessLogicError::FieldDataSubmitterRole {
                user: submitter.id,
                actual: submitter.role,
            }
            .into());
        }

        let project = self
            .project_repository
            .get_project(&request.project_id)
            .await?
            .ok_or(EntityNotFoundError::Project(request.project_id))?;

        // legality is checked before the report is stored; the version guard
        // on the project update covers the race in between
        let project_update = self.project_advancement(&project, request.kind)?;

        let field_data = from_create_request(request);
        let result = self
            .field_data_repository
            .create_field_data(field_data)
            .await?;

        if let Some(update) = project_update {
            self.project_repository.update_project(update).await?;
        }

        Ok(result)
    }

    pub async fn get_field_data(
        &self,
        field_data_id: &FieldDataId,
    ) -> Result<FieldDataResponseDTO, ServiceError> {
        let field_data = self
            .field_data_repository
            .get_field_data(field_data_id)
            .await?
            .ok_or(EntityNotFoundError::FieldData(*field_data_id))?;

        Ok(field_data.into())
    }

    pub async fn get_field_data_list(
        &self,
        filter: FieldDataFilterDTO,
    ) -> Result<Vec<FieldDataResponseDTO>, ServiceError> {
        let records = match filter.project_id {
            Some(project_id) => {
                self.field_data_repository
                    .get_field_data_by_project(&project_id)
                    .await?
            }
            None => self.field_data_repository.get_field_data_list().await?,
        };

        Ok(records
            .into_iter()
            .filter(|record| filter.state.is_none_or(|state| record.state == state))
            .map(Into::into)
            .collect())
    }

    // ============ Private methods

    fn project_advancement(
        &self,
        project: &Project,
        kind: FieldDataKind,
    ) -> Result<Option<UpdateProjectRequest>, ServiceError> {
        let command = match kind {
            FieldDataKind::Baseline => ProjectCommand::UploadBaseline,
            FieldDataKind::Monitoring => ProjectCommand::RecordMonitoring,
            FieldDataKind::Initial => {
                // initial planting reports are valid once work has started
                // and do not move the project
                if !matches!(
                    project.state,
                    ProjectStateEnum::PlantationStarted | ProjectStateEnum::Monitoring
                ) {
                    return Err(BusinessLogicError::InvalidStateTransition {
                        entity_type: VerificationEntityType::Project,
                        entity_id: project.id.into(),
                        from: project.state.to_string(),
                        action: "RecordInitial".to_string(),
                    }
                    .into());
                }
                return Ok(None);
            }
        };

        let next = workflow::project_command_target(project.state, command).ok_or(
            BusinessLogicError::InvalidStateTransition {
                entity_type: VerificationEntityType::Project,
                entity_id: project.id.into(),
                from: project.state.to_string(),
                action: command.to_string(),
            },
        )?;

        if next == project.state {
            return Ok(None);
        }

        Ok(Some(UpdateProjectRequest {
            id: project.id,
            version: project.version,
            state: Some(next),
            ..Default::default()
        }))
    }
}
