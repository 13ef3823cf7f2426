use shared_types::{CarbonCreditId, FieldDataId, ProjectId, UserId};
use time::OffsetDateTime;

use super::VerificationService;
use super::dto::{
    VerificationActionFilterDTO, VerificationActionResponseDTO, VerificationRequestDTO,
    VerificationResponseDTO,
};
use crate::common_validator::throw_if_user_not_verified;
use crate::model::carbon_credit::UpdateCarbonCreditRequest;
use crate::model::field_data::UpdateFieldDataRequest;
use crate::model::project::UpdateProjectRequest;
use crate::model::verification_action::{VerificationAction, VerificationEntityType};
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError};
use crate::workflow;

impl VerificationService {
    /// Applies an approve/reject decision to the addressed entity.
    ///
    /// The performer must hold the role the entity type requires, the
    /// entity must sit in the transition table's source state, and exactly
    /// one audit entry is appended for the successful decision. Any failure
    /// leaves both the entity and the audit log untouched.
    pub async fn apply(
        &self,
        request: VerificationRequestDTO,
    ) -> Result<VerificationResponseDTO, ServiceError> {
        let performer = self
            .user_repository
            .get_user(&request.performed_by)
            .await?
            .ok_or(EntityNotFoundError::User(request.performed_by))?;
        throw_if_user_not_verified(&performer)?;

        let required = workflow::required_role(request.entity_type);
        if performer.role != required {
            return Err(BusinessLogicError::UnauthorizedActor {
                performer: performer.id,
                required,
                actual: performer.role,
            }
            .into());
        }

        let new_state = match request.entity_type {
            VerificationEntityType::User => self.decide_user(&request).await?,
            VerificationEntityType::Project => self.decide_project(&request).await?,
            VerificationEntityType::FieldData => self.decide_field_data(&request).await?,
            VerificationEntityType::CarbonCredit => {
                self.decide_carbon_credit(&request, &performer.id).await?
            }
        };

        let now = OffsetDateTime::now_utc();
        let action = VerificationAction {
            id: Default::default(),
            created_date: now,
            action: request.action,
            entity_id: request.entity_id,
            entity_type: request.entity_type,
            performed_by: request.performed_by,
            remarks: request.remarks,
        };

        let action_id = self
            .verification_action_repository
            .create_verification_action(action)
            .await?;

        Ok(VerificationResponseDTO {
            action_id,
            action: request.action,
            entity_type: request.entity_type,
            entity_id: request.entity_id,
            new_state,
            performed_by: request.performed_by,
            created_date: now,
        })
    }

    pub async fn get_verification_action_list(
        &self,
        filter: VerificationActionFilterDTO,
    ) -> Result<Vec<VerificationActionResponseDTO>, ServiceError> {
        let actions = match (filter.performed_by, filter.entity_type, filter.entity_id) {
            (Some(performer), _, _) => {
                self.verification_action_repository
                    .get_actions_by_performer(&performer)
                    .await?
            }
            (None, Some(entity_type), Some(entity_id)) => {
                self.verification_action_repository
                    .get_actions_by_entity(entity_type, entity_id)
                    .await?
            }
            _ => {
                self.verification_action_repository
                    .get_verification_action_list()
                    .await?
            }
        };

        Ok(actions
            .into_iter()
            .filter(|action| {
                filter
                    .entity_type
                    .is_none_or(|entity_type| action.entity_type == entity_type)
                    && filter.entity_id.is_none_or(|entity_id| action.entity_id == entity_id)
            })
            .map(Into::into)
            .collect())
    }

    // ============ Private methods

    async fn decide_user(&self, request: &VerificationRequestDTO) -> Result<String, ServiceError> {
        let user_id = UserId::from(i64::from(request.entity_id));
        let user = self
            .user_repository
            .get_user(&user_id)
            .await?
            .ok_or(EntityNotFoundError::User(user_id))?;

        let next = workflow::user_decision(user.state, request.action).ok_or_else(|| {
            illegal_transition(request, user.state.to_string())
        })?;

        self.user_repository.update_user_state(&user_id, next).await?;

        Ok(next.to_string())
    }

    async fn decide_project(
        &self,
        request: &VerificationRequestDTO,
    ) -> Result<String, ServiceError> {
        let project_id = ProjectId::from(i64::from(request.entity_id));
        let project = self
            .project_repository
            .get_project(&project_id)
            .await?
            .ok_or(EntityNotFoundError::Project(project_id))?;

        let next = workflow::project_decision(project.state, request.action).ok_or_else(|| {
            illegal_transition(request, project.state.to_string())
        })?;

        self.project_repository
            .update_project(UpdateProjectRequest {
                id: project_id,
                version: project.version,
                state: Some(next),
                ..Default::default()
            })
            .await?;

        Ok(next.to_string())
    }

    async fn decide_field_data(
        &self,
        request: &VerificationRequestDTO,
    ) -> Result<String, ServiceError> {
        let field_data_id = FieldDataId::from(i64::from(request.entity_id));
        let field_data = self
            .field_data_repository
            .get_field_data(&field_data_id)
            .await?
            .ok_or(EntityNotFoundError::FieldData(field_data_id))?;

        let next = workflow::field_data_decision(field_data.state, request.action).ok_or_else(
            || illegal_transition(request, field_data.state.to_string()),
        )?;

        self.field_data_repository
            .update_field_data(UpdateFieldDataRequest {
                id: field_data_id,
                version: field_data.version,
                state: Some(next),
            })
            .await?;

        Ok(next.to_string())
    }

    async fn decide_carbon_credit(
        &self,
        request: &VerificationRequestDTO,
        performer: &UserId,
    ) -> Result<String, ServiceError> {
        let credit_id = CarbonCreditId::from(i64::from(request.entity_id));
        let credit = self
            .carbon_credit_repository
            .get_carbon_credit(&credit_id)
            .await?
            .ok_or(EntityNotFoundError::CarbonCredit(credit_id))?;

        let next = workflow::carbon_credit_decision(credit.state, request.action).ok_or_else(
            || illegal_transition(request, credit.state.to_string()),
        )?;

        self.carbon_credit_repository
            .update_carbon_credit(UpdateCarbonCreditRequest {
                id: credit_id,
                version: credit.version,
                state: Some(next),
                verified_by: Some(*performer),
                ..Default::default()
            })
            .await?;

        Ok(next.to_string())
    }
}

fn illegal_transition(request: &VerificationRequestDTO, from: String) -> ServiceError {
    BusinessLogicError::InvalidStateTransition {
        entity_type: request.entity_type,
        entity_id: request.entity_id,
        from,
        action: request.action.to_string(),
    }
    .into()
}
