use std::time::Duration;

use shared_types::CarbonCreditId;
use time::OffsetDateTime;

use super::CarbonCreditService;
use super::dto::{
    CarbonCreditResponseDTO, CreateCarbonCreditRequestDTO, IssueCarbonCreditRequestDTO,
    IssueCarbonCreditResponseDTO,
};
use super::mapper::from_create_request;
use crate::common_validator::{throw_if_user_not_verified, throw_if_user_role_not_eq};
use crate::model::carbon_credit::{CarbonCreditStateEnum, UpdateCarbonCreditRequest};
use crate::model::field_data::FieldDataStateEnum;
use crate::model::project::{ProjectStateEnum, UpdateProjectRequest};
use crate::model::user::UserRole;
use crate::model::verification_action::VerificationEntityType;
use crate::provider::ledger::{LedgerError, LedgerTransaction};
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError};

impl CarbonCreditService {
    /// Generates a pending credit batch for a project. Requires the project
    /// to be in monitoring (or completed) with at least one verified field
    /// report backing the sequestration claim.
    pub async fn generate_carbon_credits(
        &self,
        request: CreateCarbonCreditRequestDTO,
    ) -> Result<CarbonCreditId, ServiceError> {
        super::validator::validate_generate_request(&request)?;

        let project = self
            .project_repository
            .get_project(&request.project_id)
            .await?
            .ok_or(EntityNotFoundError::Project(request.project_id))?;

        if !matches!(
            project.state,
            ProjectStateEnum::Monitoring | ProjectStateEnum::Completed
        ) {
            return Err(BusinessLogicError::InvalidStateTransition {
                entity_type: VerificationEntityType::CarbonCredit,
                entity_id: project.id.into(),
                from: project.state.to_string(),
                action: "GenerateCredits".to_string(),
            }
            .into());
        }

        let field_data = self
            .field_data_repository
            .get_field_data_by_project(&project.id)
            .await?;
        if !field_data
            .iter()
            .any(|record| record.state == FieldDataStateEnum::Verified)
        {
            return Err(BusinessLogicError::MissingVerifiedFieldData(project.id).into());
        }

        let credit = from_create_request(request);

        let result = self
            .carbon_credit_repository
            .create_carbon_credit(credit)
            .await?;
        Ok(result)
    }

    /// Notifies the national registry of a verified credit batch and marks
    /// it issued. Transient ledger failures are retried with backoff; if the
    /// ledger stays unavailable the credit remains `Verified` and the error
    /// is reported to the caller.
    pub async fn issue_carbon_credit(
        &self,
        request: IssueCarbonCreditRequestDTO,
    ) -> Result<IssueCarbonCreditResponseDTO, ServiceError> {
        let admin = self
            .user_repository
            .get_user(&request.requested_by)
            .await?
            .ok_or(EntityNotFoundError::User(request.requested_by))?;
        throw_if_user_role_not_eq(&admin, UserRole::Admin)?;
        throw_if_user_not_verified(&admin)?;

        let credit = self
            .carbon_credit_repository
            .get_carbon_credit(&request.credit_id)
            .await?
            .ok_or(EntityNotFoundError::CarbonCredit(request.credit_id))?;

        if credit.state != CarbonCreditStateEnum::Verified {
            return Err(BusinessLogicError::InvalidStateTransition {
                entity_type: VerificationEntityType::CarbonCredit,
                entity_id: credit.id.into(),
                from: credit.state.to_string(),
                action: "Issue".to_string(),
            }
            .into());
        }

        let project = self
            .project_repository
            .get_project(&credit.project_id)
            .await?
            .ok_or(EntityNotFoundError::Project(credit.project_id))?;

        let transaction = self
            .issue_on_ledger(credit.project_id, credit.amount_tonnes)
            .await?;

        let now = OffsetDateTime::now_utc();
        self.carbon_credit_repository
            .update_carbon_credit(UpdateCarbonCreditRequest {
                id: credit.id,
                version: credit.version,
                state: Some(CarbonCreditStateEnum::Issued),
                approved_by: Some(admin.id),
                token_id: Some(transaction.token_id.clone()),
                ledger_tx_id: Some(transaction.tx_id.clone()),
                issued_at: Some(now),
                ..Default::default()
            })
            .await?;

        self.project_repository
            .update_project(UpdateProjectRequest {
                id: project.id,
                version: project.version,
                carbon_credits_issued: Some(project.carbon_credits_issued + credit.amount_tonnes),
                ..Default::default()
            })
            .await?;

        Ok(IssueCarbonCreditResponseDTO {
            credit_id: credit.id,
            ledger_tx_id: transaction.tx_id,
            token_id: transaction.token_id,
        })
    }

    pub async fn get_carbon_credit(
        &self,
        credit_id: &CarbonCreditId,
    ) -> Result<CarbonCreditResponseDTO, ServiceError> {
        let credit = self
            .carbon_credit_repository
            .get_carbon_credit(credit_id)
            .await?
            .ok_or(EntityNotFoundError::CarbonCredit(*credit_id))?;

        Ok(credit.into())
    }

    pub async fn get_carbon_credit_list(
        &self,
    ) -> Result<Vec<CarbonCreditResponseDTO>, ServiceError> {
        let credits = self
            .carbon_credit_repository
            .get_carbon_credit_list()
            .await?;

        Ok(credits.into_iter().map(Into::into).collect())
    }

    // ============ Private methods

    async fn issue_on_ledger(
        &self,
        project_id: shared_types::ProjectId,
        amount_tonnes: f64,
    ) -> Result<LedgerTransaction, ServiceError> {
        let attempts = self.config.ledger.issue_attempts.max(1);
        let mut delay = Duration::from_millis(self.config.ledger.issue_retry_delay_ms);

        for attempt in 1..=attempts {
            match self.ledger_client.issue(project_id, amount_tonnes).await {
                Ok(transaction) => return Ok(transaction),
                Err(error @ LedgerError::Rejected(_)) => return Err(error.into()),
                Err(error @ LedgerError::Unavailable(_)) => {
                    if attempt == attempts {
                        return Err(error.into());
                    }
                    tracing::warn!(
                        "ledger issuance attempt {attempt}/{attempts} failed: {error}; retrying"
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }

        unreachable!("loop either returns a transaction or an error")
    }
}
