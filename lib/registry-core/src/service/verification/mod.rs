pub mod dto;
pub mod mapper;
pub mod service;

use std::sync::Arc;

use crate::repository::carbon_credit_repository::CarbonCreditRepository;
use crate::repository::field_data_repository::FieldDataRepository;
use crate::repository::project_repository::ProjectRepository;
use crate::repository::user_repository::UserRepository;
use crate::repository::verification_action_repository::VerificationActionRepository;

/// Front door for approve/reject decisions on any entity type. All status
/// mutations triggered by verifiers and admins go through [`apply`], which
/// consults the workflow transition tables and appends the audit entry.
///
/// [`apply`]: VerificationService::apply
#[derive(Clone)]
pub struct VerificationService {
    user_repository: Arc<dyn UserRepository + Send + Sync>,
    project_repository: Arc<dyn ProjectRepository + Send + Sync>,
    field_data_repository: Arc<dyn FieldDataRepository + Send + Sync>,
    carbon_credit_repository: Arc<dyn CarbonCreditRepository + Send + Sync>,
    verification_action_repository: Arc<dyn VerificationActionRepository + Send + Sync>,
}

impl VerificationService {
    pub(crate) fn new(
        user_repository: Arc<dyn UserRepository + Send + Sync>,
        project_repository: Arc<dyn ProjectRepository + Send + Sync>,
        field_data_repository: Arc<dyn FieldDataRepository + Send + Sync>,
        carbon_credit_repository: Arc<dyn CarbonCreditRepository + Send + Sync>,
        verification_action_repository: Arc<dyn VerificationActionRepository + Send + Sync>,
    ) -> Self {
        Self {
            user_repository,
            project_repository,
            field_data_repository,
            carbon_credit_repository,
            verification_action_repository,
        }
    }
}

#[cfg(test)]
mod test;
