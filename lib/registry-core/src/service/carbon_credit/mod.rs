pub mod dto;
pub mod mapper;
pub mod service;

pub(crate) mod validator;

use std::sync::Arc;

use crate::config::core_config::CoreConfig;
use crate::provider::ledger::LedgerClient;
use crate::repository::carbon_credit_repository::CarbonCreditRepository;
use crate::repository::field_data_repository::FieldDataRepository;
use crate::repository::project_repository::ProjectRepository;
use crate::repository::user_repository::UserRepository;

#[derive(Clone)]
pub struct CarbonCreditService {
    carbon_credit_repository: Arc<dyn CarbonCreditRepository + Send + Sync>,
    project_repository: Arc<dyn ProjectRepository + Send + Sync>,
    field_data_repository: Arc<dyn FieldDataRepository + Send + Sync>,
    user_repository: Arc<dyn UserRepository + Send + Sync>,
    ledger_client: Arc<dyn LedgerClient + Send + Sync>,
    config: Arc<CoreConfig>,
}

impl CarbonCreditService {
    pub(crate) fn new(
        carbon_credit_repository: Arc<dyn CarbonCreditRepository + Send + Sync>,
        project_repository: Arc<dyn ProjectRepository + Send + Sync>,
        field_data_repository: Arc<dyn FieldDataRepository + Send + Sync>,
        user_repository: Arc<dyn UserRepository + Send + Sync>,
        ledger_client: Arc<dyn LedgerClient + Send + Sync>,
        config: Arc<CoreConfig>,
    ) -> Self {
        Self {
            carbon_credit_repository,
            project_repository,
            field_data_repository,
            user_repository,
            ledger_client,
            config,
        }
    }
}

#[cfg(test)]
mod test;
