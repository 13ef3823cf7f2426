#![cfg_attr(feature = "strict", deny(warnings))]

//! Domain core of the blue-carbon restoration registry: entity models, the
//! workflow transition tables, repository traits and the role-facing
//! services. Storage and the ledger client are injected, so embedders pick
//! the data provider and the registry backend.

use std::sync::Arc;

pub mod common_validator;
pub mod config;
pub mod model;
pub mod provider;
pub mod repository;
pub mod service;
pub mod workflow;

use config::core_config::CoreConfig;
use provider::ledger::LedgerClient;
use repository::DataRepository;
use service::carbon_credit::CarbonCreditService;
use service::dashboard::DashboardService;
use service::field_data::FieldDataService;
use service::plantation_site::PlantationSiteService;
use service::project::ProjectService;
use service::user::UserService;
use service::verification::VerificationService;

#[derive(Clone)]
pub struct RegistryCore {
    pub user_service: UserService,
    pub plantation_site_service: PlantationSiteService,
    pub project_service: ProjectService,
    pub field_data_service: FieldDataService,
    pub carbon_credit_service: CarbonCreditService,
    pub verification_service: VerificationService,
    pub dashboard_service: DashboardService,
}

impl RegistryCore {
    pub fn new(
        data_provider: Arc<dyn DataRepository>,
        ledger_client: Arc<dyn LedgerClient + Send + Sync>,
        config: CoreConfig,
    ) -> Self {
        let config = Arc::new(config);

        let user_repository = data_provider.get_user_repository();
        let project_repository = data_provider.get_project_repository();
        let plantation_site_repository = data_provider.get_plantation_site_repository();
        let field_data_repository = data_provider.get_field_data_repository();
        let carbon_credit_repository = data_provider.get_carbon_credit_repository();
        let verification_action_repository = data_provider.get_verification_action_repository();

        RegistryCore {
            user_service: UserService::new(user_repository.clone()),
            plantation_site_service: PlantationSiteService::new(
                plantation_site_repository.clone(),
                user_repository.clone(),
            ),
            project_service: ProjectService::new(
                project_repository.clone(),
                plantation_site_repository.clone(),
                user_repository.clone(),
            ),
            field_data_service: FieldDataService::new(
                field_data_repository.clone(),
                project_repository.clone(),
                user_repository.clone(),
            ),
            carbon_credit_service: CarbonCreditService::new(
                carbon_credit_repository.clone(),
                project_repository.clone(),
                field_data_repository.clone(),
                user_repository.clone(),
                ledger_client,
                config,
            ),
            verification_service: VerificationService::new(
                user_repository.clone(),
                project_repository.clone(),
                field_data_repository.clone(),
                carbon_credit_repository.clone(),
                verification_action_repository,
            ),
            dashboard_service: DashboardService::new(
                user_repository,
                project_repository,
                plantation_site_repository,
                field_data_repository,
                carbon_credit_repository,
            ),
        }
    }
}
