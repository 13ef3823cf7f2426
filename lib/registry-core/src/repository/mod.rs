pub mod error;

pub mod carbon_credit_repository;
pub mod field_data_repository;
pub mod plantation_site_repository;
pub mod project_repository;
pub mod user_repository;
pub mod verification_action_repository;

use std::sync::Arc;

use carbon_credit_repository::CarbonCreditRepository;
use field_data_repository::FieldDataRepository;
use plantation_site_repository::PlantationSiteRepository;
use project_repository::ProjectRepository;
use user_repository::UserRepository;
use verification_action_repository::VerificationActionRepository;

/// Storage entry point injected into the core; swapping the implementation
/// swaps the persistence technology without touching any service.
pub trait DataRepository {
    fn get_user_repository(&self) -> Arc<dyn UserRepository + Send + Sync>;
    fn get_project_repository(&self) -> Arc<dyn ProjectRepository + Send + Sync>;
    fn get_plantation_site_repository(&self) -> Arc<dyn PlantationSiteRepository + Send + Sync>;
    fn get_field_data_repository(&self) -> Arc<dyn FieldDataRepository + Send + Sync>;
    fn get_carbon_credit_repository(&self) -> Arc<dyn CarbonCreditRepository + Send + Sync>;
    fn get_verification_action_repository(
        &self,
    ) -> Arc<dyn VerificationActionRepository + Send + Sync>;
}

#[cfg(test)]
pub mod mock;
