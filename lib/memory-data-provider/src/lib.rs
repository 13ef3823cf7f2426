#![cfg_attr(feature = "strict", deny(warnings))]

//! In-memory implementation of the registry's repository traits. State lives
//! in `RwLock`-guarded ordered maps; ids are assigned as `max + 1` with the
//! first insert into an empty collection getting id 1. Intended for demos
//! and tests; a persistent provider implements the same traits.

use std::sync::Arc;

use registry_core::repository::DataRepository;
use registry_core::repository::carbon_credit_repository::CarbonCreditRepository;
use registry_core::repository::error::DataLayerError;
use registry_core::repository::field_data_repository::FieldDataRepository;
use registry_core::repository::plantation_site_repository::PlantationSiteRepository;
use registry_core::repository::project_repository::ProjectRepository;
use registry_core::repository::user_repository::UserRepository;
use registry_core::repository::verification_action_repository::VerificationActionRepository;

mod carbon_credit;
mod db;
mod field_data;
mod plantation_site;
mod project;
mod seed;
mod user;
mod verification_action;

#[cfg(test)]
pub(crate) mod test_utilities;

use carbon_credit::CarbonCreditProvider;
use db::InMemoryStorage;
use field_data::FieldDataProvider;
use plantation_site::PlantationSiteProvider;
use project::ProjectProvider;
use user::UserProvider;
use verification_action::VerificationActionProvider;

pub struct DataLayer {
    user_repository: Arc<UserProvider>,
    plantation_site_repository: Arc<PlantationSiteProvider>,
    project_repository: Arc<ProjectProvider>,
    field_data_repository: Arc<FieldDataProvider>,
    carbon_credit_repository: Arc<CarbonCreditProvider>,
    verification_action_repository: Arc<VerificationActionProvider>,
}

impl DataLayer {
    /// An empty registry.
    pub fn build() -> Self {
        let storage = Arc::new(InMemoryStorage::default());

        Self {
            user_repository: Arc::new(UserProvider {
                storage: storage.clone(),
            }),
            plantation_site_repository: Arc::new(PlantationSiteProvider {
                storage: storage.clone(),
            }),
            project_repository: Arc::new(ProjectProvider {
                storage: storage.clone(),
            }),
            field_data_repository: Arc::new(FieldDataProvider {
                storage: storage.clone(),
            }),
            carbon_credit_repository: Arc::new(CarbonCreditProvider {
                storage: storage.clone(),
            }),
            verification_action_repository: Arc::new(VerificationActionProvider { storage }),
        }
    }

    /// A registry pre-loaded with the fixed demo dataset.
    pub async fn seeded() -> Result<Self, DataLayerError> {
        let layer = Self::build();
        seed::seed_demo_data(&layer).await?;

        Ok(layer)
    }
}

impl DataRepository for DataLayer {
    fn get_user_repository(&self) -> Arc<dyn UserRepository + Send + Sync> {
        self.user_repository.clone()
    }

    fn get_project_repository(&self) -> Arc<dyn ProjectRepository + Send + Sync> {
        self.project_repository.clone()
    }

    fn get_plantation_site_repository(&self) -> Arc<dyn PlantationSiteRepository + Send + Sync> {
        self.plantation_site_repository.clone()
    }

    fn get_field_data_repository(&self) -> Arc<dyn FieldDataRepository + Send + Sync> {
        self.field_data_repository.clone()
    }

    fn get_carbon_credit_repository(&self) -> Arc<dyn CarbonCreditRepository + Send + Sync> {
        self.carbon_credit_repository.clone()
    }

    fn get_verification_action_repository(
        &self,
    ) -> Arc<dyn VerificationActionRepository + Send + Sync> {
        self.verification_action_repository.clone()
    }
}
