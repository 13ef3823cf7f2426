pub mod dto;
pub mod service;

use std::sync::Arc;

use crate::repository::carbon_credit_repository::CarbonCreditRepository;
use crate::repository::field_data_repository::FieldDataRepository;
use crate::repository::plantation_site_repository::PlantationSiteRepository;
use crate::repository::project_repository::ProjectRepository;
use crate::repository::user_repository::UserRepository;

/// Read-side aggregation over current registry snapshots; stateless and
/// recomputed per call.
#[derive(Clone)]
pub struct DashboardService {
    user_repository: Arc<dyn UserRepository + Send + Sync>,
    project_repository: Arc<dyn ProjectRepository + Send + Sync>,
    plantation_site_repository: Arc<dyn PlantationSiteRepository + Send + Sync>,
    field_data_repository: Arc<dyn FieldDataRepository + Send + Sync>,
    carbon_credit_repository: Arc<dyn CarbonCreditRepository + Send + Sync>,
}

impl DashboardService {
    pub(crate) fn new(
        user_repository: Arc<dyn UserRepository + Send + Sync>,
        project_repository: Arc<dyn ProjectRepository + Send + Sync>,
        plantation_site_repository: Arc<dyn PlantationSiteRepository + Send + Sync>,
        field_data_repository: Arc<dyn FieldDataRepository + Send + Sync>,
        carbon_credit_repository: Arc<dyn CarbonCreditRepository + Send + Sync>,
    ) -> Self {
        Self {
            user_repository,
            project_repository,
            plantation_site_repository,
            field_data_repository,
            carbon_credit_repository,
        }
    }
}
