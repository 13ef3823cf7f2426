pub mod dto;
pub mod mapper;
pub mod service;

pub(crate) mod validator;

use std::sync::Arc;

use crate::repository::plantation_site_repository::PlantationSiteRepository;
use crate::repository::project_repository::ProjectRepository;
use crate::repository::user_repository::UserRepository;

#[derive(Clone)]
pub struct ProjectService {
    project_repository: Arc<dyn ProjectRepository + Send + Sync>,
    plantation_site_repository: Arc<dyn PlantationSiteRepository + Send + Sync>,
    user_repository: Arc<dyn UserRepository + Send + Sync>,
}

impl ProjectService {
    pub(crate) fn new(
        project_repository: Arc<dyn ProjectRepository + Send + Sync>,
        plantation_site_repository: Arc<dyn PlantationSiteRepository + Send + Sync>,
        user_repository: Arc<dyn UserRepository + Send + Sync>,
    ) -> Self {
        Self {
            project_repository,
            plantation_site_repository,
            user_repository,
        }
    }
}
