pub mod dto;
pub mod mapper;
pub mod service;

pub(crate) mod validator;

use std::sync::Arc;

use crate::repository::plantation_site_repository::PlantationSiteRepository;
use crate::repository::user_repository::UserRepository;

#[derive(Clone)]
pub struct PlantationSiteService {
    plantation_site_repository: Arc<dyn PlantationSiteRepository + Send + Sync>,
    user_repository: Arc<dyn UserRepository + Send + Sync>,
}

impl PlantationSiteService {
    pub(crate) fn new(
        plantation_site_repository: Arc<dyn PlantationSiteRepository + Send + Sync>,
        user_repository: Arc<dyn UserRepository + Send + Sync>,
    ) -> Self {
        Self {
            plantation_site_repository,
            user_repository,
        }
    }
}
