pub mod dto;
pub mod mapper;
pub mod service;

pub(crate) mod validator;

use std::sync::Arc;

use crate::repository::field_data_repository::FieldDataRepository;
use crate::repository::project_repository::ProjectRepository;
use crate::repository::user_repository::UserRepository;

#[derive(Clone)]
pub struct FieldDataService {
    field_data_repository: Arc<dyn FieldDataRepository + Send + Sync>,
    project_repository: Arc<dyn ProjectRepository + Send + Sync>,
    user_repository: Arc<dyn UserRepository + Send + Sync>,
}

impl FieldDataService {
    pub(crate) fn new(
        field_data_repository: Arc<dyn FieldDataRepository + Send + Sync>,
        project_repository: Arc<dyn ProjectRepository + Send + Sync>,
        user_repository: Arc<dyn UserRepository + Send + Sync>,
    ) -> Self {
        Self {
            field_data_repository,
            project_repository,
            user_repository,
        }
    }
}
