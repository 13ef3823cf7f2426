use mockall::*;
use shared_types::ProjectId;

use crate::model::project::{Project, UpdateProjectRequest};
use crate::repository::error::DataLayerError;

#[derive(Default)]
struct ProjectRepository;

mock! {
    pub ProjectRepository {
        pub fn create_project(&self, request: Project) -> Result<ProjectId, DataLayerError>;

        pub fn get_project(&self, id: &ProjectId) -> Result<Option<Project>, DataLayerError>;

        pub fn get_project_list(&self) -> Result<Vec<Project>, DataLayerError>;

        pub fn update_project(&self, request: UpdateProjectRequest) -> Result<(), DataLayerError>;
    }
}

#[async_trait::async_trait]
impl crate::repository::project_repository::ProjectRepository for MockProjectRepository {
    async fn create_project(&self, request: Project) -> Result<ProjectId, DataLayerError> {
        self.create_project(request)
    }

    async fn get_project(&self, id: &ProjectId) -> Result<Option<Project>, DataLayerError> {
        self.get_project(id)
    }

    async fn get_project_list(&self) -> Result<Vec<Project>, DataLayerError> {
        self.get_project_list()
    }

    async fn update_project(&self, request: UpdateProjectRequest) -> Result<(), DataLayerError> {
        self.update_project(request)
    }
}
