use shared_types::ProjectId;

use super::error::DataLayerError;
use crate::model::project::{Project, UpdateProjectRequest};

#[async_trait::async_trait]
pub trait ProjectRepository {
    async fn create_project(&self, request: Project) -> Result<ProjectId, DataLayerError>;

    async fn get_project(&self, id: &ProjectId) -> Result<Option<Project>, DataLayerError>;

    async fn get_project_list(&self) -> Result<Vec<Project>, DataLayerError>;

    /// Version-checked update; fails with [`DataLayerError::StaleVersion`]
    /// when the caller's observed version is behind.
    async fn update_project(&self, request: UpdateProjectRequest) -> Result<(), DataLayerError>;
}
