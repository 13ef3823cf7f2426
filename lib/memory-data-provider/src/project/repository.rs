use registry_core::model::project::{Project, UpdateProjectRequest};
use registry_core::repository::error::DataLayerError;
use registry_core::repository::project_repository::ProjectRepository;
use shared_types::ProjectId;
use time::OffsetDateTime;

use super::ProjectProvider;
use crate::db::next_id;

#[async_trait::async_trait]
impl ProjectRepository for ProjectProvider {
    async fn create_project(&self, request: Project) -> Result<ProjectId, DataLayerError> {
        let mut projects = self.storage.projects.write().await;

        let id = ProjectId::from(next_id(&projects));
        projects.insert(id, Project { id, ..request });

        Ok(id)
    }

    async fn get_project(&self, id: &ProjectId) -> Result<Option<Project>, DataLayerError> {
        Ok(self.storage.projects.read().await.get(id).cloned())
    }

    async fn get_project_list(&self) -> Result<Vec<Project>, DataLayerError> {
        Ok(self.storage.projects.read().await.values().cloned().collect())
    }

    async fn update_project(&self, request: UpdateProjectRequest) -> Result<(), DataLayerError> {
        let mut projects = self.storage.projects.write().await;
        let project = projects
            .get_mut(&request.id)
            .ok_or(DataLayerError::RecordNotFound)?;

        if project.version != request.version {
            return Err(DataLayerError::StaleVersion {
                current: project.version,
                observed: request.version,
            });
        }

        if let Some(state) = request.state {
            project.state = state;
        }
        if let Some(issued) = request.carbon_credits_issued {
            project.carbon_credits_issued = issued;
        }

        project.version += 1;
        project.last_modified = OffsetDateTime::now_utc();

        Ok(())
    }
}
