use registry_core::model::field_data::{FieldData, UpdateFieldDataRequest};
use registry_core::repository::error::DataLayerError;
use registry_core::repository::field_data_repository::FieldDataRepository;
use shared_types::{FieldDataId, ProjectId};
use time::OffsetDateTime;

use super::FieldDataProvider;
use crate::db::next_id;

#[async_trait::async_trait]
impl FieldDataRepository for FieldDataProvider {
    async fn create_field_data(&self, request: FieldData) -> Result<FieldDataId, DataLayerError> {
        let mut records = self.storage.field_data.write().await;

        let id = FieldDataId::from(next_id(&records));
        records.insert(id, FieldData { id, ..request });

        Ok(id)
    }

    async fn get_field_data(&self, id: &FieldDataId) -> Result<Option<FieldData>, DataLayerError> {
        Ok(self.storage.field_data.read().await.get(id).cloned())
    }

    async fn get_field_data_list(&self) -> Result<Vec<FieldData>, DataLayerError> {
        Ok(self
            .storage
            .field_data
            .read()
            .await
            .values()
            .cloned()
            .collect())
    }

    async fn get_field_data_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<FieldData>, DataLayerError> {
        Ok(self
            .storage
            .field_data
            .read()
            .await
            .values()
            .filter(|record| record.project_id == *project_id)
            .cloned()
            .collect())
    }

    async fn update_field_data(
        &self,
        request: UpdateFieldDataRequest,
    ) -> Result<(), DataLayerError> {
        let mut records = self.storage.field_data.write().await;
        let record = records
            .get_mut(&request.id)
            .ok_or(DataLayerError::RecordNotFound)?;

        if record.version != request.version {
            return Err(DataLayerError::StaleVersion {
                current: record.version,
                observed: request.version,
            });
        }

        if let Some(state) = request.state {
            record.state = state;
        }

        record.version += 1;
        record.last_modified = OffsetDateTime::now_utc();

        Ok(())
    }
}
