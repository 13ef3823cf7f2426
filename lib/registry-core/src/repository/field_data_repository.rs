use shared_types::{FieldDataId, ProjectId};

use super::error::DataLayerError;
use crate::model::field_data::{FieldData, UpdateFieldDataRequest};

#[async_trait::async_trait]
pub trait FieldDataRepository {
    async fn create_field_data(&self, request: FieldData) -> Result<FieldDataId, DataLayerError>;

    async fn get_field_data(&self, id: &FieldDataId) -> Result<Option<FieldData>, DataLayerError>;

    async fn get_field_data_list(&self) -> Result<Vec<FieldData>, DataLayerError>;

    async fn get_field_data_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<FieldData>, DataLayerError>;

    async fn update_field_data(
        &self,
        request: UpdateFieldDataRequest,
    ) -> Result<(), DataLayerError>;
}
