use mockall::*;
use shared_types::{FieldDataId, ProjectId};

use crate::model::field_data::{FieldData, UpdateFieldDataRequest};
use crate::repository::error::DataLayerError;

#[derive(Default)]
struct FieldDataRepository;

mock! {
    pub FieldDataRepository {
        pub fn create_field_data(&self, request: FieldData) -> Result<FieldDataId, DataLayerError>;

        pub fn get_field_data(&self, id: &FieldDataId) -> Result<Option<FieldData>, DataLayerError>;

        pub fn get_field_data_list(&self) -> Result<Vec<FieldData>, DataLayerError>;

        pub fn get_field_data_by_project(
            &self,
            project_id: &ProjectId,
        ) -> Result<Vec<FieldData>, DataLayerError>;

        pub fn update_field_data(
            &self,
            request: UpdateFieldDataRequest,
        ) -> Result<(), DataLayerError>;
    }
}

#[async_trait::async_trait]
impl crate::repository::field_data_repository::FieldDataRepository for MockFieldDataRepository {
    async fn create_field_data(&self, request: FieldData) -> Result<FieldDataId, DataLayerError> {
        self.create_field_data(request)
    }

    async fn get_field_data(&self, id: &FieldDataId) -> Result<Option<FieldData>, DataLayerError> {
        self.get_field_data(id)
    }

    async fn get_field_data_list(&self) -> Result<Vec<FieldData>, DataLayerError> {
        self.get_field_data_list()
    }

    async fn get_field_data_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<FieldData>, DataLayerError> {
        self.get_field_data_by_project(project_id)
    }

    async fn update_field_data(
        &self,
        request: UpdateFieldDataRequest,
    ) -> Result<(), DataLayerError> {
        self.update_field_data(request)
    }
}
