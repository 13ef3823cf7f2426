use mockall::*;
use shared_types::PlantationSiteId;

use crate::model::plantation_site::{PlantationSite, PlantationSiteStateEnum};
use crate::repository::error::DataLayerError;

#[derive(Default)]
struct PlantationSiteRepository;

mock! {
    pub PlantationSiteRepository {
        pub fn create_plantation_site(
            &self,
            request: PlantationSite,
        ) -> Result<PlantationSiteId, DataLayerError>;

        pub fn get_plantation_site(
            &self,
            id: &PlantationSiteId,
        ) -> Result<Option<PlantationSite>, DataLayerError>;

        pub fn get_plantation_site_list(&self) -> Result<Vec<PlantationSite>, DataLayerError>;

        pub fn update_plantation_site_state(
            &self,
            id: &PlantationSiteId,
            state: PlantationSiteStateEnum,
        ) -> Result<(), DataLayerError>;
    }
}

#[async_trait::async_trait]
impl crate::repository::plantation_site_repository::PlantationSiteRepository
    for MockPlantationSiteRepository
{
    async fn create_plantation_site(
        &self,
        request: PlantationSite,
    ) -> Result<PlantationSiteId, DataLayerError> {
        self.create_plantation_site(request)
    }

    async fn get_plantation_site(
        &self,
        id: &PlantationSiteId,
    ) -> Result<Option<PlantationSite>, DataLayerError> {
        self.get_plantation_site(id)
    }

    async fn get_plantation_site_list(&self) -> Result<Vec<PlantationSite>, DataLayerError> {
        self.get_plantation_site_list()
    }

    async fn update_plantation_site_state(
        &self,
        id: &PlantationSiteId,
        state: PlantationSiteStateEnum,
    ) -> Result<(), DataLayerError> {
        self.update_plantation_site_state(id, state)
    }
}
