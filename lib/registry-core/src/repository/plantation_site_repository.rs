use shared_types::PlantationSiteId;

use super::error::DataLayerError;
use crate::model::plantation_site::{PlantationSite, PlantationSiteStateEnum};

#[async_trait::async_trait]
pub trait PlantationSiteRepository {
    async fn create_plantation_site(
        &self,
        request: PlantationSite,
    ) -> Result<PlantationSiteId, DataLayerError>;

    async fn get_plantation_site(
        &self,
        id: &PlantationSiteId,
    ) -> Result<Option<PlantationSite>, DataLayerError>;

    async fn get_plantation_site_list(&self) -> Result<Vec<PlantationSite>, DataLayerError>;

    async fn update_plantation_site_state(
        &self,
        id: &PlantationSiteId,
        state: PlantationSiteStateEnum,
    ) -> Result<(), DataLayerError>;
}
