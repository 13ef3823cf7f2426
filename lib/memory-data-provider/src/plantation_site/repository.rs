use registry_core::model::plantation_site::{PlantationSite, PlantationSiteStateEnum};
use registry_core::repository::error::DataLayerError;
use registry_core::repository::plantation_site_repository::PlantationSiteRepository;
use shared_types::PlantationSiteId;
use time::OffsetDateTime;

use super::PlantationSiteProvider;
use crate::db::next_id;

#[async_trait::async_trait]
impl PlantationSiteRepository for PlantationSiteProvider {
    async fn create_plantation_site(
        &self,
        request: PlantationSite,
    ) -> Result<PlantationSiteId, DataLayerError> {
        let mut sites = self.storage.plantation_sites.write().await;

        let id = PlantationSiteId::from(next_id(&sites));
        sites.insert(id, PlantationSite { id, ..request });

        Ok(id)
    }

    async fn get_plantation_site(
        &self,
        id: &PlantationSiteId,
    ) -> Result<Option<PlantationSite>, DataLayerError> {
        Ok(self.storage.plantation_sites.read().await.get(id).cloned())
    }

    async fn get_plantation_site_list(&self) -> Result<Vec<PlantationSite>, DataLayerError> {
        Ok(self
            .storage
            .plantation_sites
            .read()
            .await
            .values()
            .cloned()
            .collect())
    }

    async fn update_plantation_site_state(
        &self,
        id: &PlantationSiteId,
        state: PlantationSiteStateEnum,
    ) -> Result<(), DataLayerError> {
        let mut sites = self.storage.plantation_sites.write().await;
        let site = sites.get_mut(id).ok_or(DataLayerError::RecordNotFound)?;

        site.state = state;
        site.last_modified = OffsetDateTime::now_utc();

        Ok(())
    }
}
