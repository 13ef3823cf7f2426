use shared_types::PlantationSiteId;

use super::PlantationSiteService;
use super::dto::{CreatePlantationSiteRequestDTO, PlantationSiteResponseDTO};
use super::mapper::from_create_request;
use crate::common_validator::{throw_if_user_not_verified, throw_if_user_role_not_eq};
use crate::model::user::UserRole;
use crate::service::error::{EntityNotFoundError, ServiceError};

impl PlantationSiteService {
    /// Registers a new site as `Available`. Only a verified panchayat may
    /// offer sites.
    pub async fn create_plantation_site(
        &self,
        request: CreatePlantationSiteRequestDTO,
    ) -> Result<PlantationSiteId, ServiceError> {
        super::validator::validate_create_request(&request)?;

        let panchayat = self
            .user_repository
            .get_user(&request.panchayat_id)
            .await?
            .ok_or(EntityNotFoundError::User(request.panchayat_id))?;

        throw_if_user_role_not_eq(&panchayat, UserRole::Panchayat)?;
        throw_if_user_not_verified(&panchayat)?;

        let site = from_create_request(request);

        let result = self
            .plantation_site_repository
            .create_plantation_site(site)
            .await?;
        Ok(result)
    }

    pub async fn get_plantation_site(
        &self,
        site_id: &PlantationSiteId,
    ) -> Result<PlantationSiteResponseDTO, ServiceError> {
        let site = self
            .plantation_site_repository
            .get_plantation_site(site_id)
            .await?
            .ok_or(EntityNotFoundError::PlantationSite(*site_id))?;

        Ok(site.into())
    }

    pub async fn get_plantation_site_list(
        &self,
    ) -> Result<Vec<PlantationSiteResponseDTO>, ServiceError> {
        let sites = self
            .plantation_site_repository
            .get_plantation_site_list()
            .await?;

        Ok(sites.into_iter().map(Into::into).collect())
    }
}
