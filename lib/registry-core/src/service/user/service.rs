use shared_types::UserId;

use super::UserService;
use super::dto::{CreateUserRequestDTO, UserResponseDTO};
use super::mapper::from_create_request;
use crate::service::error::{EntityAlreadyExistsError, EntityNotFoundError, ServiceError};

impl UserService {
    /// Registers a user in `Pending` state, awaiting an admin decision.
    ///
    /// # Arguments
    ///
    /// * `request` - registration request
    pub async fn register_user(
        &self,
        request: CreateUserRequestDTO,
    ) -> Result<UserId, ServiceError> {
        super::validator::validate_register_request(&request)?;

        let existing = self
            .user_repository
            .get_user_by_email(&request.contact_email)
            .await?;
        if existing.is_some() {
            return Err(EntityAlreadyExistsError::UserEmail(request.contact_email).into());
        }

        let user = from_create_request(request);

        let result = self.user_repository.create_user(user).await?;
        Ok(result)
    }

    /// Returns details of a user
    ///
    /// # Arguments
    ///
    /// * `user_id` - Id of an existing user
    pub async fn get_user(&self, user_id: &UserId) -> Result<UserResponseDTO, ServiceError> {
        let user = self
            .user_repository
            .get_user(user_id)
            .await?
            .ok_or(EntityNotFoundError::User(*user_id))?;

        Ok(user.into())
    }

    pub async fn get_user_list(&self) -> Result<Vec<UserResponseDTO>, ServiceError> {
        let users = self.user_repository.get_user_list().await?;

        Ok(users.into_iter().map(Into::into).collect())
    }
}
