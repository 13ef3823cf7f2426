use shared_types::UserId;

use super::error::DataLayerError;
use crate::model::user::{User, UserStateEnum};

#[async_trait::async_trait]
pub trait UserRepository {
    /// The registry assigns the id; the one on `request` is ignored.
    async fn create_user(&self, request: User) -> Result<UserId, DataLayerError>;

    async fn get_user(&self, id: &UserId) -> Result<Option<User>, DataLayerError>;

    /// Case-insensitive email lookup, used for duplicate-registration checks.
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DataLayerError>;

    async fn get_user_list(&self) -> Result<Vec<User>, DataLayerError>;

    async fn update_user_state(
        &self,
        id: &UserId,
        state: UserStateEnum,
    ) -> Result<(), DataLayerError>;
}
