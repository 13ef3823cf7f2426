use registry_core::model::user::{User, UserStateEnum};
use registry_core::repository::error::DataLayerError;
use registry_core::repository::user_repository::UserRepository;
use shared_types::UserId;
use time::OffsetDateTime;

use super::UserProvider;
use crate::db::next_id;

#[async_trait::async_trait]
impl UserRepository for UserProvider {
    async fn create_user(&self, request: User) -> Result<UserId, DataLayerError> {
        let mut users = self.storage.users.write().await;

        let id = UserId::from(next_id(&users));
        users.insert(id, User { id, ..request });

        Ok(id)
    }

    async fn get_user(&self, id: &UserId) -> Result<Option<User>, DataLayerError> {
        Ok(self.storage.users.read().await.get(id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DataLayerError> {
        let users = self.storage.users.read().await;

        Ok(users
            .values()
            .find(|user| user.contact_email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn get_user_list(&self) -> Result<Vec<User>, DataLayerError> {
        Ok(self.storage.users.read().await.values().cloned().collect())
    }

    async fn update_user_state(
        &self,
        id: &UserId,
        state: UserStateEnum,
    ) -> Result<(), DataLayerError> {
        let mut users = self.storage.users.write().await;
        let user = users.get_mut(id).ok_or(DataLayerError::RecordNotFound)?;

        user.state = state;
        user.last_modified = OffsetDateTime::now_utc();

        Ok(())
    }
}
