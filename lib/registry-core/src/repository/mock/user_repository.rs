use mockall::*;
use shared_types::UserId;

use crate::model::user::{User, UserStateEnum};
use crate::repository::error::DataLayerError;

#[derive(Default)]
struct UserRepository;

mock! {
    pub UserRepository {
        pub fn create_user(&self, request: User) -> Result<UserId, DataLayerError>;

        pub fn get_user(&self, id: &UserId) -> Result<Option<User>, DataLayerError>;

        pub fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DataLayerError>;

        pub fn get_user_list(&self) -> Result<Vec<User>, DataLayerError>;

        pub fn update_user_state(
            &self,
            id: &UserId,
            state: UserStateEnum,
        ) -> Result<(), DataLayerError>;
    }
}

#[async_trait::async_trait]
impl crate::repository::user_repository::UserRepository for MockUserRepository {
    async fn create_user(&self, request: User) -> Result<UserId, DataLayerError> {
        self.create_user(request)
    }

    async fn get_user(&self, id: &UserId) -> Result<Option<User>, DataLayerError> {
        self.get_user(id)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DataLayerError> {
        self.get_user_by_email(email)
    }

    async fn get_user_list(&self) -> Result<Vec<User>, DataLayerError> {
        self.get_user_list()
    }

    async fn update_user_state(
        &self,
        id: &UserId,
        state: UserStateEnum,
    ) -> Result<(), DataLayerError> {
        self.update_user_state(id, state)
    }
}
