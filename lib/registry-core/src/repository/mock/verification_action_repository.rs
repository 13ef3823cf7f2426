use mockall::*;
use shared_types::{EntityId, UserId, VerificationActionId};

use crate::model::verification_action::{VerificationAction, VerificationEntityType};
use crate::repository::error::DataLayerError;

#[derive(Default)]
struct VerificationActionRepository;

mock! {
    pub VerificationActionRepository {
        pub fn create_verification_action(
            &self,
            request: VerificationAction,
        ) -> Result<VerificationActionId, DataLayerError>;

        pub fn get_verification_action_list(
            &self,
        ) -> Result<Vec<VerificationAction>, DataLayerError>;

        pub fn get_actions_by_performer(
            &self,
            performer: &UserId,
        ) -> Result<Vec<VerificationAction>, DataLayerError>;

        pub fn get_actions_by_entity(
            &self,
            entity_type: VerificationEntityType,
            entity_id: EntityId,
        ) -> Result<Vec<VerificationAction>, DataLayerError>;
    }
}

#[async_trait::async_trait]
impl crate::repository::verification_action_repository::VerificationActionRepository
    for MockVerificationActionRepository
{
    async fn create_verification_action(
        &self,
        request: VerificationAction,
    ) -> Result<VerificationActionId, DataLayerError> {
        self.create_verification_action(request)
    }

    async fn get_verification_action_list(
        &self,
    ) -> Result<Vec<VerificationAction>, DataLayerError> {
        self.get_verification_action_list()
    }

    async fn get_actions_by_performer(
        &self,
        performer: &UserId,
    ) -> Result<Vec<VerificationAction>, DataLayerError> {
        self.get_actions_by_performer(performer)
    }

    async fn get_actions_by_entity(
        &self,
        entity_type: VerificationEntityType,
        entity_id: EntityId,
    ) -> Result<Vec<VerificationAction>, DataLayerError> {
        self.get_actions_by_entity(entity_type, entity_id)
    }
}
