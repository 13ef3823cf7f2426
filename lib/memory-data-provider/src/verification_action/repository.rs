use registry_core::model::verification_action::{VerificationAction, VerificationEntityType};
use registry_core::repository::error::DataLayerError;
use registry_core::repository::verification_action_repository::VerificationActionRepository;
use shared_types::{EntityId, UserId, VerificationActionId};

use super::VerificationActionProvider;
use crate::db::next_id;

#[async_trait::async_trait]
impl VerificationActionRepository for VerificationActionProvider {
    async fn create_verification_action(
        &self,
        request: VerificationAction,
    ) -> Result<VerificationActionId, DataLayerError> {
        let mut actions = self.storage.verification_actions.write().await;

        let id = VerificationActionId::from(next_id(&actions));
        actions.insert(id, VerificationAction { id, ..request });

        Ok(id)
    }

    async fn get_verification_action_list(
        &self,
    ) -> Result<Vec<VerificationAction>, DataLayerError> {
        Ok(self
            .storage
            .verification_actions
            .read()
            .await
            .values()
            .cloned()
            .collect())
    }

    async fn get_actions_by_performer(
        &self,
        performer: &UserId,
    ) -> Result<Vec<VerificationAction>, DataLayerError> {
        Ok(self
            .storage
            .verification_actions
            .read()
            .await
            .values()
            .filter(|action| action.performed_by == *performer)
            .cloned()
            .collect())
    }

    async fn get_actions_by_entity(
        &self,
        entity_type: VerificationEntityType,
        entity_id: EntityId,
    ) -> Result<Vec<VerificationAction>, DataLayerError> {
        Ok(self
            .storage
            .verification_actions
            .read()
            .await
            .values()
            .filter(|action| action.entity_type == entity_type && action.entity_id == entity_id)
            .cloned()
            .collect())
    }
}
