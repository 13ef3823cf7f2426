use shared_types::{EntityId, UserId, VerificationActionId};

use super::error::DataLayerError;
use crate::model::verification_action::{VerificationAction, VerificationEntityType};

/// Append-only; there is deliberately no update or delete operation.
#[async_trait::async_trait]
pub trait VerificationActionRepository {
    async fn create_verification_action(
        &self,
        request: VerificationAction,
    ) -> Result<VerificationActionId, DataLayerError>;

    async fn get_verification_action_list(
        &self,
    ) -> Result<Vec<VerificationAction>, DataLayerError>;

    async fn get_actions_by_performer(
        &self,
        performer: &UserId,
    ) -> Result<Vec<VerificationAction>, DataLayerError>;

    async fn get_actions_by_entity(
        &self,
        entity_type: VerificationEntityType,
        entity_id: EntityId,
    ) -> Result<Vec<VerificationAction>, DataLayerError>;
}
