use shared_types::{EntityId, UserId, VerificationActionId};
use time::OffsetDateTime;

use crate::model::verification_action::{VerificationActionType, VerificationEntityType};

#[derive(Clone, Debug)]
pub struct VerificationRequestDTO {
    pub action: VerificationActionType,
    pub entity_type: VerificationEntityType,
    pub entity_id: EntityId,
    pub performed_by: UserId,
    pub remarks: Option<String>,
}

#[derive(Clone, Debug)]
pub struct VerificationResponseDTO {
    pub action_id: VerificationActionId,
    pub action: VerificationActionType,
    pub entity_type: VerificationEntityType,
    pub entity_id: EntityId,
    pub new_state: String,
    pub performed_by: UserId,
    pub created_date: OffsetDateTime,
}

#[derive(Clone, Debug, Default)]
pub struct VerificationActionFilterDTO {
    pub performed_by: Option<UserId>,
    pub entity_type: Option<VerificationEntityType>,
    pub entity_id: Option<EntityId>,
}

#[derive(Clone, Debug)]
pub struct VerificationActionResponseDTO {
    pub id: VerificationActionId,
    pub created_date: OffsetDateTime,
    pub action: VerificationActionType,
    pub entity_type: VerificationEntityType,
    pub entity_id: EntityId,
    pub performed_by: UserId,
    pub remarks: Option<String>,
}
