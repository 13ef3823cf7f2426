use shared_types::{EntityId, UserId, VerificationActionId};
use strum::Display;
use time::OffsetDateTime;

/// Append-only audit entry. The single source of truth for why an entity's
/// status changed; never mutated or deleted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerificationAction {
    pub id: VerificationActionId,
    pub created_date: OffsetDateTime,
    pub action: VerificationActionType,
    pub entity_id: EntityId,
    pub entity_type: VerificationEntityType,
    pub performed_by: UserId,
    pub remarks: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum VerificationActionType {
    Approve,
    Reject,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum VerificationEntityType {
    User,
    Project,
    FieldData,
    CarbonCredit,
}
