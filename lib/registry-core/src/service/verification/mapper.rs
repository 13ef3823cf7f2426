use super::dto::VerificationActionResponseDTO;
use crate::model::verification_action::VerificationAction;

impl From<VerificationAction> for VerificationActionResponseDTO {
    fn from(value: VerificationAction) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            action: value.action,
            entity_type: value.entity_type,
            entity_id: value.entity_id,
            performed_by: value.performed_by,
            remarks: value.remarks,
        }
    }
}
