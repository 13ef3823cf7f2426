use registry_core::service::verification::dto::VerificationActionFilterDTO;

use super::dto::VerificationActionQueryRestDTO;

impl From<VerificationActionQueryRestDTO> for VerificationActionFilterDTO {
    fn from(value: VerificationActionQueryRestDTO) -> Self {
        Self {
            performed_by: value.performed_by,
            entity_type: value.entity_type.map(Into::into),
            entity_id: value.entity_id,
        }
    }
}
