use registry_core::service::field_data::dto::FieldDataFilterDTO;

use super::dto::FieldDataQueryRestDTO;

impl From<FieldDataQueryRestDTO> for FieldDataFilterDTO {
    fn from(value: FieldDataQueryRestDTO) -> Self {
        Self {
            project_id: value.project_id,
            state: value.state.map(Into::into),
        }
    }
}
