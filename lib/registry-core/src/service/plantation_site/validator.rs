use super::dto::CreatePlantationSiteRequestDTO;
use crate::service::error::ValidationError;

pub(crate) fn validate_create_request(
    request: &CreatePlantationSiteRequestDTO,
) -> Result<(), ValidationError> {
    if request.name.trim().is_empty() {
        return Err(ValidationError::MissingField("name"));
    }
    if request.area_hectares <= 0.0 {
        return Err(ValidationError::NonPositiveValue("areaHectares"));
    }

    Ok(())
}
