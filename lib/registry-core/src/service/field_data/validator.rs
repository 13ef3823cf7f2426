use super::dto::CreateFieldDataRequestDTO;
use crate::service::error::ValidationError;

pub(crate) fn validate_upload_request(
    request: &CreateFieldDataRequestDTO,
) -> Result<(), ValidationError> {
    if request.area_covered_hectares <= 0.0 {
        return Err(ValidationError::NonPositiveValue("areaCoveredHectares"));
    }
    if let Some(rate) = request.survival_rate_pct {
        if !(0.0..=100.0).contains(&rate) {
            return Err(ValidationError::NonPositiveValue("survivalRatePct"));
        }
    }

    Ok(())
}
