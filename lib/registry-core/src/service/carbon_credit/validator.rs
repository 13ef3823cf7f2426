use super::dto::CreateCarbonCreditRequestDTO;
use crate::service::error::ValidationError;

pub(crate) fn validate_generate_request(
    request: &CreateCarbonCreditRequestDTO,
) -> Result<(), ValidationError> {
    if request.amount_tonnes <= 0.0 {
        return Err(ValidationError::NonPositiveValue("amountTonnes"));
    }

    Ok(())
}
