use super::dto::CreateUserRequestDTO;
use crate::service::error::ValidationError;

pub(crate) fn validate_register_request(
    request: &CreateUserRequestDTO,
) -> Result<(), ValidationError> {
    if request.name.trim().is_empty() {
        return Err(ValidationError::MissingField("name"));
    }
    if request.organisation.trim().is_empty() {
        return Err(ValidationError::MissingField("organisation"));
    }
    validate_email(&request.contact_email)?;

    Ok(())
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidEmail(email.to_string());

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.contains('@') {
        return Err(invalid());
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("ngo@example.org").is_ok());
        assert!(validate_email("ngo.example.org").is_err());
        assert!(validate_email("@example.org").is_err());
        assert!(validate_email("ngo@").is_err());
        assert!(validate_email("ngo@example").is_err());
    }
}
