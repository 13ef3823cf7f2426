use crate::model::user::{User, UserRole, UserStateEnum};
use crate::service::error::{BusinessLogicError, ServiceError};

pub(crate) fn throw_if_user_not_verified(user: &User) -> Result<(), ServiceError> {
    if user.state != UserStateEnum::Verified {
        return Err(BusinessLogicError::PerformerNotVerified(user.id).into());
    }
    Ok(())
}

pub(crate) fn throw_if_user_role_not_eq(user: &User, role: UserRole) -> Result<(), ServiceError> {
    if user.role != role {
        return Err(BusinessLogicError::UnexpectedUserRole {
            user: user.id,
            expected: role,
        }
        .into());
    }
    Ok(())
}
