use shared_types::UserId;
use time::OffsetDateTime;

use crate::model::user::{UserRole, UserStateEnum};

#[derive(Clone, Debug)]
pub struct CreateUserRequestDTO {
    pub name: String,
    pub organisation: String,
    pub role: UserRole,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub jurisdiction: Option<String>,
}

#[derive(Clone, Debug)]
pub struct UserResponseDTO {
    pub id: UserId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub name: String,
    pub organisation: String,
    pub role: UserRole,
    pub state: UserStateEnum,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub jurisdiction: Option<String>,
}
