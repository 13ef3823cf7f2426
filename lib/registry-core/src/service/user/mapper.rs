use time::OffsetDateTime;

use super::dto::{CreateUserRequestDTO, UserResponseDTO};
use crate::model::user::{User, UserStateEnum};

pub(super) fn from_create_request(request: CreateUserRequestDTO) -> User {
    let now = OffsetDateTime::now_utc();

    User {
        // assigned by the data provider
        id: Default::default(),
        created_date: now,
        last_modified: now,
        name: request.name,
        organisation: request.organisation,
        role: request.role,
        state: UserStateEnum::Pending,
        contact_email: request.contact_email,
        contact_phone: request.contact_phone,
        jurisdiction: request.jurisdiction,
    }
}

impl From<User> for UserResponseDTO {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            name: value.name,
            organisation: value.organisation,
            role: value.role,
            state: value.state,
            contact_email: value.contact_email,
            contact_phone: value.contact_phone,
            jurisdiction: value.jurisdiction,
        }
    }
}
