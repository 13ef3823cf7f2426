use shared_types::UserId;
use strum::Display;
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct User {
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

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum UserRole {
    Ngo,
    Panchayat,
    Verifier,
    Admin,
}

/// Registration creates `Pending`; an admin decision moves it to `Verified`
/// or `Rejected`. Only verified users may act on the registry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum UserStateEnum {
    Pending,
    Verified,
    Rejected,
}
