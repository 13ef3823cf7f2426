use one_dto_mapper::{From, Into};
use registry_core::service::user::dto::UserResponseDTO;
use serde::{Deserialize, Serialize};
use shared_types::UserId;
use time::OffsetDateTime;
use utoipa::ToSchema;
use validator::Validate;

use crate::serialize::front_time;

#[derive(Clone, Debug, Deserialize, Into, Validate, ToSchema)]
#[into("registry_core::service::user::dto::CreateUserRequestDTO")]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequestRestDTO {
    pub name: String,
    pub organisation: String,
    pub role: UserRoleRestEnum,
    #[validate(email)]
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub jurisdiction: Option<String>,
}

#[derive(Clone, Debug, Serialize, From, ToSchema)]
#[from(UserResponseDTO)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseRestDTO {
    pub id: UserId,
    #[serde(serialize_with = "front_time")]
    #[schema(value_type = String, example = "2023-06-09T14:19:57.000Z")]
    pub created_date: OffsetDateTime,
    #[serde(serialize_with = "front_time")]
    #[schema(value_type = String, example = "2023-06-09T14:19:57.000Z")]
    pub last_modified: OffsetDateTime,
    pub name: String,
    pub organisation: String,
    pub role: UserRoleRestEnum,
    pub state: UserStateRestEnum,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub jurisdiction: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema, Into, From)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from("registry_core::model::user::UserRole")]
#[into("registry_core::model::user::UserRole")]
pub enum UserRoleRestEnum {
    Ngo,
    Panchayat,
    Verifier,
    Admin,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema, From)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from("registry_core::model::user::UserStateEnum")]
pub enum UserStateRestEnum {
    Pending,
    Verified,
    Rejected,
}
