use one_dto_mapper::{From, Into};
use registry_core::service::verification::dto::{
    VerificationActionResponseDTO, VerificationResponseDTO,
};
use serde::{Deserialize, Serialize};
use shared_types::{EntityId, UserId, VerificationActionId};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

use crate::serialize::front_time;

#[derive(Clone, Debug, Deserialize, Into, ToSchema)]
#[into("registry_core::service::verification::dto::VerificationRequestDTO")]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequestRestDTO {
    pub action: VerificationActionTypeRestEnum,
    pub entity_type: VerificationEntityTypeRestEnum,
    pub entity_id: EntityId,
    pub performed_by: UserId,
    pub remarks: Option<String>,
}

#[derive(Clone, Debug, Serialize, From, ToSchema)]
#[from(VerificationResponseDTO)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResponseRestDTO {
    pub action_id: VerificationActionId,
    pub action: VerificationActionTypeRestEnum,
    pub entity_type: VerificationEntityTypeRestEnum,
    pub entity_id: EntityId,
    pub new_state: String,
    pub performed_by: UserId,
    #[serde(serialize_with = "front_time")]
    #[schema(value_type = String, example = "2023-06-09T14:19:57.000Z")]
    pub created_date: OffsetDateTime,
}

#[derive(Clone, Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct VerificationActionQueryRestDTO {
    pub performed_by: Option<UserId>,
    pub entity_type: Option<VerificationEntityTypeRestEnum>,
    pub entity_id: Option<EntityId>,
}

#[derive(Clone, Debug, Serialize, From, ToSchema)]
#[from(VerificationActionResponseDTO)]
#[serde(rename_all = "camelCase")]
pub struct VerificationActionResponseRestDTO {
    pub id: VerificationActionId,
    #[serde(serialize_with = "front_time")]
    #[schema(value_type = String, example = "2023-06-09T14:19:57.000Z")]
    pub created_date: OffsetDateTime,
    pub action: VerificationActionTypeRestEnum,
    pub entity_type: VerificationEntityTypeRestEnum,
    pub entity_id: EntityId,
    pub performed_by: UserId,
    pub remarks: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema, From, Into)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from("registry_core::model::verification_action::VerificationActionType")]
#[into("registry_core::model::verification_action::VerificationActionType")]
pub enum VerificationActionTypeRestEnum {
    Approve,
    Reject,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema, From, Into)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from("registry_core::model::verification_action::VerificationEntityType")]
#[into("registry_core::model::verification_action::VerificationEntityType")]
pub enum VerificationEntityTypeRestEnum {
    User,
    Project,
    FieldData,
    CarbonCredit,
}
