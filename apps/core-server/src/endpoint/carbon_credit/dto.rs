use one_dto_mapper::{From, Into};
use registry_core::service::carbon_credit::dto::{
    CarbonCreditResponseDTO, IssueCarbonCreditResponseDTO,
};
use serde::{Deserialize, Serialize};
use shared_types::{CarbonCreditId, ProjectId, UserId};
use time::OffsetDateTime;
use utoipa::ToSchema;
use validator::Validate;

use crate::serialize::{front_time, front_time_option};

#[derive(Clone, Debug, Deserialize, Into, Validate, ToSchema)]
#[into("registry_core::service::carbon_credit::dto::CreateCarbonCreditRequestDTO")]
#[serde(rename_all = "camelCase")]
pub struct CreateCarbonCreditRequestRestDTO {
    pub project_id: ProjectId,
    #[validate(range(min = 0.01))]
    pub amount_tonnes: f64,
}

/// Body of the issuance call; the credit id comes from the path.
#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueCarbonCreditRequestRestDTO {
    pub requested_by: UserId,
}

#[derive(Clone, Debug, Serialize, From, ToSchema)]
#[from(IssueCarbonCreditResponseDTO)]
#[serde(rename_all = "camelCase")]
pub struct IssueCarbonCreditResponseRestDTO {
    pub credit_id: CarbonCreditId,
    pub ledger_tx_id: String,
    pub token_id: String,
}

#[derive(Clone, Debug, Serialize, From, ToSchema)]
#[from(CarbonCreditResponseDTO)]
#[serde(rename_all = "camelCase")]
pub struct CarbonCreditResponseRestDTO {
    pub id: CarbonCreditId,
    #[serde(serialize_with = "front_time")]
    #[schema(value_type = String, example = "2023-06-09T14:19:57.000Z")]
    pub created_date: OffsetDateTime,
    #[serde(serialize_with = "front_time")]
    #[schema(value_type = String, example = "2023-06-09T14:19:57.000Z")]
    pub last_modified: OffsetDateTime,
    pub version: u64,
    pub project_id: ProjectId,
    pub amount_tonnes: f64,
    pub verified_by: Option<UserId>,
    pub approved_by: Option<UserId>,
    pub token_id: Option<String>,
    pub ledger_tx_id: Option<String>,
    #[serde(serialize_with = "front_time_option")]
    #[schema(value_type = Option<String>, example = "2023-06-09T14:19:57.000Z")]
    pub issued_at: Option<OffsetDateTime>,
    pub state: CarbonCreditStateRestEnum,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema, From)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from("registry_core::model::carbon_credit::CarbonCreditStateEnum")]
pub enum CarbonCreditStateRestEnum {
    Pending,
    Verified,
    Issued,
}
