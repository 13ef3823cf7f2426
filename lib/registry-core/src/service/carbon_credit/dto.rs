use shared_types::{CarbonCreditId, ProjectId, UserId};
use time::OffsetDateTime;

use crate::model::carbon_credit::CarbonCreditStateEnum;

#[derive(Clone, Debug)]
pub struct CreateCarbonCreditRequestDTO {
    pub project_id: ProjectId,
    pub amount_tonnes: f64,
}

#[derive(Clone, Debug)]
pub struct IssueCarbonCreditRequestDTO {
    pub credit_id: CarbonCreditId,
    /// Admin performing the registry notification.
    pub requested_by: UserId,
}

#[derive(Clone, Debug)]
pub struct IssueCarbonCreditResponseDTO {
    pub credit_id: CarbonCreditId,
    pub ledger_tx_id: String,
    pub token_id: String,
}

#[derive(Clone, Debug)]
pub struct CarbonCreditResponseDTO {
    pub id: CarbonCreditId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub version: u64,
    pub project_id: ProjectId,
    pub amount_tonnes: f64,
    pub verified_by: Option<UserId>,
    pub approved_by: Option<UserId>,
    pub token_id: Option<String>,
    pub ledger_tx_id: Option<String>,
    pub issued_at: Option<OffsetDateTime>,
    pub state: CarbonCreditStateEnum,
}
