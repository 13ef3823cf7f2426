use shared_types::{CarbonCreditId, ProjectId, UserId};
use strum::Display;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq)]
pub struct CarbonCredit {
    pub id: CarbonCreditId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub version: u64,
    pub project_id: ProjectId,
    pub amount_tonnes: f64,
    /// Verifier who approved the credit batch.
    pub verified_by: Option<UserId>,
    /// Admin who triggered issuance on the ledger.
    pub approved_by: Option<UserId>,
    pub token_id: Option<String>,
    pub ledger_tx_id: Option<String>,
    pub issued_at: Option<OffsetDateTime>,
    pub state: CarbonCreditStateEnum,
}

/// Credits have no rejected state; rejection happens upstream on the field
/// data or the project itself.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum CarbonCreditStateEnum {
    Pending,
    Verified,
    Issued,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateCarbonCreditRequest {
    pub id: CarbonCreditId,
    pub version: u64,
    pub state: Option<CarbonCreditStateEnum>,
    pub verified_by: Option<UserId>,
    pub approved_by: Option<UserId>,
    pub token_id: Option<String>,
    pub ledger_tx_id: Option<String>,
    pub issued_at: Option<OffsetDateTime>,
}
