use time::OffsetDateTime;

use super::dto::{CarbonCreditResponseDTO, CreateCarbonCreditRequestDTO};
use crate::model::carbon_credit::{CarbonCredit, CarbonCreditStateEnum};

pub(super) fn from_create_request(request: CreateCarbonCreditRequestDTO) -> CarbonCredit {
    let now = OffsetDateTime::now_utc();

    CarbonCredit {
        id: Default::default(),
        created_date: now,
        last_modified: now,
        version: 1,
        project_id: request.project_id,
        amount_tonnes: request.amount_tonnes,
        verified_by: None,
        approved_by: None,
        token_id: None,
        ledger_tx_id: None,
        issued_at: None,
        state: CarbonCreditStateEnum::Pending,
    }
}

impl From<CarbonCredit> for CarbonCreditResponseDTO {
    fn from(value: CarbonCredit) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            version: value.version,
            project_id: value.project_id,
            amount_tonnes: value.amount_tonnes,
            verified_by: value.verified_by,
            approved_by: value.approved_by,
            token_id: value.token_id,
            ledger_tx_id: value.ledger_tx_id,
            issued_at: value.issued_at,
            state: value.state,
        }
    }
}
