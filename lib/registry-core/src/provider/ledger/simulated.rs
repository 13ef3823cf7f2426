use shared_types::ProjectId;
use uuid::Uuid;

use super::{LedgerClient, LedgerError, LedgerTransaction};

/// In-process stand-in for the national carbon registry. Always succeeds and
/// fabricates transaction references.
#[derive(Default)]
pub struct SimulatedLedger;

#[async_trait::async_trait]
impl LedgerClient for SimulatedLedger {
    async fn issue(
        &self,
        project_id: ProjectId,
        _amount_tonnes: f64,
    ) -> Result<LedgerTransaction, LedgerError> {
        Ok(LedgerTransaction {
            tx_id: format!("0x{}", Uuid::new_v4().simple()),
            token_id: format!("BCR-{project_id}-{}", Uuid::new_v4().simple()),
        })
    }
}
