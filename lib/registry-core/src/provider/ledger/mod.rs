//! Outbound carbon-registry ledger capability. The shipped implementation is
//! a local simulation; a production deployment backs this trait with the
//! national registry's API client.

use shared_types::ProjectId;
use thiserror::Error;

pub mod simulated;

#[cfg(test)]
pub mod mock;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerTransaction {
    pub tx_id: String,
    pub token_id: String,
}

#[derive(Debug, Error)]
pub enum LedgerError {
    /// Transient failure; callers retry with backoff.
    #[error("Ledger unavailable: {0}")]
    Unavailable(String),

    /// Permanent refusal; retrying cannot help.
    #[error("Issuance rejected by ledger: {0}")]
    Rejected(String),
}

#[async_trait::async_trait]
pub trait LedgerClient {
    /// Registers issued credits on the ledger and returns the transaction
    /// reference. Must be idempotent on the ledger side per transaction id.
    async fn issue(
        &self,
        project_id: ProjectId,
        amount_tonnes: f64,
    ) -> Result<LedgerTransaction, LedgerError>;
}
