use mockall::*;
use shared_types::ProjectId;

use super::{LedgerError, LedgerTransaction};

#[derive(Default)]
struct LedgerClient;

mock! {
    pub LedgerClient {
        pub fn issue(
            &self,
            project_id: ProjectId,
            amount_tonnes: f64,
        ) -> Result<LedgerTransaction, LedgerError>;
    }
}

#[async_trait::async_trait]
impl super::LedgerClient for MockLedgerClient {
    async fn issue(
        &self,
        project_id: ProjectId,
        amount_tonnes: f64,
    ) -> Result<LedgerTransaction, LedgerError> {
        self.issue(project_id, amount_tonnes)
    }
}
