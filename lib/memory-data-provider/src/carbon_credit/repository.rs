use registry_core::model::carbon_credit::{CarbonCredit, UpdateCarbonCreditRequest};
use registry_core::repository::carbon_credit_repository::CarbonCreditRepository;
use registry_core::repository::error::DataLayerError;
use shared_types::{CarbonCreditId, ProjectId};
use time::OffsetDateTime;

use super::CarbonCreditProvider;
use crate::db::next_id;

#[async_trait::async_trait]
impl CarbonCreditRepository for CarbonCreditProvider {
    async fn create_carbon_credit(
        &self,
        request: CarbonCredit,
    ) -> Result<CarbonCreditId, DataLayerError> {
        let mut credits = self.storage.carbon_credits.write().await;

        let id = CarbonCreditId::from(next_id(&credits));
        credits.insert(id, CarbonCredit { id, ..request });

        Ok(id)
    }

    async fn get_carbon_credit(
        &self,
        id: &CarbonCreditId,
    ) -> Result<Option<CarbonCredit>, DataLayerError> {
        Ok(self.storage.carbon_credits.read().await.get(id).cloned())
    }

    async fn get_carbon_credit_list(&self) -> Result<Vec<CarbonCredit>, DataLayerError> {
        Ok(self
            .storage
            .carbon_credits
            .read()
            .await
            .values()
            .cloned()
            .collect())
    }

    async fn get_carbon_credits_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<CarbonCredit>, DataLayerError> {
        Ok(self
            .storage
            .carbon_credits
            .read()
            .await
            .values()
            .filter(|credit| credit.project_id == *project_id)
            .cloned()
            .collect())
    }

    async fn update_carbon_credit(
        &self,
        request: UpdateCarbonCreditRequest,
    ) -> Result<(), DataLayerError> {
        let mut credits = self.storage.carbon_credits.write().await;
        let credit = credits
            .get_mut(&request.id)
            .ok_or(DataLayerError::RecordNotFound)?;

        if credit.version != request.version {
            return Err(DataLayerError::StaleVersion {
                current: credit.version,
                observed: request.version,
            });
        }

        if let Some(state) = request.state {
            credit.state = state;
        }
        if let Some(verified_by) = request.verified_by {
            credit.verified_by = Some(verified_by);
        }
        if let Some(approved_by) = request.approved_by {
            credit.approved_by = Some(approved_by);
        }
        if let Some(token_id) = request.token_id {
            credit.token_id = Some(token_id);
        }
        if let Some(ledger_tx_id) = request.ledger_tx_id {
            credit.ledger_tx_id = Some(ledger_tx_id);
        }
        if let Some(issued_at) = request.issued_at {
            credit.issued_at = Some(issued_at);
        }

        credit.version += 1;
        credit.last_modified = OffsetDateTime::now_utc();

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use registry_core::model::carbon_credit::CarbonCreditStateEnum;
    use shared_types::UserId;

    use super::*;
    use crate::test_utilities::test_credit;

    #[tokio::test]
    async fn test_issuance_fields_are_applied_together() {
        let provider = CarbonCreditProvider {
            storage: Arc::new(Default::default()),
        };

        let id = provider
            .create_carbon_credit(test_credit(ProjectId::from(101), CarbonCreditStateEnum::Verified))
            .await
            .unwrap();

        provider
            .update_carbon_credit(UpdateCarbonCreditRequest {
                id,
                version: 1,
                state: Some(CarbonCreditStateEnum::Issued),
                approved_by: Some(UserId::from(4)),
                token_id: Some("BCR-101-1".to_string()),
                ledger_tx_id: Some("0xabc".to_string()),
                issued_at: Some(OffsetDateTime::now_utc()),
                ..Default::default()
            })
            .await
            .unwrap();

        let credit = provider.get_carbon_credit(&id).await.unwrap().unwrap();
        assert_eq!(credit.state, CarbonCreditStateEnum::Issued);
        assert_eq!(credit.approved_by, Some(UserId::from(4)));
        assert!(credit.issued_at.is_some());
        assert_eq!(credit.version, 2);
    }
}
