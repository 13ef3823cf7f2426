use shared_types::{CarbonCreditId, ProjectId};

use super::error::DataLayerError;
use crate::model::carbon_credit::{CarbonCredit, UpdateCarbonCreditRequest};

#[async_trait::async_trait]
pub trait CarbonCreditRepository {
    async fn create_carbon_credit(
        &self,
        request: CarbonCredit,
    ) -> Result<CarbonCreditId, DataLayerError>;

    async fn get_carbon_credit(
        &self,
        id: &CarbonCreditId,
    ) -> Result<Option<CarbonCredit>, DataLayerError>;

    async fn get_carbon_credit_list(&self) -> Result<Vec<CarbonCredit>, DataLayerError>;

    async fn get_carbon_credits_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<CarbonCredit>, DataLayerError>;

    async fn update_carbon_credit(
        &self,
        request: UpdateCarbonCreditRequest,
    ) -> Result<(), DataLayerError>;
}
