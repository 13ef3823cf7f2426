use mockall::*;
use shared_types::{CarbonCreditId, ProjectId};

use crate::model::carbon_credit::{CarbonCredit, UpdateCarbonCreditRequest};
use crate::repository::error::DataLayerError;

#[derive(Default)]
struct CarbonCreditRepository;

mock! {
    pub CarbonCreditRepository {
        pub fn create_carbon_credit(
            &self,
            request: CarbonCredit,
        ) -> Result<CarbonCreditId, DataLayerError>;

        pub fn get_carbon_credit(
            &self,
            id: &CarbonCreditId,
        ) -> Result<Option<CarbonCredit>, DataLayerError>;

        pub fn get_carbon_credit_list(&self) -> Result<Vec<CarbonCredit>, DataLayerError>;

        pub fn get_carbon_credits_by_project(
            &self,
            project_id: &ProjectId,
        ) -> Result<Vec<CarbonCredit>, DataLayerError>;

        pub fn update_carbon_credit(
            &self,
            request: UpdateCarbonCreditRequest,
        ) -> Result<(), DataLayerError>;
    }
}

#[async_trait::async_trait]
impl crate::repository::carbon_credit_repository::CarbonCreditRepository
    for MockCarbonCreditRepository
{
    async fn create_carbon_credit(
        &self,
        request: CarbonCredit,
    ) -> Result<CarbonCreditId, DataLayerError> {
        self.create_carbon_credit(request)
    }

    async fn get_carbon_credit(
        &self,
        id: &CarbonCreditId,
    ) -> Result<Option<CarbonCredit>, DataLayerError> {
        self.get_carbon_credit(id)
    }

    async fn get_carbon_credit_list(&self) -> Result<Vec<CarbonCredit>, DataLayerError> {
        self.get_carbon_credit_list()
    }

    async fn get_carbon_credits_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<CarbonCredit>, DataLayerError> {
        self.get_carbon_credits_by_project(project_id)
    }

    async fn update_carbon_credit(
        &self,
        request: UpdateCarbonCreditRequest,
    ) -> Result<(), DataLayerError> {
        self.update_carbon_credit(request)
    }
}
