use std::sync::Arc;

use shared_types::CarbonCreditId;

use super::CarbonCreditService;
use super::dto::{CreateCarbonCreditRequestDTO, IssueCarbonCreditRequestDTO};
use crate::config::core_config::CoreConfig;
use crate::model::carbon_credit::CarbonCreditStateEnum;
use crate::model::field_data::{FieldDataKind, FieldDataStateEnum};
use crate::model::project::ProjectStateEnum;
use crate::model::user::{UserRole, UserStateEnum};
use crate::provider::ledger::mock::MockLedgerClient;
use crate::provider::ledger::{LedgerError, LedgerTransaction};
use crate::repository::mock::carbon_credit_repository::MockCarbonCreditRepository;
use crate::repository::mock::field_data_repository::MockFieldDataRepository;
use crate::repository::mock::project_repository::MockProjectRepository;
use crate::repository::mock::user_repository::MockUserRepository;
use crate::service::error::{BusinessLogicError, ServiceError};
use crate::service::test_utilities::{
    generic_credit, generic_field_data, generic_project, generic_user,
};

#[derive(Default)]
struct Repositories {
    pub carbon_credit_repository: MockCarbonCreditRepository,
    pub project_repository: MockProjectRepository,
    pub field_data_repository: MockFieldDataRepository,
    pub user_repository: MockUserRepository,
    pub ledger_client: MockLedgerClient,
}

fn setup_service(repositories: Repositories) -> CarbonCreditService {
    // keep retries fast in tests
    let config = CoreConfig {
        ledger: crate::config::core_config::LedgerConfig {
            issue_retry_delay_ms: 0,
            ..Default::default()
        },
    };

    CarbonCreditService::new(
        Arc::new(repositories.carbon_credit_repository),
        Arc::new(repositories.project_repository),
        Arc::new(repositories.field_data_repository),
        Arc::new(repositories.user_repository),
        Arc::new(repositories.ledger_client),
        Arc::new(config),
    )
}

fn generic_transaction() -> LedgerTransaction {
    LedgerTransaction {
        tx_id: "0xabc123".to_string(),
        token_id: "BCR-101-1".to_string(),
    }
}

#[tokio::test]
async fn test_generate_credits_requires_monitoring_project() {
    let mut project_repository = MockProjectRepository::default();
    project_repository
        .expect_get_project()
        .times(1)
        .returning(|_| Ok(Some(generic_project(101, ProjectStateEnum::Approved))));

    let service = setup_service(Repositories {
        project_repository,
        ..Default::default()
    });

    let result = service
        .generate_carbon_credits(CreateCarbonCreditRequestDTO {
            project_id: 101.into(),
            amount_tonnes: 250.0,
        })
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::BusinessLogic(
            BusinessLogicError::InvalidStateTransition { .. }
        ))
    ));
}

#[tokio::test]
async fn test_generate_credits_requires_verified_field_data() {
    let mut project_repository = MockProjectRepository::default();
    project_repository
        .expect_get_project()
        .times(1)
        .returning(|_| Ok(Some(generic_project(101, ProjectStateEnum::Monitoring))));

    let mut field_data_repository = MockFieldDataRepository::default();
    field_data_repository
        .expect_get_field_data_by_project()
        .times(1)
        .returning(|_| {
            Ok(vec![generic_field_data(
                1001,
                FieldDataKind::Monitoring,
                FieldDataStateEnum::PendingVerification,
            )])
        });

    let service = setup_service(Repositories {
        project_repository,
        field_data_repository,
        ..Default::default()
    });

    let result = service
        .generate_carbon_credits(CreateCarbonCreditRequestDTO {
            project_id: 101.into(),
            amount_tonnes: 250.0,
        })
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::BusinessLogic(
            BusinessLogicError::MissingVerifiedFieldData(_)
        ))
    ));
}

#[tokio::test]
async fn test_generate_credits_success() {
    let mut project_repository = MockProjectRepository::default();
    project_repository
        .expect_get_project()
        .times(1)
        .returning(|_| Ok(Some(generic_project(101, ProjectStateEnum::Monitoring))));

    let mut field_data_repository = MockFieldDataRepository::default();
    field_data_repository
        .expect_get_field_data_by_project()
        .times(1)
        .returning(|_| {
            Ok(vec![generic_field_data(
                1001,
                FieldDataKind::Monitoring,
                FieldDataStateEnum::Verified,
            )])
        });

    let mut credit_repository = MockCarbonCreditRepository::default();
    credit_repository
        .expect_create_carbon_credit()
        .times(1)
        .withf(|credit| credit.state == CarbonCreditStateEnum::Pending)
        .returning(|_| Ok(CarbonCreditId::from(1)));

    let service = setup_service(Repositories {
        carbon_credit_repository: credit_repository,
        project_repository,
        field_data_repository,
        ..Default::default()
    });

    let result = service
        .generate_carbon_credits(CreateCarbonCreditRequestDTO {
            project_id: 101.into(),
            amount_tonnes: 250.0,
        })
        .await;

    assert_eq!(result.unwrap(), CarbonCreditId::from(1));
}

fn issuing_admin_repository() -> MockUserRepository {
    let mut user_repository = MockUserRepository::default();
    user_repository
        .expect_get_user()
        .times(1)
        .returning(|_| Ok(Some(generic_user(4, UserRole::Admin, UserStateEnum::Verified))));
    user_repository
}

#[tokio::test]
async fn test_issue_credit_success_updates_credit_and_project() {
    let mut credit_repository = MockCarbonCreditRepository::default();
    credit_repository
        .expect_get_carbon_credit()
        .times(1)
        .returning(|_| Ok(Some(generic_credit(1, CarbonCreditStateEnum::Verified))));
    credit_repository
        .expect_update_carbon_credit()
        .times(1)
        .withf(|update| {
            update.state == Some(CarbonCreditStateEnum::Issued)
                && update.ledger_tx_id.as_deref() == Some("0xabc123")
                && update.issued_at.is_some()
        })
        .returning(|_| Ok(()));

    let mut project_repository = MockProjectRepository::default();
    project_repository
        .expect_get_project()
        .times(1)
        .returning(|_| Ok(Some(generic_project(101, ProjectStateEnum::Monitoring))));
    project_repository
        .expect_update_project()
        .times(1)
        .withf(|update| update.carbon_credits_issued == Some(250.0))
        .returning(|_| Ok(()));

    let mut ledger_client = MockLedgerClient::default();
    ledger_client
        .expect_issue()
        .times(1)
        .returning(|_, _| Ok(generic_transaction()));

    let service = setup_service(Repositories {
        carbon_credit_repository: credit_repository,
        project_repository,
        user_repository: issuing_admin_repository(),
        ledger_client,
        ..Default::default()
    });

    let result = service
        .issue_carbon_credit(IssueCarbonCreditRequestDTO {
            credit_id: 1.into(),
            requested_by: 4.into(),
        })
        .await
        .unwrap();

    assert_eq!(result.ledger_tx_id, "0xabc123");
}

#[tokio::test]
async fn test_issue_credit_retries_transient_ledger_failures() {
    let mut credit_repository = MockCarbonCreditRepository::default();
    credit_repository
        .expect_get_carbon_credit()
        .times(1)
        .returning(|_| Ok(Some(generic_credit(1, CarbonCreditStateEnum::Verified))));
    credit_repository
        .expect_update_carbon_credit()
        .times(1)
        .returning(|_| Ok(()));

    let mut project_repository = MockProjectRepository::default();
    project_repository
        .expect_get_project()
        .times(1)
        .returning(|_| Ok(Some(generic_project(101, ProjectStateEnum::Monitoring))));
    project_repository
        .expect_update_project()
        .times(1)
        .returning(|_| Ok(()));

    let mut ledger_client = MockLedgerClient::default();
    let mut calls = 0u32;
    ledger_client.expect_issue().times(3).returning(move |_, _| {
        calls += 1;
        if calls < 3 {
            Err(LedgerError::Unavailable("registry timeout".to_string()))
        } else {
            Ok(generic_transaction())
        }
    });

    let service = setup_service(Repositories {
        carbon_credit_repository: credit_repository,
        project_repository,
        user_repository: issuing_admin_repository(),
        ledger_client,
        ..Default::default()
    });

    let result = service
        .issue_carbon_credit(IssueCarbonCreditRequestDTO {
            credit_id: 1.into(),
            requested_by: 4.into(),
        })
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_issue_credit_ledger_down_leaves_credit_verified() {
    let mut credit_repository = MockCarbonCreditRepository::default();
    credit_repository
        .expect_get_carbon_credit()
        .times(1)
        .returning(|_| Ok(Some(generic_credit(1, CarbonCreditStateEnum::Verified))));
    // no update expectation: the credit must stay Verified

    let mut project_repository = MockProjectRepository::default();
    project_repository
        .expect_get_project()
        .times(1)
        .returning(|_| Ok(Some(generic_project(101, ProjectStateEnum::Monitoring))));

    let mut ledger_client = MockLedgerClient::default();
    ledger_client
        .expect_issue()
        .times(3)
        .returning(|_, _| Err(LedgerError::Unavailable("registry timeout".to_string())));

    let service = setup_service(Repositories {
        carbon_credit_repository: credit_repository,
        project_repository,
        user_repository: issuing_admin_repository(),
        ledger_client,
        ..Default::default()
    });

    let result = service
        .issue_carbon_credit(IssueCarbonCreditRequestDTO {
            credit_id: 1.into(),
            requested_by: 4.into(),
        })
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::Ledger(LedgerError::Unavailable(_)))
    ));
}

#[tokio::test]
async fn test_issue_credit_requires_verified_state() {
    let mut credit_repository = MockCarbonCreditRepository::default();
    credit_repository
        .expect_get_carbon_credit()
        .times(1)
        .returning(|_| Ok(Some(generic_credit(1, CarbonCreditStateEnum::Pending))));

    let service = setup_service(Repositories {
        carbon_credit_repository: credit_repository,
        user_repository: issuing_admin_repository(),
        ..Default::default()
    });

    let result = service
        .issue_carbon_credit(IssueCarbonCreditRequestDTO {
            credit_id: 1.into(),
            requested_by: 4.into(),
        })
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::BusinessLogic(
            BusinessLogicError::InvalidStateTransition { .. }
        ))
    ));
}

#[tokio::test]
async fn test_issue_credit_requires_admin() {
    let mut user_repository = MockUserRepository::default();
    user_repository
        .expect_get_user()
        .times(1)
        .returning(|_| Ok(Some(generic_user(3, UserRole::Verifier, UserStateEnum::Verified))));

    let service = setup_service(Repositories {
        user_repository,
        ..Default::default()
    });

    let result = service
        .issue_carbon_credit(IssueCarbonCreditRequestDTO {
            credit_id: 1.into(),
            requested_by: 3.into(),
        })
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::BusinessLogic(
            BusinessLogicError::UnexpectedUserRole { .. }
        ))
    ));
}
