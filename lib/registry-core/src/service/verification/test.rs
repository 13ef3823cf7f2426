use std::sync::Arc;

use shared_types::EntityId;

use super::VerificationService;
use super::dto::{VerificationActionFilterDTO, VerificationRequestDTO};
use crate::model::carbon_credit::CarbonCreditStateEnum;
use crate::model::field_data::{FieldDataKind, FieldDataStateEnum};
use crate::model::project::ProjectStateEnum;
use crate::model::user::{UserRole, UserStateEnum};
use crate::model::verification_action::{
    VerificationAction, VerificationActionType, VerificationEntityType,
};
use crate::repository::mock::carbon_credit_repository::MockCarbonCreditRepository;
use crate::repository::mock::field_data_repository::MockFieldDataRepository;
use crate::repository::mock::project_repository::MockProjectRepository;
use crate::repository::mock::user_repository::MockUserRepository;
use crate::repository::mock::verification_action_repository::MockVerificationActionRepository;
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError};
use crate::service::test_utilities::{
    generic_credit, generic_field_data, generic_project, generic_user,
};

#[derive(Default)]
struct Repositories {
    pub user_repository: MockUserRepository,
    pub project_repository: MockProjectRepository,
    pub field_data_repository: MockFieldDataRepository,
    pub carbon_credit_repository: MockCarbonCreditRepository,
    pub verification_action_repository: MockVerificationActionRepository,
}

fn setup_service(repositories: Repositories) -> VerificationService {
    VerificationService::new(
        Arc::new(repositories.user_repository),
        Arc::new(repositories.project_repository),
        Arc::new(repositories.field_data_repository),
        Arc::new(repositories.carbon_credit_repository),
        Arc::new(repositories.verification_action_repository),
    )
}

fn verifier_repository() -> MockUserRepository {
    let mut user_repository = MockUserRepository::default();
    user_repository
        .expect_get_user()
        .times(1)
        .returning(|_| Ok(Some(generic_user(3, UserRole::Verifier, UserStateEnum::Verified))));
    user_repository
}

fn project_request(action: VerificationActionType) -> VerificationRequestDTO {
    VerificationRequestDTO {
        action,
        entity_type: VerificationEntityType::Project,
        entity_id: EntityId::from(101),
        performed_by: 3i64.into(),
        remarks: Some("ok".to_string()),
    }
}

#[tokio::test]
async fn test_approve_pending_project_appends_single_action() {
    let mut project_repository = MockProjectRepository::default();
    project_repository
        .expect_get_project()
        .times(1)
        .returning(|_| Ok(Some(generic_project(101, ProjectStateEnum::PendingVerification))));
    project_repository
        .expect_update_project()
        .times(1)
        .withf(|update| update.state == Some(ProjectStateEnum::Approved))
        .returning(|_| Ok(()));

    let mut action_repository = MockVerificationActionRepository::default();
    action_repository
        .expect_create_verification_action()
        .times(1)
        .withf(|action: &VerificationAction| {
            action.action == VerificationActionType::Approve
                && action.entity_type == VerificationEntityType::Project
                && action.entity_id == EntityId::from(101)
        })
        .returning(|_| Ok(1.into()));

    let service = setup_service(Repositories {
        user_repository: verifier_repository(),
        project_repository,
        verification_action_repository: action_repository,
        ..Default::default()
    });

    let result = service
        .apply(project_request(VerificationActionType::Approve))
        .await
        .unwrap();

    assert_eq!(result.new_state, "Approved");
}

#[tokio::test]
async fn test_reapprove_approved_project_fails_without_mutation() {
    let mut project_repository = MockProjectRepository::default();
    project_repository
        .expect_get_project()
        .times(1)
        .returning(|_| Ok(Some(generic_project(101, ProjectStateEnum::Approved))));
    // no update_project and no create_verification_action expectations:
    // the second approve must not mutate anything

    let service = setup_service(Repositories {
        user_repository: verifier_repository(),
        project_repository,
        ..Default::default()
    });

    let result = service
        .apply(project_request(VerificationActionType::Approve))
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::BusinessLogic(
            BusinessLogicError::InvalidStateTransition { .. }
        ))
    ));
}

#[tokio::test]
async fn test_ngo_cannot_approve_project() {
    let mut user_repository = MockUserRepository::default();
    user_repository
        .expect_get_user()
        .times(1)
        .returning(|_| Ok(Some(generic_user(1, UserRole::Ngo, UserStateEnum::Verified))));

    let service = setup_service(Repositories {
        user_repository,
        ..Default::default()
    });

    let result = service
        .apply(project_request(VerificationActionType::Approve))
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::BusinessLogic(
            BusinessLogicError::UnauthorizedActor { .. }
        ))
    ));
}

#[tokio::test]
async fn test_unverified_verifier_cannot_act() {
    let mut user_repository = MockUserRepository::default();
    user_repository
        .expect_get_user()
        .times(1)
        .returning(|_| Ok(Some(generic_user(3, UserRole::Verifier, UserStateEnum::Pending))));

    let service = setup_service(Repositories {
        user_repository,
        ..Default::default()
    });

    let result = service
        .apply(project_request(VerificationActionType::Approve))
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::BusinessLogic(
            BusinessLogicError::PerformerNotVerified(_)
        ))
    ));
}

#[tokio::test]
async fn test_reject_field_data() {
    let mut field_data_repository = MockFieldDataRepository::default();
    field_data_repository.expect_get_field_data().times(1).returning(|_| {
        Ok(Some(generic_field_data(
            1001,
            FieldDataKind::Monitoring,
            FieldDataStateEnum::PendingVerification,
        )))
    });
    field_data_repository
        .expect_update_field_data()
        .times(1)
        .withf(|update| update.state == Some(FieldDataStateEnum::Rejected))
        .returning(|_| Ok(()));

    let mut action_repository = MockVerificationActionRepository::default();
    action_repository
        .expect_create_verification_action()
        .times(1)
        .returning(|_| Ok(2.into()));

    let service = setup_service(Repositories {
        user_repository: verifier_repository(),
        field_data_repository,
        verification_action_repository: action_repository,
        ..Default::default()
    });

    let result = service
        .apply(VerificationRequestDTO {
            action: VerificationActionType::Reject,
            entity_type: VerificationEntityType::FieldData,
            entity_id: EntityId::from(1001),
            performed_by: 3i64.into(),
            remarks: Some("images do not match the plot".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(result.new_state, "Rejected");
}

#[tokio::test]
async fn test_admin_approves_user_registration() {
    let mut user_repository = MockUserRepository::default();
    // performer lookup, then subject lookup
    user_repository
        .expect_get_user()
        .times(2)
        .returning(|id| {
            if *id == 4i64 {
                Ok(Some(generic_user(4, UserRole::Admin, UserStateEnum::Verified)))
            } else {
                Ok(Some(generic_user(7, UserRole::Ngo, UserStateEnum::Pending)))
            }
        });
    user_repository
        .expect_update_user_state()
        .times(1)
        .withf(|_, state| *state == UserStateEnum::Verified)
        .returning(|_, _| Ok(()));

    let mut action_repository = MockVerificationActionRepository::default();
    action_repository
        .expect_create_verification_action()
        .times(1)
        .returning(|_| Ok(3i64.into()));

    let service = setup_service(Repositories {
        user_repository,
        verification_action_repository: action_repository,
        ..Default::default()
    });

    let result = service
        .apply(VerificationRequestDTO {
            action: VerificationActionType::Approve,
            entity_type: VerificationEntityType::User,
            entity_id: EntityId::from(7),
            performed_by: 4.into(),
            remarks: None,
        })
        .await
        .unwrap();

    assert_eq!(result.new_state, "Verified");
}

#[tokio::test]
async fn test_verifier_cannot_approve_user() {
    let service = setup_service(Repositories {
        user_repository: verifier_repository(),
        ..Default::default()
    });

    let result = service
        .apply(VerificationRequestDTO {
            action: VerificationActionType::Approve,
            entity_type: VerificationEntityType::User,
            entity_id: EntityId::from(7),
            performed_by: 3i64.into(),
            remarks: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::BusinessLogic(
            BusinessLogicError::UnauthorizedActor { .. }
        ))
    ));
}

#[tokio::test]
async fn test_approve_credit_records_verifier() {
    let mut credit_repository = MockCarbonCreditRepository::default();
    credit_repository
        .expect_get_carbon_credit()
        .times(1)
        .returning(|_| Ok(Some(generic_credit(1, CarbonCreditStateEnum::Pending))));
    credit_repository
        .expect_update_carbon_credit()
        .times(1)
        .withf(|update| {
            update.state == Some(CarbonCreditStateEnum::Verified)
                && update.verified_by == Some(3i64.into())
        })
        .returning(|_| Ok(()));

    let mut action_repository = MockVerificationActionRepository::default();
    action_repository
        .expect_create_verification_action()
        .times(1)
        .returning(|_| Ok(4.into()));

    let service = setup_service(Repositories {
        user_repository: verifier_repository(),
        carbon_credit_repository: credit_repository,
        verification_action_repository: action_repository,
        ..Default::default()
    });

    let result = service
        .apply(VerificationRequestDTO {
            action: VerificationActionType::Approve,
            entity_type: VerificationEntityType::CarbonCredit,
            entity_id: EntityId::from(1),
            performed_by: 3i64.into(),
            remarks: None,
        })
        .await
        .unwrap();

    assert_eq!(result.new_state, "Verified");
}

#[tokio::test]
async fn test_reject_credit_is_illegal() {
    let mut credit_repository = MockCarbonCreditRepository::default();
    credit_repository
        .expect_get_carbon_credit()
        .times(1)
        .returning(|_| Ok(Some(generic_credit(1, CarbonCreditStateEnum::Pending))));

    let service = setup_service(Repositories {
        user_repository: verifier_repository(),
        carbon_credit_repository: credit_repository,
        ..Default::default()
    });

    let result = service
        .apply(VerificationRequestDTO {
            action: VerificationActionType::Reject,
            entity_type: VerificationEntityType::CarbonCredit,
            entity_id: EntityId::from(1),
            performed_by: 3i64.into(),
            remarks: None,
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
async fn test_apply_to_missing_project() {
    let mut project_repository = MockProjectRepository::default();
    project_repository.expect_get_project().times(1).returning(|_| Ok(None));

    let service = setup_service(Repositories {
        user_repository: verifier_repository(),
        project_repository,
        ..Default::default()
    });

    let result = service
        .apply(project_request(VerificationActionType::Approve))
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::EntityNotFound(EntityNotFoundError::Project(_)))
    ));
}

#[tokio::test]
async fn test_action_list_filtered_by_performer() {
    let mut action_repository = MockVerificationActionRepository::default();
    action_repository
        .expect_get_actions_by_performer()
        .times(1)
        .returning(|performer| {
            Ok(vec![VerificationAction {
                id: 1.into(),
                created_date: time::OffsetDateTime::now_utc(),
                action: VerificationActionType::Approve,
                entity_id: EntityId::from(101),
                entity_type: VerificationEntityType::Project,
                performed_by: *performer,
                remarks: None,
            }])
        });

    let service = setup_service(Repositories {
        verification_action_repository: action_repository,
        ..Default::default()
    });

    let result = service
        .get_verification_action_list(VerificationActionFilterDTO {
            performed_by: Some(3i64.into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].performed_by, 3i64);
}
