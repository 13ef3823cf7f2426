//! Single authoritative transition table for every status-bearing entity.
//!
//! Services never assign a target state themselves; they ask this module for
//! the successor of (current state, action) and treat `None` as an illegal
//! transition. Re-applying a decision to an entity that already left the
//! expected source state therefore fails instead of silently succeeding.

use crate::model::carbon_credit::CarbonCreditStateEnum;
use crate::model::field_data::FieldDataStateEnum;
use crate::model::plantation_site::PlantationSiteStateEnum;
use crate::model::project::ProjectStateEnum;
use crate::model::user::{UserRole, UserStateEnum};
use crate::model::verification_action::{VerificationActionType, VerificationEntityType};

/// Commands that advance a project along the forward-only chain outside of
/// verifier decisions.
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display)]
pub enum ProjectCommand {
    Submit,
    UploadBaseline,
    StartPlantation,
    RecordMonitoring,
    Complete,
}

/// Role allowed to approve or reject the given entity type.
pub fn required_role(entity_type: VerificationEntityType) -> UserRole {
    match entity_type {
        VerificationEntityType::User => UserRole::Admin,
        VerificationEntityType::Project
        | VerificationEntityType::FieldData
        | VerificationEntityType::CarbonCredit => UserRole::Verifier,
    }
}

pub fn user_decision(
    current: UserStateEnum,
    action: VerificationActionType,
) -> Option<UserStateEnum> {
    match (current, action) {
        (UserStateEnum::Pending, VerificationActionType::Approve) => Some(UserStateEnum::Verified),
        (UserStateEnum::Pending, VerificationActionType::Reject) => Some(UserStateEnum::Rejected),
        _ => None,
    }
}

pub fn project_decision(
    current: ProjectStateEnum,
    action: VerificationActionType,
) -> Option<ProjectStateEnum> {
    match (current, action) {
        (ProjectStateEnum::PendingVerification, VerificationActionType::Approve) => {
            Some(ProjectStateEnum::Approved)
        }
        (ProjectStateEnum::PendingVerification, VerificationActionType::Reject) => {
            Some(ProjectStateEnum::Rejected)
        }
        _ => None,
    }
}

pub fn field_data_decision(
    current: FieldDataStateEnum,
    action: VerificationActionType,
) -> Option<FieldDataStateEnum> {
    match (current, action) {
        (FieldDataStateEnum::PendingVerification, VerificationActionType::Approve) => {
            Some(FieldDataStateEnum::Verified)
        }
        (FieldDataStateEnum::PendingVerification, VerificationActionType::Reject) => {
            Some(FieldDataStateEnum::Rejected)
        }
        _ => None,
    }
}

/// Credits carry no rejected state; a reject decision has no legal target.
pub fn carbon_credit_decision(
    current: CarbonCreditStateEnum,
    action: VerificationActionType,
) -> Option<CarbonCreditStateEnum> {
    match (current, action) {
        (CarbonCreditStateEnum::Pending, VerificationActionType::Approve) => {
            Some(CarbonCreditStateEnum::Verified)
        }
        _ => None,
    }
}

pub fn project_command_target(
    current: ProjectStateEnum,
    command: ProjectCommand,
) -> Option<ProjectStateEnum> {
    match (current, command) {
        (ProjectStateEnum::Draft, ProjectCommand::Submit) => {
            Some(ProjectStateEnum::PendingVerification)
        }
        (ProjectStateEnum::Approved, ProjectCommand::UploadBaseline) => {
            Some(ProjectStateEnum::BaselineUploaded)
        }
        (ProjectStateEnum::BaselineUploaded, ProjectCommand::StartPlantation) => {
            Some(ProjectStateEnum::PlantationStarted)
        }
        (ProjectStateEnum::PlantationStarted, ProjectCommand::RecordMonitoring) => {
            Some(ProjectStateEnum::Monitoring)
        }
        // later monitoring reports keep the project where it is
        (ProjectStateEnum::Monitoring, ProjectCommand::RecordMonitoring) => {
            Some(ProjectStateEnum::Monitoring)
        }
        (ProjectStateEnum::Monitoring, ProjectCommand::Complete) => {
            Some(ProjectStateEnum::Completed)
        }
        _ => None,
    }
}

/// Site-side effect of referencing or working a site.
pub fn site_assignment(current: PlantationSiteStateEnum) -> Option<PlantationSiteStateEnum> {
    match current {
        PlantationSiteStateEnum::Available => Some(PlantationSiteStateEnum::Assigned),
        _ => None,
    }
}

pub fn site_restoration_start(current: PlantationSiteStateEnum) -> Option<PlantationSiteStateEnum> {
    match current {
        PlantationSiteStateEnum::Assigned => Some(PlantationSiteStateEnum::UnderRestoration),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_project_decision_only_from_pending_verification() {
        assert_eq!(
            project_decision(
                ProjectStateEnum::PendingVerification,
                VerificationActionType::Approve
            ),
            Some(ProjectStateEnum::Approved)
        );
        assert_eq!(
            project_decision(
                ProjectStateEnum::PendingVerification,
                VerificationActionType::Reject
            ),
            Some(ProjectStateEnum::Rejected)
        );

        for state in [
            ProjectStateEnum::Draft,
            ProjectStateEnum::Approved,
            ProjectStateEnum::BaselineUploaded,
            ProjectStateEnum::PlantationStarted,
            ProjectStateEnum::Monitoring,
            ProjectStateEnum::Completed,
            ProjectStateEnum::Rejected,
        ] {
            assert_eq!(project_decision(state, VerificationActionType::Approve), None);
            assert_eq!(project_decision(state, VerificationActionType::Reject), None);
        }
    }

    #[test]
    fn test_reapproving_is_illegal() {
        let approved =
            project_decision(ProjectStateEnum::PendingVerification, VerificationActionType::Approve)
                .unwrap();
        assert_eq!(project_decision(approved, VerificationActionType::Approve), None);
    }

    #[test]
    fn test_user_decision_table() {
        assert_eq!(
            user_decision(UserStateEnum::Pending, VerificationActionType::Approve),
            Some(UserStateEnum::Verified)
        );
        assert_eq!(
            user_decision(UserStateEnum::Pending, VerificationActionType::Reject),
            Some(UserStateEnum::Rejected)
        );
        assert_eq!(user_decision(UserStateEnum::Verified, VerificationActionType::Approve), None);
        assert_eq!(user_decision(UserStateEnum::Rejected, VerificationActionType::Reject), None);
    }

    #[test]
    fn test_carbon_credit_reject_has_no_target() {
        assert_eq!(
            carbon_credit_decision(CarbonCreditStateEnum::Pending, VerificationActionType::Reject),
            None
        );
        assert_eq!(
            carbon_credit_decision(CarbonCreditStateEnum::Pending, VerificationActionType::Approve),
            Some(CarbonCreditStateEnum::Verified)
        );
        assert_eq!(
            carbon_credit_decision(CarbonCreditStateEnum::Issued, VerificationActionType::Approve),
            None
        );
    }

    #[test]
    fn test_project_forward_chain() {
        assert_eq!(
            project_command_target(ProjectStateEnum::Draft, ProjectCommand::Submit),
            Some(ProjectStateEnum::PendingVerification)
        );
        assert_eq!(
            project_command_target(ProjectStateEnum::Approved, ProjectCommand::UploadBaseline),
            Some(ProjectStateEnum::BaselineUploaded)
        );
        assert_eq!(
            project_command_target(
                ProjectStateEnum::BaselineUploaded,
                ProjectCommand::StartPlantation
            ),
            Some(ProjectStateEnum::PlantationStarted)
        );
        assert_eq!(
            project_command_target(
                ProjectStateEnum::PlantationStarted,
                ProjectCommand::RecordMonitoring
            ),
            Some(ProjectStateEnum::Monitoring)
        );
        assert_eq!(
            project_command_target(ProjectStateEnum::Monitoring, ProjectCommand::Complete),
            Some(ProjectStateEnum::Completed)
        );
    }

    #[test]
    fn test_start_plantation_requires_baseline() {
        assert_eq!(
            project_command_target(ProjectStateEnum::Approved, ProjectCommand::StartPlantation),
            None
        );
    }

    #[test]
    fn test_repeat_monitoring_keeps_state() {
        assert_eq!(
            project_command_target(ProjectStateEnum::Monitoring, ProjectCommand::RecordMonitoring),
            Some(ProjectStateEnum::Monitoring)
        );
    }

    #[test]
    fn test_no_backward_transitions() {
        assert_eq!(
            project_command_target(ProjectStateEnum::Completed, ProjectCommand::RecordMonitoring),
            None
        );
        assert_eq!(
            project_command_target(ProjectStateEnum::Rejected, ProjectCommand::Submit),
            None
        );
    }

    #[test]
    fn test_site_transitions() {
        assert_eq!(
            site_assignment(PlantationSiteStateEnum::Available),
            Some(PlantationSiteStateEnum::Assigned)
        );
        assert_eq!(site_assignment(PlantationSiteStateEnum::Assigned), None);
        assert_eq!(
            site_restoration_start(PlantationSiteStateEnum::Assigned),
            Some(PlantationSiteStateEnum::UnderRestoration)
        );
        assert_eq!(site_restoration_start(PlantationSiteStateEnum::Available), None);
    }

    #[test]
    fn test_required_roles() {
        assert_eq!(required_role(VerificationEntityType::User), UserRole::Admin);
        assert_eq!(required_role(VerificationEntityType::Project), UserRole::Verifier);
        assert_eq!(required_role(VerificationEntityType::FieldData), UserRole::Verifier);
        assert_eq!(required_role(VerificationEntityType::CarbonCredit), UserRole::Verifier);
    }
}
