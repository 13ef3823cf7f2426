use registry_core::model::carbon_credit::{CarbonCredit, CarbonCreditStateEnum};
use registry_core::model::common::{EcosystemType, GeoPoint};
use registry_core::model::field_data::{FieldData, FieldDataKind, FieldDataStateEnum};
use registry_core::model::plantation_site::{PlantationSite, PlantationSiteStateEnum};
use registry_core::model::project::{Project, ProjectStateEnum};
use registry_core::model::user::{User, UserRole, UserStateEnum};
use registry_core::model::verification_action::{
    VerificationAction, VerificationActionType, VerificationEntityType,
};
use shared_types::{EntityId, ProjectId, UserId};
use time::OffsetDateTime;

pub(crate) fn test_user(email: &str, role: UserRole) -> User {
    let now = OffsetDateTime::now_utc();

    User {
        id: Default::default(),
        created_date: now,
        last_modified: now,
        name: email.to_string(),
        organisation: "Coastal Works".to_string(),
        role,
        state: UserStateEnum::Verified,
        contact_email: email.to_string(),
        contact_phone: None,
        jurisdiction: None,
    }
}

pub(crate) fn test_site(name: &str) -> PlantationSite {
    let now = OffsetDateTime::now_utc();

    PlantationSite {
        id: Default::default(),
        created_date: now,
        last_modified: now,
        panchayat_id: UserId::from(2),
        name: name.to_string(),
        ecosystem: EcosystemType::Mangrove,
        area_hectares: 10.0,
        coordinates: GeoPoint {
            latitude: 11.49,
            longitude: 79.76,
        },
        state: PlantationSiteStateEnum::Available,
    }
}

pub(crate) fn test_project(state: ProjectStateEnum) -> Project {
    let now = OffsetDateTime::now_utc();

    Project {
        id: Default::default(),
        created_date: now,
        last_modified: now,
        version: 1,
        ngo_id: UserId::from(1),
        panchayat_id: UserId::from(2),
        plantation_site_id: 1.into(),
        name: "test project".to_string(),
        ecosystem: EcosystemType::Mangrove,
        area_hectares: 10.0,
        carbon_credits_target: 400.0,
        carbon_credits_issued: 0.0,
        state,
    }
}

pub(crate) fn test_field_data(
    project_id: ProjectId,
    kind: FieldDataKind,
    state: FieldDataStateEnum,
) -> FieldData {
    let now = OffsetDateTime::now_utc();

    FieldData {
        id: Default::default(),
        created_date: now,
        last_modified: now,
        version: 1,
        project_id,
        submitted_by: UserId::from(1),
        kind,
        captured_date: now,
        plant_count: 900,
        area_covered_hectares: 2.0,
        survival_rate_pct: None,
        health_score: None,
        image_refs: vec![],
        coordinates: None,
        state,
    }
}

pub(crate) fn test_credit(project_id: ProjectId, state: CarbonCreditStateEnum) -> CarbonCredit {
    let now = OffsetDateTime::now_utc();

    CarbonCredit {
        id: Default::default(),
        created_date: now,
        last_modified: now,
        version: 1,
        project_id,
        amount_tonnes: 100.0,
        verified_by: None,
        approved_by: None,
        token_id: None,
        ledger_tx_id: None,
        issued_at: None,
        state,
    }
}

pub(crate) fn test_action(
    entity_type: VerificationEntityType,
    entity_id: EntityId,
    performed_by: UserId,
) -> VerificationAction {
    VerificationAction {
        id: Default::default(),
        created_date: OffsetDateTime::now_utc(),
        action: VerificationActionType::Approve,
        entity_id,
        entity_type,
        performed_by,
        remarks: None,
    }
}
