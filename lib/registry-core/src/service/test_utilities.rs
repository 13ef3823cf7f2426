use shared_types::{CarbonCreditId, FieldDataId, PlantationSiteId, ProjectId, UserId};
use time::OffsetDateTime;

use crate::model::carbon_credit::{CarbonCredit, CarbonCreditStateEnum};
use crate::model::common::{EcosystemType, GeoPoint};
use crate::model::field_data::{FieldData, FieldDataKind, FieldDataStateEnum};
use crate::model::plantation_site::{PlantationSite, PlantationSiteStateEnum};
use crate::model::project::{Project, ProjectStateEnum};
use crate::model::user::{User, UserRole, UserStateEnum};

pub(crate) fn generic_user(id: i64, role: UserRole, state: UserStateEnum) -> User {
    let now = OffsetDateTime::now_utc();

    User {
        id: UserId::from(id),
        created_date: now,
        last_modified: now,
        name: format!("user-{id}"),
        organisation: "Coastal Works".to_string(),
        role,
        state,
        contact_email: format!("user-{id}@example.org"),
        contact_phone: None,
        jurisdiction: Some("Tamil Nadu".to_string()),
    }
}

pub(crate) fn generic_site(id: i64, state: PlantationSiteStateEnum) -> PlantationSite {
    let now = OffsetDateTime::now_utc();

    PlantationSite {
        id: PlantationSiteId::from(id),
        created_date: now,
        last_modified: now,
        panchayat_id: UserId::from(2),
        name: format!("site-{id}"),
        ecosystem: EcosystemType::Mangrove,
        area_hectares: 12.5,
        coordinates: GeoPoint {
            latitude: 11.49,
            longitude: 79.76,
        },
        state,
    }
}

pub(crate) fn generic_project(id: i64, state: ProjectStateEnum) -> Project {
    let now = OffsetDateTime::now_utc();

    Project {
        id: ProjectId::from(id),
        created_date: now,
        last_modified: now,
        version: 1,
        ngo_id: UserId::from(1),
        panchayat_id: UserId::from(2),
        plantation_site_id: PlantationSiteId::from(1),
        name: format!("project-{id}"),
        ecosystem: EcosystemType::Mangrove,
        area_hectares: 12.5,
        carbon_credits_target: 500.0,
        carbon_credits_issued: 0.0,
        state,
    }
}

pub(crate) fn generic_field_data(
    id: i64,
    kind: FieldDataKind,
    state: FieldDataStateEnum,
) -> FieldData {
    let now = OffsetDateTime::now_utc();

    FieldData {
        id: FieldDataId::from(id),
        created_date: now,
        last_modified: now,
        version: 1,
        project_id: ProjectId::from(101),
        submitted_by: UserId::from(1),
        kind,
        captured_date: now,
        plant_count: 1200,
        area_covered_hectares: 3.2,
        survival_rate_pct: Some(87.5),
        health_score: Some(8.1),
        image_refs: vec!["img/plot-a.jpg".to_string()],
        coordinates: None,
        state,
    }
}

pub(crate) fn generic_credit(id: i64, state: CarbonCreditStateEnum) -> CarbonCredit {
    let now = OffsetDateTime::now_utc();

    CarbonCredit {
        id: CarbonCreditId::from(id),
        created_date: now,
        last_modified: now,
        version: 1,
        project_id: ProjectId::from(101),
        amount_tonnes: 250.0,
        verified_by: None,
        approved_by: None,
        token_id: None,
        ledger_tx_id: None,
        issued_at: None,
        state,
    }
}
