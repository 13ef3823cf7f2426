//! Fixed demo dataset: one restoration pipeline already in monitoring plus
//! an available site, so every role dashboard has something to show on a
//! fresh start.

use registry_core::model::carbon_credit::{CarbonCredit, CarbonCreditStateEnum};
use registry_core::model::common::{EcosystemType, GeoPoint};
use registry_core::model::field_data::{FieldData, FieldDataKind, FieldDataStateEnum};
use registry_core::model::plantation_site::{PlantationSite, PlantationSiteStateEnum};
use registry_core::model::project::{Project, ProjectStateEnum};
use registry_core::model::user::{User, UserRole, UserStateEnum};
use registry_core::model::verification_action::{
    VerificationAction, VerificationActionType, VerificationEntityType,
};
use registry_core::repository::carbon_credit_repository::CarbonCreditRepository;
use registry_core::repository::error::DataLayerError;
use registry_core::repository::field_data_repository::FieldDataRepository;
use registry_core::repository::plantation_site_repository::PlantationSiteRepository;
use registry_core::repository::project_repository::ProjectRepository;
use registry_core::repository::user_repository::UserRepository;
use registry_core::repository::verification_action_repository::VerificationActionRepository;
use shared_types::{EntityId, UserId};
use time::OffsetDateTime;

use crate::DataLayer;

pub(crate) async fn seed_demo_data(layer: &DataLayer) -> Result<(), DataLayerError> {
    let now = OffsetDateTime::now_utc();

    let user = |name: &str, organisation: &str, role, state, email: &str, jurisdiction: &str| User {
        id: Default::default(),
        created_date: now,
        last_modified: now,
        name: name.to_string(),
        organisation: organisation.to_string(),
        role,
        state,
        contact_email: email.to_string(),
        contact_phone: None,
        jurisdiction: Some(jurisdiction.to_string()),
    };

    // users 1-4 form one working pipeline; user 5 waits for admin approval
    let ngo = layer
        .user_repository
        .create_user(user(
            "Green Shores Trust",
            "Green Shores Trust",
            UserRole::Ngo,
            UserStateEnum::Verified,
            "contact@greenshores.org",
            "Cuddalore",
        ))
        .await?;
    let panchayat = layer
        .user_repository
        .create_user(user(
            "Killai Gram Panchayat",
            "Killai Gram Panchayat",
            UserRole::Panchayat,
            UserStateEnum::Verified,
            "office@killai.panchayat.in",
            "Cuddalore",
        ))
        .await?;
    let verifier = layer
        .user_repository
        .create_user(user(
            "Meena Raghavan",
            "Coastal Audit Services",
            UserRole::Verifier,
            UserStateEnum::Verified,
            "meena@coastalaudit.in",
            "Chennai",
        ))
        .await?;
    let admin = layer
        .user_repository
        .create_user(user(
            "NCCR Registry Desk",
            "NCCR",
            UserRole::Admin,
            UserStateEnum::Verified,
            "registry@nccr.gov.in",
            "Chennai",
        ))
        .await?;
    layer
        .user_repository
        .create_user(user(
            "Deltaic Roots Collective",
            "Deltaic Roots Collective",
            UserRole::Ngo,
            UserStateEnum::Pending,
            "hello@deltaicroots.org",
            "Nagapattinam",
        ))
        .await?;

    let site = |name: &str, latitude: f64, longitude: f64, area, state| PlantationSite {
        id: Default::default(),
        created_date: now,
        last_modified: now,
        panchayat_id: panchayat,
        name: name.to_string(),
        ecosystem: EcosystemType::Mangrove,
        area_hectares: area,
        coordinates: GeoPoint {
            latitude,
            longitude,
        },
        state,
    };

    let assigned_site = layer
        .plantation_site_repository
        .create_plantation_site(site(
            "Killai backwater belt",
            11.43,
            79.77,
            12.5,
            PlantationSiteStateEnum::UnderRestoration,
        ))
        .await?;
    layer
        .plantation_site_repository
        .create_plantation_site(site(
            "Pichavaram north fringe",
            11.49,
            79.76,
            8.0,
            PlantationSiteStateEnum::Available,
        ))
        .await?;

    let project = layer
        .project_repository
        .create_project(Project {
            id: Default::default(),
            created_date: now,
            last_modified: now,
            version: 1,
            ngo_id: ngo,
            panchayat_id: panchayat,
            plantation_site_id: assigned_site,
            name: "Killai mangrove belt revival".to_string(),
            ecosystem: EcosystemType::Mangrove,
            area_hectares: 12.5,
            carbon_credits_target: 500.0,
            carbon_credits_issued: 0.0,
            state: ProjectStateEnum::Monitoring,
        })
        .await?;

    let field_data = |kind, state| FieldData {
        id: Default::default(),
        created_date: now,
        last_modified: now,
        version: 1,
        project_id: project,
        submitted_by: ngo,
        kind,
        captured_date: now,
        plant_count: 5400,
        area_covered_hectares: 4.2,
        survival_rate_pct: Some(88.0),
        health_score: Some(8.2),
        image_refs: vec!["uploads/killai/plot-a.jpg".to_string()],
        coordinates: None,
        state,
    };

    let baseline = layer
        .field_data_repository
        .create_field_data(field_data(FieldDataKind::Baseline, FieldDataStateEnum::Verified))
        .await?;
    layer
        .field_data_repository
        .create_field_data(field_data(
            FieldDataKind::Monitoring,
            FieldDataStateEnum::PendingVerification,
        ))
        .await?;

    layer
        .carbon_credit_repository
        .create_carbon_credit(CarbonCredit {
            id: Default::default(),
            created_date: now,
            last_modified: now,
            version: 1,
            project_id: project,
            amount_tonnes: 250.0,
            verified_by: None,
            approved_by: None,
            token_id: None,
            ledger_tx_id: None,
            issued_at: None,
            state: CarbonCreditStateEnum::Pending,
        })
        .await?;

    let action = |action, entity_type, entity_id: EntityId, performed_by: UserId| {
        VerificationAction {
            id: Default::default(),
            created_date: now,
            action,
            entity_id,
            entity_type,
            performed_by,
            remarks: None,
        }
    };

    for approved_user in [ngo, panchayat, verifier] {
        layer
            .verification_action_repository
            .create_verification_action(action(
                VerificationActionType::Approve,
                VerificationEntityType::User,
                approved_user.into(),
                admin,
            ))
            .await?;
    }
    layer
        .verification_action_repository
        .create_verification_action(action(
            VerificationActionType::Approve,
            VerificationEntityType::Project,
            project.into(),
            verifier,
        ))
        .await?;
    layer
        .verification_action_repository
        .create_verification_action(action(
            VerificationActionType::Approve,
            VerificationEntityType::FieldData,
            baseline.into(),
            verifier,
        ))
        .await?;

    Ok(())
}
