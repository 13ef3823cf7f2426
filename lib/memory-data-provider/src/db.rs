use std::collections::BTreeMap;

use registry_core::model::carbon_credit::CarbonCredit;
use registry_core::model::field_data::FieldData;
use registry_core::model::plantation_site::PlantationSite;
use registry_core::model::project::Project;
use registry_core::model::user::User;
use registry_core::model::verification_action::VerificationAction;
use shared_types::{
    CarbonCreditId, FieldDataId, PlantationSiteId, ProjectId, UserId, VerificationActionId,
};
use tokio::sync::RwLock;

/// The entire registry state. Collections are keyed by id; `BTreeMap` keeps
/// them ordered so id assignment can read the current maximum.
#[derive(Default)]
pub(crate) struct InMemoryStorage {
    pub(crate) users: RwLock<BTreeMap<UserId, User>>,
    pub(crate) plantation_sites: RwLock<BTreeMap<PlantationSiteId, PlantationSite>>,
    pub(crate) projects: RwLock<BTreeMap<ProjectId, Project>>,
    pub(crate) field_data: RwLock<BTreeMap<FieldDataId, FieldData>>,
    pub(crate) carbon_credits: RwLock<BTreeMap<CarbonCreditId, CarbonCredit>>,
    pub(crate) verification_actions: RwLock<BTreeMap<VerificationActionId, VerificationAction>>,
}

/// `max(existing ids) + 1`, or `1` for the first insert into an empty
/// collection.
pub(crate) fn next_id<K, V>(map: &BTreeMap<K, V>) -> i64
where
    K: Copy + Ord + Into<i64>,
{
    map.last_key_value()
        .map(|(key, _)| (*key).into() + 1)
        .unwrap_or(1)
}
