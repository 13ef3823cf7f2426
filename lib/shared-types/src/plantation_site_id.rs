use serde::{Deserialize, Serialize};

use crate::macros::impls_for_i64_newtype;

#[derive(
    Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(transparent)]
#[repr(transparent)]
pub struct PlantationSiteId(i64);

impls_for_i64_newtype!(PlantationSiteId);
