use serde::{Deserialize, Serialize};

use crate::macros::impls_for_i64_newtype;
use crate::{CarbonCreditId, FieldDataId, PlantationSiteId, ProjectId, UserId};

/// Untyped id used where an audit entry may point at any entity kind.
#[derive(
    Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(transparent)]
#[repr(transparent)]
pub struct EntityId(i64);

impls_for_i64_newtype!(EntityId);

macro_rules! impl_from_other_type {
    ($other: ty) => {
        impl std::convert::From<$other> for EntityId {
            fn from(value: $other) -> Self {
                Self(value.into())
            }
        }
    };
}

impl_from_other_type!(UserId);
impl_from_other_type!(ProjectId);
impl_from_other_type!(PlantationSiteId);
impl_from_other_type!(FieldDataId);
impl_from_other_type!(CarbonCreditId);
