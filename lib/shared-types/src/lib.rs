#![cfg_attr(feature = "strict", deny(warnings))]

//! Registry-wide id newtypes. All entities use integer identities assigned by
//! the data provider; wrapping them keeps ids of different entities from
//! being mixed up across layer boundaries.

mod carbon_credit_id;
mod entity_id;
mod field_data_id;
mod macros;
mod plantation_site_id;
mod project_id;
mod user_id;
mod verification_action_id;

pub use carbon_credit_id::CarbonCreditId;
pub use entity_id::EntityId;
pub use field_data_id::FieldDataId;
pub use plantation_site_id::PlantationSiteId;
pub use project_id::ProjectId;
pub use user_id::UserId;
pub use verification_action_id::VerificationActionId;
