pub mod carbon_credit;
pub mod common;
pub mod field_data;
pub mod plantation_site;
pub mod project;
pub mod user;
pub mod verification_action;
