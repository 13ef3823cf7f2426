pub mod carbon_credit;
pub mod dashboard;
pub mod field_data;
pub mod misc;
pub mod plantation_site;
pub mod project;
pub mod user;
pub mod verification;
