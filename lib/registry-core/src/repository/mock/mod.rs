pub mod carbon_credit_repository;
pub mod field_data_repository;
pub mod plantation_site_repository;
pub mod project_repository;
pub mod user_repository;
pub mod verification_action_repository;
