use shared_types::{CarbonCreditId, EntityId, FieldDataId, PlantationSiteId, ProjectId, UserId};
use thiserror::Error;

use crate::model::user::UserRole;
use crate::model::verification_action::VerificationEntityType;
use crate::provider::ledger::LedgerError;
use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Mapping error: `{0}`")]
    MappingError(String),

    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),
    #[error("Not found")]
    NotFound,

    #[error(transparent)]
    EntityAlreadyExists(#[from] EntityAlreadyExistsError),
    #[error("Already exists")]
    AlreadyExists,

    #[error("Not updated")]
    NotUpdated,

    #[error(transparent)]
    BusinessLogic(#[from] BusinessLogicError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Ledger error: `{0}`")]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Repository(DataLayerError),
    #[error("Response mapping error: {0}")]
    ResponseMapping(String),
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("User `{0}` not found")]
    User(UserId),

    #[error("Project `{0}` not found")]
    Project(ProjectId),

    #[error("Plantation site `{0}` not found")]
    PlantationSite(PlantationSiteId),

    #[error("Field data `{0}` not found")]
    FieldData(FieldDataId),

    #[error("Carbon credit `{0}` not found")]
    CarbonCredit(CarbonCreditId),
}

#[derive(Debug, Error)]
pub enum EntityAlreadyExistsError {
    #[error("A user with contact email `{0}` is already registered")]
    UserEmail(String),
}

#[derive(Debug, Error)]
pub enum BusinessLogicError {
    #[error("Illegal {entity_type} transition: {action} from {from}")]
    InvalidStateTransition {
        entity_type: VerificationEntityType,
        entity_id: EntityId,
        from: String,
        action: String,
    },

    #[error("User `{performer}` has role {actual}, action requires {required}")]
    UnauthorizedActor {
        performer: UserId,
        required: UserRole,
        actual: UserRole,
    },

    #[error("User `{0}` is not verified")]
    PerformerNotVerified(UserId),

    #[error("User `{user}` does not have role {expected}")]
    UnexpectedUserRole { user: UserId, expected: UserRole },

    #[error("User `{user}` with role {actual} cannot submit field data")]
    FieldDataSubmitterRole { user: UserId, actual: UserRole },

    #[error("Plantation site `{0}` is not available")]
    SiteNotAvailable(PlantationSiteId),

    #[error("Project `{0}` has no verified field data")]
    MissingVerifiedFieldData(ProjectId),

    #[error("Stale version: record is at {current}, caller observed {observed}")]
    StaleVersion { current: u64, observed: u64 },
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field `{0}`")]
    MissingField(&'static str),

    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),

    #[error("Field `{0}` must be positive")]
    NonPositiveValue(&'static str),
}

#[derive(Debug)]
pub enum ErrorCode {
    User001,
    User002,
    User003,

    Site001,
    Site002,

    Project001,
    Project002,

    FieldData001,

    Credit001,
    Credit002,

    Transition001,
    Auth001,
    Version001,

    Validation001,

    Ledger001,

    Database,
    ResponseMapping,

    Unmapped,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::User001 => "User not found",
            ErrorCode::User002 => "User already registered",
            ErrorCode::User003 => "User not authorized",

            ErrorCode::Site001 => "Plantation site not found",
            ErrorCode::Site002 => "Plantation site not available",

            ErrorCode::Project001 => "Project not found",
            ErrorCode::Project002 => "Project has no verified field data",

            ErrorCode::FieldData001 => "Field data not found",

            ErrorCode::Credit001 => "Carbon credit not found",
            ErrorCode::Credit002 => "Ledger issuance failed",

            ErrorCode::Transition001 => "Illegal status transition",
            ErrorCode::Auth001 => "Action not permitted for role",
            ErrorCode::Version001 => "Concurrent update detected",

            ErrorCode::Validation001 => "Invalid request",

            ErrorCode::Ledger001 => "Ledger unavailable",

            ErrorCode::Database => "Database error",

            ErrorCode::ResponseMapping => "Response mapping error",

            ErrorCode::Unmapped => "Unmapped error code",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::EntityNotFound(error) => error.error_code(),
            ServiceError::EntityAlreadyExists(error) => error.error_code(),
            ServiceError::BusinessLogic(error) => error.error_code(),
            ServiceError::Validation(_) => ErrorCode::Validation001,
            ServiceError::Ledger(error) => error.error_code(),
            ServiceError::Repository(_) => ErrorCode::Database,
            ServiceError::ResponseMapping(_) => ErrorCode::ResponseMapping,

            ServiceError::MappingError(_)
            | ServiceError::NotFound
            | ServiceError::AlreadyExists
            | ServiceError::NotUpdated => ErrorCode::Unmapped,
        }
    }
}

impl EntityNotFoundError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EntityNotFoundError::User(_) => ErrorCode::User001,
            EntityNotFoundError::Project(_) => ErrorCode::Project001,
            EntityNotFoundError::PlantationSite(_) => ErrorCode::Site001,
            EntityNotFoundError::FieldData(_) => ErrorCode::FieldData001,
            EntityNotFoundError::CarbonCredit(_) => ErrorCode::Credit001,
        }
    }
}

impl EntityAlreadyExistsError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EntityAlreadyExistsError::UserEmail(_) => ErrorCode::User002,
        }
    }
}

impl BusinessLogicError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            BusinessLogicError::InvalidStateTransition { .. } => ErrorCode::Transition001,
            BusinessLogicError::UnauthorizedActor { .. } => ErrorCode::Auth001,
            BusinessLogicError::PerformerNotVerified(_) => ErrorCode::User003,
            BusinessLogicError::UnexpectedUserRole { .. } => ErrorCode::User003,
            BusinessLogicError::FieldDataSubmitterRole { .. } => ErrorCode::Auth001,
            BusinessLogicError::SiteNotAvailable(_) => ErrorCode::Site002,
            BusinessLogicError::MissingVerifiedFieldData(_) => ErrorCode::Project002,
            BusinessLogicError::StaleVersion { .. } => ErrorCode::Version001,
        }
    }
}

impl LedgerError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            LedgerError::Unavailable(_) => ErrorCode::Ledger001,
            LedgerError::Rejected(_) => ErrorCode::Credit002,
        }
    }
}

impl From<DataLayerError> for ServiceError {
    fn from(value: DataLayerError) -> Self {
        match value {
            DataLayerError::AlreadyExists => ServiceError::AlreadyExists,
            DataLayerError::RecordNotFound => ServiceError::NotFound,
            DataLayerError::RecordNotUpdated => ServiceError::NotUpdated,
            DataLayerError::StaleVersion { current, observed } => {
                ServiceError::BusinessLogic(BusinessLogicError::StaleVersion { current, observed })
            }
            DataLayerError::MappingError => Self::Repository(value),
        }
    }
}
