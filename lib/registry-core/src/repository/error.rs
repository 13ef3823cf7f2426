use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataLayerError {
    #[error("Already exists")]
    AlreadyExists,

    #[error("Record not found")]
    RecordNotFound,

    #[error("Record not updated")]
    RecordNotUpdated,

    #[error("Stale version: record is at {current}, caller observed {observed}")]
    StaleVersion { current: u64, observed: u64 },

    #[error("Response could not be mapped")]
    MappingError,
}
