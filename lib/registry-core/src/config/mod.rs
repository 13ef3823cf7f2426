use thiserror::Error;

pub mod core_config;

#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("config parsing error: {0}")]
    Parsing(#[from] figment::Error),
}
