use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use one_dto_mapper::From;
use registry_core::provider::ledger::LedgerError;
use registry_core::service::error::{BusinessLogicError, ServiceError};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, From, ToSchema)]
#[from("registry_core::service::error::ErrorCode")]
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

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponseRestDTO {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<Cause>,
}

impl ErrorResponseRestDTO {
    pub fn hide_cause(mut self, hide: bool) -> ErrorResponseRestDTO {
        if hide {
            self.cause = None;
        }

        self
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Cause {
    pub message: String,
}

impl Cause {
    pub fn with_message_from_error(error: &impl std::error::Error) -> Cause {
        Cause {
            message: error.to_string(),
        }
    }
}

impl From<&ServiceError> for ErrorResponseRestDTO {
    fn from(error: &ServiceError) -> Self {
        let code = error.error_code();

        ErrorResponseRestDTO {
            message: code.msg().to_string(),
            code: code.into(),
            cause: Some(Cause::with_message_from_error(error)),
        }
    }
}

pub(crate) fn status_for(error: &ServiceError) -> StatusCode {
    match error {
        ServiceError::EntityNotFound(_) | ServiceError::NotFound => StatusCode::NOT_FOUND,
        ServiceError::EntityAlreadyExists(_) | ServiceError::AlreadyExists => StatusCode::CONFLICT,
        ServiceError::BusinessLogic(BusinessLogicError::StaleVersion { .. }) => {
            StatusCode::CONFLICT
        }
        ServiceError::BusinessLogic(_) | ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::Ledger(LedgerError::Unavailable(_)) => StatusCode::BAD_GATEWAY,
        ServiceError::Ledger(LedgerError::Rejected(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Single place mapping service failures onto HTTP responses; unexpected
/// errors are logged before they turn into a 500.
pub(crate) fn map_service_error(error: &ServiceError, hide_cause: bool) -> Response {
    let status = status_for(error);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("Unexpected service error: {error:?}");
    }

    (
        status,
        Json(ErrorResponseRestDTO::from(error).hide_cause(hide_cause)),
    )
        .into_response()
}
