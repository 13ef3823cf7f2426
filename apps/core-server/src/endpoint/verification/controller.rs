use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::{Json, http::StatusCode};

use super::dto::{
    VerificationActionQueryRestDTO, VerificationActionResponseRestDTO, VerificationRequestRestDTO,
    VerificationResponseRestDTO,
};
use crate::dto::error::map_service_error;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/verification/v1",
    request_body = VerificationRequestRestDTO,
    responses(
        (status = 200, description = "Decision applied", body = VerificationResponseRestDTO),
        (status = 400, description = "Illegal transition or unauthorized performer"),
        (status = 404, description = "Entity or performer not found"),
    ),
    tag = "verification",
)]
pub(crate) async fn post_verification(
    state: State<AppState>,
    Json(request): Json<VerificationRequestRestDTO>,
) -> Response {
    let result = state.core.verification_service.apply(request.into()).await;

    match result {
        Ok(value) => (
            StatusCode::OK,
            Json(VerificationResponseRestDTO::from(value)),
        )
            .into_response(),
        Err(error) => map_service_error(&error, state.config.hide_error_response_cause),
    }
}

#[utoipa::path(
    get,
    path = "/api/verification/v1",
    responses(
        (status = 200, description = "OK", body = [VerificationActionResponseRestDTO]),
    ),
    params(
        VerificationActionQueryRestDTO
    ),
    tag = "verification",
)]
pub(crate) async fn get_verification_action_list(
    state: State<AppState>,
    Query(query): Query<VerificationActionQueryRestDTO>,
) -> Response {
    let result = state
        .core
        .verification_service
        .get_verification_action_list(query.into())
        .await;

    match result {
        Ok(values) => (
            StatusCode::OK,
            Json(
                values
                    .into_iter()
                    .map(VerificationActionResponseRestDTO::from)
                    .collect::<Vec<_>>(),
            ),
        )
            .into_response(),
        Err(error) => map_service_error(&error, state.config.hide_error_response_cause),
    }
}
