use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::{Json, http::StatusCode};
use registry_core::service::carbon_credit::dto::IssueCarbonCreditRequestDTO;
use shared_types::CarbonCreditId;
use validator::Validate;

use super::dto::{
    CarbonCreditResponseRestDTO, CreateCarbonCreditRequestRestDTO,
    IssueCarbonCreditRequestRestDTO, IssueCarbonCreditResponseRestDTO,
};
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::map_service_error;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/carbon-credit/v1",
    request_body = CreateCarbonCreditRequestRestDTO,
    responses(
        (status = 200, description = "Generated", body = EntityResponseRestDTO),
        (status = 400, description = "Project not eligible for credits"),
        (status = 404, description = "Project not found"),
    ),
    tag = "carbon_credit_management",
)]
pub(crate) async fn post_carbon_credit(
    state: State<AppState>,
    Json(request): Json<CreateCarbonCreditRequestRestDTO>,
) -> Response {
    if let Err(error) = request.validate() {
        return (StatusCode::BAD_REQUEST, error.to_string()).into_response();
    }

    let result = state
        .core
        .carbon_credit_service
        .generate_carbon_credits(request.into())
        .await;

    match result {
        Ok(id) => (
            StatusCode::OK,
            Json(EntityResponseRestDTO { id: id.into() }),
        )
            .into_response(),
        Err(error) => map_service_error(&error, state.config.hide_error_response_cause),
    }
}

#[utoipa::path(
    post,
    path = "/api/carbon-credit/v1/{id}/issue",
    request_body = IssueCarbonCreditRequestRestDTO,
    responses(
        (status = 200, description = "Issued on the ledger", body = IssueCarbonCreditResponseRestDTO),
        (status = 400, description = "Credit is not verified"),
        (status = 404, description = "Credit not found"),
        (status = 502, description = "Ledger unavailable; credit stays verified"),
    ),
    params(
        ("id" = i64, Path, description = "Carbon credit id")
    ),
    tag = "carbon_credit_management",
)]
pub(crate) async fn issue_carbon_credit(
    state: State<AppState>,
    Path(id): Path<CarbonCreditId>,
    Json(request): Json<IssueCarbonCreditRequestRestDTO>,
) -> Response {
    let result = state
        .core
        .carbon_credit_service
        .issue_carbon_credit(IssueCarbonCreditRequestDTO {
            credit_id: id,
            requested_by: request.requested_by,
        })
        .await;

    match result {
        Ok(value) => (
            StatusCode::OK,
            Json(IssueCarbonCreditResponseRestDTO::from(value)),
        )
            .into_response(),
        Err(error) => map_service_error(&error, state.config.hide_error_response_cause),
    }
}

#[utoipa::path(
    get,
    path = "/api/carbon-credit/v1/{id}",
    responses(
        (status = 200, description = "OK", body = CarbonCreditResponseRestDTO),
        (status = 404, description = "Credit not found"),
    ),
    params(
        ("id" = i64, Path, description = "Carbon credit id")
    ),
    tag = "carbon_credit_management",
)]
pub(crate) async fn get_carbon_credit(
    state: State<AppState>,
    Path(id): Path<CarbonCreditId>,
) -> Response {
    let result = state.core.carbon_credit_service.get_carbon_credit(&id).await;

    match result {
        Ok(value) => (
            StatusCode::OK,
            Json(CarbonCreditResponseRestDTO::from(value)),
        )
            .into_response(),
        Err(error) => map_service_error(&error, state.config.hide_error_response_cause),
    }
}

#[utoipa::path(
    get,
    path = "/api/carbon-credit/v1",
    responses(
        (status = 200, description = "OK", body = [CarbonCreditResponseRestDTO]),
    ),
    tag = "carbon_credit_management",
)]
pub(crate) async fn get_carbon_credit_list(state: State<AppState>) -> Response {
    let result = state.core.carbon_credit_service.get_carbon_credit_list().await;

    match result {
        Ok(values) => (
            StatusCode::OK,
            Json(
                values
                    .into_iter()
                    .map(CarbonCreditResponseRestDTO::from)
                    .collect::<Vec<_>>(),
            ),
        )
            .into_response(),
        Err(error) => map_service_error(&error, state.config.hide_error_response_cause),
    }
}
