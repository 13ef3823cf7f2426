use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::{Json, http::StatusCode};
use shared_types::PlantationSiteId;
use validator::Validate;

use super::dto::{CreatePlantationSiteRequestRestDTO, PlantationSiteResponseRestDTO};
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::map_service_error;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/plantation-site/v1",
    request_body = CreatePlantationSiteRequestRestDTO,
    responses(
        (status = 200, description = "Created", body = EntityResponseRestDTO),
        (status = 400, description = "Invalid site data"),
        (status = 404, description = "Panchayat not found"),
    ),
    tag = "plantation_site_management",
)]
pub(crate) async fn post_plantation_site(
    state: State<AppState>,
    Json(request): Json<CreatePlantationSiteRequestRestDTO>,
) -> Response {
    if let Err(error) = request.validate() {
        return (StatusCode::BAD_REQUEST, error.to_string()).into_response();
    }

    let result = state
        .core
        .plantation_site_service
        .create_plantation_site(request.into())
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
    get,
    path = "/api/plantation-site/v1/{id}",
    responses(
        (status = 200, description = "OK", body = PlantationSiteResponseRestDTO),
        (status = 404, description = "Site not found"),
    ),
    params(
        ("id" = i64, Path, description = "Plantation site id")
    ),
    tag = "plantation_site_management",
)]
pub(crate) async fn get_plantation_site(
    state: State<AppState>,
    Path(id): Path<PlantationSiteId>,
) -> Response {
    let result = state
        .core
        .plantation_site_service
        .get_plantation_site(&id)
        .await;

    match result {
        Ok(value) => (
            StatusCode::OK,
            Json(PlantationSiteResponseRestDTO::from(value)),
        )
            .into_response(),
        Err(error) => map_service_error(&error, state.config.hide_error_response_cause),
    }
}

#[utoipa::path(
    get,
    path = "/api/plantation-site/v1",
    responses(
        (status = 200, description = "OK", body = [PlantationSiteResponseRestDTO]),
    ),
    tag = "plantation_site_management",
)]
pub(crate) async fn get_plantation_site_list(state: State<AppState>) -> Response {
    let result = state
        .core
        .plantation_site_service
        .get_plantation_site_list()
        .await;

    match result {
        Ok(values) => (
            StatusCode::OK,
            Json(
                values
                    .into_iter()
                    .map(PlantationSiteResponseRestDTO::from)
                    .collect::<Vec<_>>(),
            ),
        )
            .into_response(),
        Err(error) => map_service_error(&error, state.config.hide_error_response_cause),
    }
}
