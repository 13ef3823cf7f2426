use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::{Json, http::StatusCode};
use shared_types::FieldDataId;

use super::dto::{
    CreateFieldDataRequestRestDTO, FieldDataQueryRestDTO, FieldDataResponseRestDTO,
};
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::map_service_error;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/field-data/v1",
    request_body = CreateFieldDataRequestRestDTO,
    responses(
        (status = 200, description = "Uploaded", body = EntityResponseRestDTO),
        (status = 400, description = "Invalid report or project state"),
        (status = 404, description = "Project or submitter not found"),
    ),
    tag = "field_data_management",
)]
pub(crate) async fn post_field_data(
    state: State<AppState>,
    Json(request): Json<CreateFieldDataRequestRestDTO>,
) -> Response {
    let result = state
        .core
        .field_data_service
        .upload_field_data(request.into())
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
    path = "/api/field-data/v1/{id}",
    responses(
        (status = 200, description = "OK", body = FieldDataResponseRestDTO),
        (status = 404, description = "Field data not found"),
    ),
    params(
        ("id" = i64, Path, description = "Field data id")
    ),
    tag = "field_data_management",
)]
pub(crate) async fn get_field_data(
    state: State<AppState>,
    Path(id): Path<FieldDataId>,
) -> Response {
    let result = state.core.field_data_service.get_field_data(&id).await;

    match result {
        Ok(value) => (StatusCode::OK, Json(FieldDataResponseRestDTO::from(value))).into_response(),
        Err(error) => map_service_error(&error, state.config.hide_error_response_cause),
    }
}

#[utoipa::path(
    get,
    path = "/api/field-data/v1",
    responses(
        (status = 200, description = "OK", body = [FieldDataResponseRestDTO]),
    ),
    params(
        FieldDataQueryRestDTO
    ),
    tag = "field_data_management",
)]
pub(crate) async fn get_field_data_list(
    state: State<AppState>,
    Query(query): Query<FieldDataQueryRestDTO>,
) -> Response {
    let result = state
        .core
        .field_data_service
        .get_field_data_list(query.into())
        .await;

    match result {
        Ok(values) => (
            StatusCode::OK,
            Json(
                values
                    .into_iter()
                    .map(FieldDataResponseRestDTO::from)
                    .collect::<Vec<_>>(),
            ),
        )
            .into_response(),
        Err(error) => map_service_error(&error, state.config.hide_error_response_cause),
    }
}
