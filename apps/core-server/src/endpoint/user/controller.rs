use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::{Json, http::StatusCode};
use shared_types::UserId;
use validator::Validate;

use super::dto::{CreateUserRequestRestDTO, UserResponseRestDTO};
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::map_service_error;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/user/v1",
    request_body = CreateUserRequestRestDTO,
    responses(
        (status = 200, description = "Registered", body = EntityResponseRestDTO),
        (status = 400, description = "Invalid registration data"),
        (status = 409, description = "Email already registered"),
    ),
    tag = "user_management",
)]
pub(crate) async fn post_user(
    state: State<AppState>,
    Json(request): Json<CreateUserRequestRestDTO>,
) -> Response {
    if let Err(error) = request.validate() {
        return (StatusCode::BAD_REQUEST, error.to_string()).into_response();
    }

    let result = state.core.user_service.register_user(request.into()).await;

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
    path = "/api/user/v1/{id}",
    responses(
        (status = 200, description = "OK", body = UserResponseRestDTO),
        (status = 404, description = "User not found"),
    ),
    params(
        ("id" = i64, Path, description = "User id")
    ),
    tag = "user_management",
)]
pub(crate) async fn get_user(state: State<AppState>, Path(id): Path<UserId>) -> Response {
    let result = state.core.user_service.get_user(&id).await;

    match result {
        Ok(value) => (StatusCode::OK, Json(UserResponseRestDTO::from(value))).into_response(),
        Err(error) => map_service_error(&error, state.config.hide_error_response_cause),
    }
}

#[utoipa::path(
    get,
    path = "/api/user/v1",
    responses(
        (status = 200, description = "OK", body = [UserResponseRestDTO]),
    ),
    tag = "user_management",
)]
pub(crate) async fn get_user_list(state: State<AppState>) -> Response {
    let result = state.core.user_service.get_user_list().await;

    match result {
        Ok(values) => (
            StatusCode::OK,
            Json(
                values
                    .into_iter()
                    .map(UserResponseRestDTO::from)
                    .collect::<Vec<_>>(),
            ),
        )
            .into_response(),
        Err(error) => map_service_error(&error, state.config.hide_error_response_cause),
    }
}
