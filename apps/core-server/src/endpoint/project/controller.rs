use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::{Json, http::StatusCode};
use shared_types::ProjectId;
use validator::Validate;

use super::dto::{CreateProjectRequestRestDTO, ProjectResponseRestDTO};
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::map_service_error;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/project/v1",
    request_body = CreateProjectRequestRestDTO,
    responses(
        (status = 200, description = "Created", body = EntityResponseRestDTO),
        (status = 400, description = "Invalid proposal or site not available"),
        (status = 404, description = "NGO, panchayat or site not found"),
    ),
    tag = "project_management",
)]
pub(crate) async fn post_project(
    state: State<AppState>,
    Json(request): Json<CreateProjectRequestRestDTO>,
) -> Response {
    if let Err(error) = request.validate() {
        return (StatusCode::BAD_REQUEST, error.to_string()).into_response();
    }

    let result = state.core.project_service.create_project(request.into()).await;

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
    path = "/api/project/v1/{id}",
    responses(
        (status = 200, description = "OK", body = ProjectResponseRestDTO),
        (status = 404, description = "Project not found"),
    ),
    params(
        ("id" = i64, Path, description = "Project id")
    ),
    tag = "project_management",
)]
pub(crate) async fn get_project(state: State<AppState>, Path(id): Path<ProjectId>) -> Response {
    let result = state.core.project_service.get_project(&id).await;

    match result {
        Ok(value) => (StatusCode::OK, Json(ProjectResponseRestDTO::from(value))).into_response(),
        Err(error) => map_service_error(&error, state.config.hide_error_response_cause),
    }
}

#[utoipa::path(
    get,
    path = "/api/project/v1",
    responses(
        (status = 200, description = "OK", body = [ProjectResponseRestDTO]),
    ),
    tag = "project_management",
)]
pub(crate) async fn get_project_list(state: State<AppState>) -> Response {
    let result = state.core.project_service.get_project_list().await;

    match result {
        Ok(values) => (
            StatusCode::OK,
            Json(
                values
                    .into_iter()
                    .map(ProjectResponseRestDTO::from)
                    .collect::<Vec<_>>(),
            ),
        )
            .into_response(),
        Err(error) => map_service_error(&error, state.config.hide_error_response_cause),
    }
}

#[utoipa::path(
    post,
    path = "/api/project/v1/{id}/submit",
    responses(
        (status = 204, description = "Submitted for verification"),
        (status = 400, description = "Project is not a draft"),
        (status = 404, description = "Project not found"),
    ),
    params(
        ("id" = i64, Path, description = "Project id")
    ),
    tag = "project_management",
)]
pub(crate) async fn submit_project(state: State<AppState>, Path(id): Path<ProjectId>) -> Response {
    let result = state.core.project_service.submit_project(&id).await;

    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => map_service_error(&error, state.config.hide_error_response_cause),
    }
}

#[utoipa::path(
    post,
    path = "/api/project/v1/{id}/start-plantation",
    responses(
        (status = 204, description = "Plantation started"),
        (status = 400, description = "Baseline not uploaded yet"),
        (status = 404, description = "Project not found"),
    ),
    params(
        ("id" = i64, Path, description = "Project id")
    ),
    tag = "project_management",
)]
pub(crate) async fn start_plantation(
    state: State<AppState>,
    Path(id): Path<ProjectId>,
) -> Response {
    let result = state.core.project_service.start_plantation(&id).await;

    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => map_service_error(&error, state.config.hide_error_response_cause),
    }
}

#[utoipa::path(
    post,
    path = "/api/project/v1/{id}/complete",
    responses(
        (status = 204, description = "Project completed"),
        (status = 400, description = "Project is not in monitoring"),
        (status = 404, description = "Project not found"),
    ),
    params(
        ("id" = i64, Path, description = "Project id")
    ),
    tag = "project_management",
)]
pub(crate) async fn complete_project(
    state: State<AppState>,
    Path(id): Path<ProjectId>,
) -> Response {
    let result = state.core.project_service.complete_project(&id).await;

    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => map_service_error(&error, state.config.hide_error_response_cause),
    }
}
