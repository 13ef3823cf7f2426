use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::{Json, http::StatusCode};

use super::dto::DashboardResponseRestDTO;
use crate::dto::error::map_service_error;
use crate::router::AppState;

#[utoipa::path(
    get,
    path = "/api/dashboard/v1",
    responses(
        (status = 200, description = "OK", body = DashboardResponseRestDTO),
    ),
    tag = "dashboard",
)]
pub(crate) async fn get_dashboard(state: State<AppState>) -> Response {
    let result = state.core.dashboard_service.get_dashboard().await;

    match result {
        Ok(value) => (StatusCode::OK, Json(DashboardResponseRestDTO::from(value))).into_response(),
        Err(error) => map_service_error(&error, state.config.hide_error_response_cause),
    }
}
