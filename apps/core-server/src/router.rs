use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use memory_data_provider::DataLayer;
use registry_core::RegistryCore;
use registry_core::config::core_config::AppConfig;
use registry_core::provider::ledger::simulated::SimulatedLedger;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::ServerConfig;
use crate::dto;
use crate::endpoint::{
    self, carbon_credit, dashboard, field_data, misc, plantation_site, project, user, verification,
};

pub(crate) struct InternalAppState {
    pub core: RegistryCore,
    pub config: Arc<ServerConfig>,
}

pub(crate) type AppState = Arc<InternalAppState>;

pub async fn start_server(
    listener: TcpListener,
    config: AppConfig<ServerConfig>,
    data_layer: DataLayer,
) {
    listener.set_nonblocking(true).unwrap();

    let core = RegistryCore::new(
        Arc::new(data_layer),
        Arc::new(SimulatedLedger),
        config.core,
    );

    let config = Arc::new(config.app);
    let state: AppState = Arc::new(InternalAppState {
        core,
        config: config.to_owned(),
    });

    let addr = listener.local_addr().expect("Invalid TCP listener");
    info!("Starting server at http://{addr}");

    let router = router(state, config);

    axum::serve(
        tokio::net::TcpListener::from_std(listener)
            .expect("failed to convert to tokio TcpListener"),
        router.into_make_service(),
    )
    .await
    .expect("Failed to start axum server");
}

fn router(state: AppState, config: Arc<ServerConfig>) -> Router {
    let api = Router::new()
        .route(
            "/api/user/v1",
            get(user::controller::get_user_list).post(user::controller::post_user),
        )
        .route("/api/user/v1/{id}", get(user::controller::get_user))
        .route(
            "/api/plantation-site/v1",
            get(plantation_site::controller::get_plantation_site_list)
                .post(plantation_site::controller::post_plantation_site),
        )
        .route(
            "/api/plantation-site/v1/{id}",
            get(plantation_site::controller::get_plantation_site),
        )
        .route(
            "/api/project/v1",
            get(project::controller::get_project_list).post(project::controller::post_project),
        )
        .route("/api/project/v1/{id}", get(project::controller::get_project))
        .route(
            "/api/project/v1/{id}/submit",
            post(project::controller::submit_project),
        )
        .route(
            "/api/project/v1/{id}/start-plantation",
            post(project::controller::start_plantation),
        )
        .route(
            "/api/project/v1/{id}/complete",
            post(project::controller::complete_project),
        )
        .route(
            "/api/field-data/v1",
            get(field_data::controller::get_field_data_list)
                .post(field_data::controller::post_field_data),
        )
        .route(
            "/api/field-data/v1/{id}",
            get(field_data::controller::get_field_data),
        )
        .route(
            "/api/carbon-credit/v1",
            get(carbon_credit::controller::get_carbon_credit_list)
                .post(carbon_credit::controller::post_carbon_credit),
        )
        .route(
            "/api/carbon-credit/v1/{id}",
            get(carbon_credit::controller::get_carbon_credit),
        )
        .route(
            "/api/carbon-credit/v1/{id}/issue",
            post(carbon_credit::controller::issue_carbon_credit),
        )
        .route(
            "/api/verification/v1",
            get(verification::controller::get_verification_action_list)
                .post(verification::controller::post_verification),
        )
        .route(
            "/api/dashboard/v1",
            get(dashboard::controller::get_dashboard),
        );

    let technical_endpoints = if config.enable_server_info {
        Router::new().route("/health", get(misc::health_check))
    } else {
        Router::new()
    };

    let mut router = Router::new()
        .merge(api)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    info_span!(
                        "http_request",
                        method = %request.method(),
                        path = request.uri().path(),
                        service = "registry-core",
                    )
                })
                .on_request(|request: &Request<_>, _span: &Span| {
                    tracing::debug!(
                        "SERVICE CALL START {} {}",
                        request.method(),
                        request.uri().path()
                    )
                })
                .on_failure(|_, _, _: &_| {}) // override default on_failure handler
                .on_response(|response: &Response<_>, _: Duration, _span: &Span| {
                    tracing::debug!("SERVICE CALL END {}", response.status())
                }),
        );

    if config.enable_open_api {
        router = router.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", gen_openapi_documentation()),
        );
    }

    router
        .merge(technical_endpoints)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn gen_openapi_documentation() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            endpoint::user::controller::post_user,
            endpoint::user::controller::get_user,
            endpoint::user::controller::get_user_list,

            endpoint::plantation_site::controller::post_plantation_site,
            endpoint::plantation_site::controller::get_plantation_site,
            endpoint::plantation_site::controller::get_plantation_site_list,

            endpoint::project::controller::post_project,
            endpoint::project::controller::get_project,
            endpoint::project::controller::get_project_list,
            endpoint::project::controller::submit_project,
            endpoint::project::controller::start_plantation,
            endpoint::project::controller::complete_project,

            endpoint::field_data::controller::post_field_data,
            endpoint::field_data::controller::get_field_data,
            endpoint::field_data::controller::get_field_data_list,

            endpoint::carbon_credit::controller::post_carbon_credit,
            endpoint::carbon_credit::controller::issue_carbon_credit,
            endpoint::carbon_credit::controller::get_carbon_credit,
            endpoint::carbon_credit::controller::get_carbon_credit_list,

            endpoint::verification::controller::post_verification,
            endpoint::verification::controller::get_verification_action_list,

            endpoint::dashboard::controller::get_dashboard,

            endpoint::misc::health_check,
        ),
        components(
            schemas(
                dto::common::EntityResponseRestDTO,
                dto::error::ErrorResponseRestDTO,
                dto::error::ErrorCode,
                dto::error::Cause,
            )
        ),
        tags(
            (name = "other", description = "Other utility endpoints"),
            (name = "user_management", description = "User registration and approval"),
            (name = "plantation_site_management", description = "Plantation site management"),
            (name = "project_management", description = "Restoration project lifecycle"),
            (name = "field_data_management", description = "Field data submissions"),
            (name = "carbon_credit_management", description = "Carbon credit generation and issuance"),
            (name = "verification", description = "Verification workflow and audit log"),
            (name = "dashboard", description = "Aggregated registry statistics"),
        ),
    )]
    struct ApiDoc;

    ApiDoc::openapi()
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("PANIC occurred in request: {message}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "message": "Internal server error" })),
    )
        .into_response()
}
