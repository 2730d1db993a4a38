pub mod escape;
pub mod middleware;
pub mod routes;

use std::path::Path;

use axum::{
    middleware as axum_middleware,
    response::Redirect,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::database::ActivityStore;
use routes::{activities, board, health};

/// Builds the full application router over `store`, serving the browser
/// client from `static_dir`.
pub fn router(store: ActivityStore, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .route("/health", get(health::health_handler))
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler).delete(activities::unregister_handler),
        )
        .route("/board", get(board::board_handler))
        .nest_service("/static", get_service(ServeDir::new(static_dir.as_ref())))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(axum_middleware::from_fn(middleware::request_log::log_requests))
        .layer(CatchPanicLayer::new())
        .with_state(store)
}
