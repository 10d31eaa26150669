use crate::api::routes::drift::detect_drift;
use crate::api::routes::health::health_check;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub fn create_router() -> Router {
    // the dashboard is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthcheck", get(health_check))
        .route("/drift/detect", post(detect_drift))
        .layer(cors)
}
