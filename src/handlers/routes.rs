use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::v1::create_v1_router;
use crate::application::services::StorageService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<StorageService>,
}

pub fn create_router(service: Arc<StorageService>) -> Router {
    let state = AppState { service };

    Router::new()
        .nest("/v1", create_v1_router(state))
        .layer(CorsLayer::permissive()) // For local testing
        .layer(TraceLayer::new_for_http())
}
