use axum::{
    routing::get,
    Router,
};

use crate::handlers::AppState;

use super::storage::{check_connection, get_accounts, get_network_info, get_value, set_value};

async fn health_check() -> &'static str {
    "OK"
}

pub fn create_v1_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/accounts", get(get_accounts))
        .route("/storage/value", get(get_value).post(set_value))
        .route("/network-info", get(get_network_info))
        .route("/check-connection", get(check_connection))
        .with_state(app_state)
}
