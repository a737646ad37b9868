use axum::{extract::State, Json};
use ethers::types::U256;
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiResult;
use crate::domain::models::{ConnectionStatus, NetworkInfo, ReadValueResponse, WriteValueResponse};
use crate::handlers::AppState;

/// Value submitted when the request body carries none, matching the
/// reference UI's write button.
const DEFAULT_WRITE_VALUE: u64 = 100;

// ============ REQUEST/RESPONSE TYPES ============

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WriteValueApiRequest {
    #[serde(default)]
    pub value: Option<u64>,
}

// ============ HANDLERS ============

/// List the test accounts known to the endpoint
pub async fn get_accounts(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<String>>>> {
    let accounts = state.service.list_accounts().await?;

    Ok(Json(ApiResponse {
        success: true,
        data: Some(accounts),
        error: None,
    }))
}

/// Read the stored value from the bound contract
pub async fn get_value(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<ReadValueResponse>>> {
    let value = state.service.read_value().await?;

    Ok(Json(ApiResponse {
        success: true,
        data: Some(ReadValueResponse {
            value: value.to_string(),
        }),
        error: None,
    }))
}

/// Write the stored value through a transaction from the configured sender
pub async fn set_value(
    State(state): State<AppState>,
    Json(request): Json<WriteValueApiRequest>,
) -> ApiResult<Json<ApiResponse<WriteValueResponse>>> {
    let value = request.value.unwrap_or(DEFAULT_WRITE_VALUE);
    let response = state.service.write_value(U256::from(value)).await?;

    Ok(Json(ApiResponse {
        success: true,
        data: Some(response),
        error: None,
    }))
}

/// Network id, contract address and sender of the bound session
pub async fn get_network_info(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<NetworkInfo>>> {
    let info = state.service.network_info().await?;

    Ok(Json(ApiResponse {
        success: true,
        data: Some(info),
        error: None,
    }))
}

/// Probe the configured endpoint
pub async fn check_connection(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<ConnectionStatus>>> {
    let status = state.service.check_connection().await?;

    Ok(Json(ApiResponse {
        success: true,
        data: Some(status),
        error: None,
    }))
}
