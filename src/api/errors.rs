use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::infrastructure::contracts::types::ContractError;

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub details: Option<serde_json::Value>,
}

/// API error types with corresponding HTTP status codes
#[derive(Debug)]
pub enum ApiError {
    // Client errors (4xx)
    BadRequest(String),
    NotFound(String),

    // Server errors (5xx)
    InternalServerError(String),
    ServiceUnavailable(String),

    // Contract-specific errors
    ContractError(ContractError),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::ContractError(contract_error) => match contract_error {
                ContractError::BindingError => StatusCode::SERVICE_UNAVAILABLE,
                ContractError::LookupError { .. } => StatusCode::NOT_FOUND,
                ContractError::RpcError(_) | ContractError::TransactionError(_) => {
                    StatusCode::BAD_GATEWAY
                }
                ContractError::InvalidAddress(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Get the error code string for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
            ApiError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            ApiError::ContractError(contract_error) => match contract_error {
                ContractError::BindingError => "BINDING_ERROR",
                ContractError::LookupError { .. } => "LOOKUP_ERROR",
                ContractError::TransactionError(_) => "TRANSACTION_ERROR",
                ContractError::RpcError(_) => "RPC_ERROR",
                _ => "CONTRACT_ERROR",
            },
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::InternalServerError(msg)
            | ApiError::ServiceUnavailable(msg) => msg.clone(),
            ApiError::ContractError(contract_error) => {
                format!("Contract error: {}", contract_error)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.message();

        let details = match &self {
            ApiError::ContractError(contract_error) => Some(serde_json::json!({
                "contract_error_type": format!("{:?}", contract_error)
            })),
            _ => None,
        };

        let error_response = ApiErrorResponse {
            success: false,
            error: message,
            error_code: error_code.to_string(),
            details,
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<ContractError> for ApiError {
    fn from(error: ContractError) -> Self {
        ApiError::ContractError(error)
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
