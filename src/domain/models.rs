use serde::{Deserialize, Serialize};

/// Value currently held by the storage contract, decimal encoded
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadValueResponse {
    pub value: String,
}

/// Confirmation for a completed write transaction
#[derive(Debug, Serialize, Deserialize)]
pub struct WriteValueResponse {
    pub value: String,
    pub transaction_hash: String,
    pub block_number: u64,
}

/// Details of the bound contract session
#[derive(Debug, Serialize, Deserialize)]
pub struct NetworkInfo {
    pub network_id: String,
    pub contract_address: String,
    pub sender_address: String,
}

/// Endpoint reachability probe result
#[derive(Debug, Serialize, Deserialize)]
pub struct ConnectionStatus {
    pub connected: bool,
    pub network_id: String,
    pub rpc_url: String,
}
