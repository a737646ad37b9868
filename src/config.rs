use std::env;

use ethers::types::Address;

use crate::infrastructure::contracts::types::ContractError;

/// Endpoint of the local Ganache test network.
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:7545";

/// Test account used as the transaction origin for writes. Must be an
/// account the node controls and keeps unlocked.
pub const DEFAULT_SENDER_ADDRESS: &str = "0xE98755082561Ba2f541B602E09bc1a452e63a674";

/// Build artifact holding the contract ABI and per-network deployments.
pub const DEFAULT_ARTIFACT_PATH: &str = "abis/SimpleStorage.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rpc_url: String,
    pub sender_address: Address,
    pub artifact_path: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ContractError> {
        let rpc_url = env::var("RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());

        let sender =
            env::var("SENDER_ADDRESS").unwrap_or_else(|_| DEFAULT_SENDER_ADDRESS.to_string());
        let sender_address = sender
            .parse::<Address>()
            .map_err(|e| ContractError::InvalidAddress(e.to_string()))?;

        let artifact_path =
            env::var("ARTIFACT_PATH").unwrap_or_else(|_| DEFAULT_ARTIFACT_PATH.to_string());

        Ok(AppConfig {
            rpc_url,
            sender_address,
            artifact_path,
        })
    }
}
