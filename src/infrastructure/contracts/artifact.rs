use std::collections::HashMap;
use std::fs;

use ethers::abi::Abi;
use ethers::types::{Address, TxHash};
use serde::Deserialize;

use crate::infrastructure::contracts::types::ContractError;

/// Deployment details recorded in the artifact for one network.
#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentRecord {
    pub address: Address,
    #[serde(rename = "transactionHash", default)]
    pub transaction_hash: Option<TxHash>,
}

/// Truffle-style build artifact: the contract interface plus the deployment
/// records written per network id at migration time.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractArtifact {
    #[serde(rename = "contractName", default)]
    pub contract_name: String,
    pub abi: Abi,
    #[serde(default)]
    pub networks: HashMap<String, DeploymentRecord>,
}

impl ContractArtifact {
    pub fn load(path: &str) -> Result<Self, ContractError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ContractError::ArtifactError(format!("Failed to read artifact file {}: {}", path, e))
        })?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ContractError> {
        serde_json::from_str(content)
            .map_err(|e| ContractError::ArtifactError(format!("Failed to parse artifact JSON: {}", e)))
    }

    /// Deployment record for the given network id.
    pub fn deployment_for(&self, network_id: &str) -> Result<&DeploymentRecord, ContractError> {
        self.networks
            .get(network_id)
            .ok_or_else(|| ContractError::LookupError {
                network_id: network_id.to_string(),
            })
    }
}
