use ethers::providers::Middleware;
use ethers::types::U256;
use ethers::utils::to_checksum;
use tokio::sync::RwLock;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::models::{ConnectionStatus, NetworkInfo, WriteValueResponse};
use crate::infrastructure::contracts::artifact::ContractArtifact;
use crate::infrastructure::contracts::client::{self, StorageClient};
use crate::infrastructure::contracts::types::ContractError;

/// Binding state of the contract session. Written once by initialize,
/// read by every action.
enum SessionState {
    Uninitialized,
    Bound(StorageClient),
}

/// Service layer owning the contract session
/// Handles the connect, resolve and bind sequence and delegates the
/// user-triggered actions to the bound client.
pub struct StorageService {
    config: AppConfig,
    session: RwLock<SessionState>,
}

impl StorageService {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            session: RwLock::new(SessionState::Uninitialized),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Connect to the configured endpoint, resolve the network id and bind
    /// the contract instance. Re-invocation overwrites an existing binding.
    /// On failure the session keeps its previous state.
    pub async fn initialize(&self) -> Result<(), ContractError> {
        let artifact = ContractArtifact::load(&self.config.artifact_path)?;

        let client =
            StorageClient::new(&self.config.rpc_url, self.config.sender_address, &artifact)
                .await?;

        info!(
            network_id = client.network_id(),
            address = %to_checksum(&client.address(), None),
            "Contract session bound"
        );

        let mut session = self.session.write().await;
        *session = SessionState::Bound(client);
        Ok(())
    }

    pub async fn is_bound(&self) -> bool {
        matches!(&*self.session.read().await, SessionState::Bound(_))
    }

    /// List the endpoint's test accounts. Works before the session is bound
    /// by opening a fresh connection handle from configuration.
    pub async fn list_accounts(&self) -> Result<Vec<String>, ContractError> {
        let session = self.session.read().await;
        let accounts = match &*session {
            SessionState::Bound(client) => client.list_accounts().await?,
            SessionState::Uninitialized => {
                let provider = client::connect(&self.config.rpc_url)?;
                provider
                    .get_accounts()
                    .await
                    .map_err(|e| ContractError::RpcError(e.to_string()))?
            }
        };

        info!(count = accounts.len(), "Fetched test accounts");
        Ok(accounts.iter().map(|a| to_checksum(a, None)).collect())
    }

    /// Read the stored value through the bound contract instance.
    pub async fn read_value(&self) -> Result<U256, ContractError> {
        let session = self.session.read().await;
        match &*session {
            SessionState::Bound(client) => {
                let value = client.get_value().await?;
                info!(value = %value, "Read stored value");
                Ok(value)
            }
            SessionState::Uninitialized => Err(ContractError::BindingError),
        }
    }

    /// Write the stored value as a transaction from the configured sender.
    pub async fn write_value(&self, value: U256) -> Result<WriteValueResponse, ContractError> {
        let session = self.session.read().await;
        match &*session {
            SessionState::Bound(client) => {
                let receipt = client.set_value(value).await?;

                let response = WriteValueResponse {
                    value: value.to_string(),
                    transaction_hash: format!("{:?}", receipt.transaction_hash),
                    block_number: receipt.block_number.unwrap_or_default().as_u64(),
                };

                info!(
                    transaction_hash = %response.transaction_hash,
                    block_number = response.block_number,
                    "Wrote stored value"
                );
                Ok(response)
            }
            SessionState::Uninitialized => Err(ContractError::BindingError),
        }
    }

    /// Details of the bound session.
    pub async fn network_info(&self) -> Result<NetworkInfo, ContractError> {
        let session = self.session.read().await;
        match &*session {
            SessionState::Bound(client) => Ok(NetworkInfo {
                network_id: client.network_id().to_string(),
                contract_address: to_checksum(&client.address(), None),
                sender_address: to_checksum(&client.sender(), None),
            }),
            SessionState::Uninitialized => Err(ContractError::BindingError),
        }
    }

    /// Probe the configured endpoint over a fresh connection handle.
    pub async fn check_connection(&self) -> Result<ConnectionStatus, ContractError> {
        let provider = client::connect(&self.config.rpc_url)?;
        let network_id = provider
            .get_net_version()
            .await
            .map_err(|e| ContractError::RpcError(e.to_string()))?;

        Ok(ConnectionStatus {
            connected: true,
            network_id,
            rpc_url: self.config.rpc_url.clone(),
        })
    }
}
