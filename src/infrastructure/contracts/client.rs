use std::sync::Arc;

use ethers::{
    contract::Contract,
    providers::{Http, Middleware, Provider},
    types::{Address, TransactionReceipt, U256},
};

use crate::infrastructure::contracts::artifact::ContractArtifact;
use crate::infrastructure::contracts::types::ContractError;

/// Open a connection handle to a network endpoint.
pub fn connect(rpc_url: &str) -> Result<Arc<Provider<Http>>, ContractError> {
    let provider =
        Provider::<Http>::try_from(rpc_url).map_err(|e| ContractError::RpcError(e.to_string()))?;

    Ok(Arc::new(provider))
}

// Client bound to the storage contract deployed on the active network
#[derive(Clone)]
pub struct StorageClient {
    provider: Arc<Provider<Http>>,
    contract: Contract<Provider<Http>>,
    sender: Address,
    network_id: String,
}

impl StorageClient {
    /// Resolve the endpoint's network id, look up the matching deployment
    /// record in the artifact and bind a contract instance to its address.
    pub async fn new(
        rpc_url: &str,
        sender: Address,
        artifact: &ContractArtifact,
    ) -> Result<Self, ContractError> {
        let provider = connect(rpc_url)?;

        let network_id = provider
            .get_net_version()
            .await
            .map_err(|e| ContractError::RpcError(e.to_string()))?;

        let record = artifact.deployment_for(&network_id)?;

        // Create the contract instance
        let contract = Contract::new(record.address, artifact.abi.clone(), provider.clone());

        Ok(Self {
            provider,
            contract,
            sender,
            network_id,
        })
    }

    /// Address the contract instance is bound to
    pub fn address(&self) -> Address {
        self.contract.address()
    }

    pub fn sender(&self) -> Address {
        self.sender
    }

    pub fn network_id(&self) -> &str {
        &self.network_id
    }

    /// Accounts the endpoint controls, in the endpoint's order.
    pub async fn list_accounts(&self) -> Result<Vec<Address>, ContractError> {
        self.provider
            .get_accounts()
            .await
            .map_err(|e| ContractError::RpcError(e.to_string()))
    }

    /// Call the contract's read-only getter.
    pub async fn get_value(&self) -> Result<U256, ContractError> {
        let call = self
            .contract
            .method::<_, U256>("getter", ())
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?;

        call.call()
            .await
            .map_err(|e| ContractError::ContractCallError(e.to_string()))
    }

    /// Submit the contract's setter as a transaction. The configured sender
    /// is the transaction origin and must be an account the node keeps
    /// unlocked, so no local signing key is involved.
    pub async fn set_value(&self, value: U256) -> Result<TransactionReceipt, ContractError> {
        let call = self
            .contract
            .method::<_, ()>("setter", (value,))
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?;

        // send the transaction
        let call_with_sender = call.from(self.sender);
        let pending_tx = call_with_sender
            .send()
            .await
            .map_err(|e| ContractError::TransactionError(e.to_string()))?;

        // wait for the transaction to be mined
        let receipt = pending_tx
            .await
            .map_err(|e| ContractError::TransactionError(e.to_string()))?
            .ok_or_else(|| ContractError::TransactionError("Transaction failed".to_string()))?;

        // Check if transaction was successful
        if let Some(status) = receipt.status {
            if status == 0.into() {
                return Err(ContractError::TransactionError(
                    "Transaction reverted".to_string(),
                ));
            }
        }

        Ok(receipt)
    }
}
