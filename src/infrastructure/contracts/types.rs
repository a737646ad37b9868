/// Contract interaction errors
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    #[error("RPC error: {0}")]
    RpcError(String),

    #[error("No deployment record for network id {network_id}")]
    LookupError { network_id: String },

    #[error("Contract session is not initialized")]
    BindingError,

    #[error("Transaction failed: {0}")]
    TransactionError(String),

    #[error("Contract call failed: {0}")]
    ContractCallError(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Artifact error: {0}")]
    ArtifactError(String),
}
