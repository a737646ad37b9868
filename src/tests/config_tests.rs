#[cfg(test)]
mod tests {
    use ethers::types::Address;

    use crate::config::{
        AppConfig, DEFAULT_ARTIFACT_PATH, DEFAULT_RPC_URL, DEFAULT_SENDER_ADDRESS,
    };

    #[test]
    fn defaults_match_reference_deployment() {
        let config = AppConfig::from_env().expect("default config should load");

        assert_eq!(config.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(config.artifact_path, DEFAULT_ARTIFACT_PATH);

        let expected: Address = DEFAULT_SENDER_ADDRESS.parse().unwrap();
        assert_eq!(config.sender_address, expected);
    }

    #[test]
    fn default_sender_is_a_valid_address() {
        assert!(DEFAULT_SENDER_ADDRESS.parse::<Address>().is_ok());
    }
}
