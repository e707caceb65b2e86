use crate::data::types::ChainConfig;

/// Get a chain configuration preset by name. The contract this tool
/// targets is deployed on Sepolia, so that is the default preset.
pub fn get_chain_config(name: &str) -> Option<ChainConfig> {
    match name.to_lowercase().as_str() {
        "sepolia" => Some(ChainConfig {
            name: "Sepolia".to_string(),
            chain_id: 11155111,
            rpc_url: "https://ethereum-sepolia-rpc.publicnode.com".to_string(),
            symbol: "ETH".to_string(),
            explorer_url: Some("https://sepolia.etherscan.io".to_string()),
        }),
        "ethereum" | "eth" | "mainnet" => Some(ChainConfig {
            name: "Ethereum".to_string(),
            chain_id: 1,
            rpc_url: "https://eth.merkle.io".to_string(),
            symbol: "ETH".to_string(),
            explorer_url: Some("https://etherscan.io".to_string()),
        }),
        "holesky" => Some(ChainConfig {
            name: "Holesky".to_string(),
            chain_id: 17000,
            rpc_url: "https://ethereum-holesky-rpc.publicnode.com".to_string(),
            symbol: "ETH".to_string(),
            explorer_url: Some("https://holesky.etherscan.io".to_string()),
        }),
        _ => None,
    }
}

/// Return a list of all supported chain names.
pub fn supported_chains() -> Vec<&'static str> {
    vec!["sepolia", "ethereum", "holesky"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sepolia_config() {
        let config = get_chain_config("sepolia").unwrap();
        assert_eq!(config.chain_id, 11155111);
        assert_eq!(config.symbol, "ETH");
    }

    #[test]
    fn test_ethereum_aliases() {
        assert!(get_chain_config("eth").is_some());
        assert!(get_chain_config("mainnet").is_some());
        assert!(get_chain_config("Ethereum").is_some());
    }

    #[test]
    fn test_holesky_config() {
        let config = get_chain_config("holesky").unwrap();
        assert_eq!(config.chain_id, 17000);
    }

    #[test]
    fn test_unknown_chain() {
        assert!(get_chain_config("unknown").is_none());
    }

    #[test]
    fn test_supported_chains() {
        let chains = supported_chains();
        assert_eq!(chains.len(), 3);
        assert!(chains.contains(&"sepolia"));
    }
}
