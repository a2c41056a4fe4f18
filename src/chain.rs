use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl NativeCurrency {
    pub fn new(name: &str, symbol: &str, decimals: u8) -> Self {
        Self {
            name: name.to_owned(),
            symbol: symbol.to_owned(),
            decimals,
        }
    }
}

/// A blockchain network the wallet can be pointed at.
///
/// Only `id` and `name` are needed to render a selector entry. The remaining
/// fields are what a wallet wants to see in `wallet_addEthereumChain` when it
/// does not know the chain yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_currency: Option<NativeCurrency>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rpc_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub block_explorer_urls: Vec<String>,
    /// Set when the wallet reports a chain id missing from the configured list.
    #[serde(default, skip_serializing)]
    pub unsupported: bool,
}

impl Chain {
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_owned(),
            native_currency: None,
            rpc_urls: Vec::new(),
            block_explorer_urls: Vec::new(),
            unsupported: false,
        }
    }

    pub fn unsupported(id: u64) -> Self {
        Self {
            unsupported: true,
            ..Self::new(id, &format!("Chain {id}"))
        }
    }

    pub fn with_native_currency(mut self, currency: NativeCurrency) -> Self {
        self.native_currency = Some(currency);
        self
    }

    pub fn with_rpc_url(mut self, url: &str) -> Self {
        self.rpc_urls.push(url.to_owned());
        self
    }

    pub fn with_block_explorer_url(mut self, url: &str) -> Self {
        self.block_explorer_urls.push(url.to_owned());
        self
    }

    /// Chain id in the `0x`-prefixed form wallets expect.
    pub fn hex_id(&self) -> String {
        hex_chain_id(self.id)
    }

    pub fn mainnet() -> Self {
        Self::new(1, "Ethereum")
            .with_native_currency(NativeCurrency::new("Ether", "ETH", 18))
            .with_rpc_url("https://cloudflare-eth.com")
            .with_block_explorer_url("https://etherscan.io")
    }

    pub fn polygon() -> Self {
        Self::new(137, "Polygon")
            .with_native_currency(NativeCurrency::new("MATIC", "MATIC", 18))
            .with_rpc_url("https://polygon-rpc.com")
            .with_block_explorer_url("https://polygonscan.com")
    }

    pub fn optimism() -> Self {
        Self::new(10, "OP Mainnet")
            .with_native_currency(NativeCurrency::new("Ether", "ETH", 18))
            .with_rpc_url("https://mainnet.optimism.io")
            .with_block_explorer_url("https://optimistic.etherscan.io")
    }

    pub fn arbitrum() -> Self {
        Self::new(42161, "Arbitrum One")
            .with_native_currency(NativeCurrency::new("Ether", "ETH", 18))
            .with_rpc_url("https://arb1.arbitrum.io/rpc")
            .with_block_explorer_url("https://arbiscan.io")
    }

    pub fn sepolia() -> Self {
        Self::new(11155111, "Sepolia")
            .with_native_currency(NativeCurrency::new("Sepolia Ether", "SEP", 18))
            .with_rpc_url("https://rpc.sepolia.org")
            .with_block_explorer_url("https://sepolia.etherscan.io")
    }

    /// Chains offered when the application does not configure its own list.
    pub fn defaults() -> Vec<Chain> {
        vec![Self::mainnet(), Self::polygon()]
    }
}

pub fn hex_chain_id(id: u64) -> String {
    format!("0x{id:x}")
}

/// Parameters of a `wallet_addEthereumChain` request (EIP-3085).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddChainParams {
    pub chain_id: String,
    pub chain_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_currency: Option<NativeCurrency>,
    pub rpc_urls: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub block_explorer_urls: Vec<String>,
}

impl From<&Chain> for AddChainParams {
    fn from(chain: &Chain) -> Self {
        Self {
            chain_id: chain.hex_id(),
            chain_name: chain.name.clone(),
            native_currency: chain.native_currency.clone(),
            rpc_urls: chain.rpc_urls.clone(),
            block_explorer_urls: chain.block_explorer_urls.clone(),
        }
    }
}

/// Parses a JSON array of chains, keeping the order given.
pub fn chains_from_json(json: &str) -> Result<Vec<Chain>, ProviderError> {
    let chains: Vec<Chain> = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    for chain in &chains {
        if !seen.insert(chain.id) {
            return Err(ProviderError::DuplicateChain(chain.id));
        }
    }
    Ok(chains)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_id_is_lowercase_and_prefixed() {
        assert_eq!(Chain::mainnet().hex_id(), "0x1");
        assert_eq!(Chain::polygon().hex_id(), "0x89");
        assert_eq!(Chain::sepolia().hex_id(), "0xaa36a7");
    }

    #[test]
    fn unsupported_chain_gets_placeholder_name() {
        let chain = Chain::unsupported(56);
        assert_eq!(chain.name, "Chain 56");
        assert!(chain.unsupported);
    }

    #[test]
    fn parses_minimal_chain_list_in_order() {
        let chains =
            chains_from_json(r#"[{"id":137,"name":"Polygon"},{"id":1,"name":"Mainnet"}]"#)
                .unwrap();
        assert_eq!(
            chains,
            vec![Chain::new(137, "Polygon"), Chain::new(1, "Mainnet")]
        );
    }

    #[test]
    fn parses_camel_case_metadata() {
        let chains = chains_from_json(
            r#"[{
                "id": 10,
                "name": "OP Mainnet",
                "nativeCurrency": {"name": "Ether", "symbol": "ETH", "decimals": 18},
                "rpcUrls": ["https://mainnet.optimism.io"],
                "blockExplorerUrls": ["https://optimistic.etherscan.io"]
            }]"#,
        )
        .unwrap();
        assert_eq!(chains, vec![Chain::optimism()]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = chains_from_json(r#"[{"id":1,"name":"A"},{"id":1,"name":"B"}]"#).unwrap_err();
        assert!(matches!(err, ProviderError::DuplicateChain(1)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = chains_from_json(r#"[{"name":"no id"}]"#).unwrap_err();
        assert!(matches!(err, ProviderError::Json(_)));
    }

    #[test]
    fn add_chain_params_use_wallet_field_names() {
        let params = AddChainParams::from(&Chain::polygon());
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["chainId"], "0x89");
        assert_eq!(value["chainName"], "Polygon");
        assert_eq!(value["nativeCurrency"]["symbol"], "MATIC");
        assert_eq!(value["rpcUrls"][0], "https://polygon-rpc.com");
        assert_eq!(value["blockExplorerUrls"][0], "https://polygonscan.com");
    }

    #[test]
    fn unsupported_flag_is_not_serialized() {
        let value = serde_json::to_value(Chain::unsupported(5)).unwrap();
        assert!(value.get("unsupported").is_none());
    }
}
