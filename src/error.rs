use wasm_bindgen::JsValue;

#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    #[error("no injected ethereum provider found")]
    NotInstalled,

    #[error("chain {0} is not configured")]
    UnknownChain(u64),

    #[error("duplicate chain id: {0}")]
    DuplicateChain(u64),

    #[error("wallet error: {0}")]
    Web3(#[from] web3::Error),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<JsValue> for ProviderError {
    fn from(value: JsValue) -> Self {
        ProviderError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Wallet code for "unrecognized chain id" returned by `wallet_switchEthereumChain`.
pub const UNRECOGNIZED_CHAIN: i64 = 4902;

impl ProviderError {
    /// Whether the wallet rejected a switch because it does not know the chain.
    pub fn is_unrecognized_chain(&self) -> bool {
        match self {
            ProviderError::Web3(web3::Error::Rpc(err)) => err.code.code() == UNRECOGNIZED_CHAIN,
            _ => false,
        }
    }
}
