mod account_label;
mod connect_button;
mod ethereum_provider;
pub mod network_selector;
pub mod select;

pub use account_label::{chain_label, AccountLabel};
pub use connect_button::ConnectButton;
pub use ethereum_provider::{EthereumProvider, EthereumProviderProps};
pub use network_selector::{NetworkSelector, NetworkSelectorProps};
pub use select::{Select, SelectOption, SelectProps};
