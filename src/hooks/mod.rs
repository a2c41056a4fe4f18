mod use_ethereum;
mod use_network;

pub use use_ethereum::{use_ethereum, UseEthereumHandle};
pub use use_network::use_network;
