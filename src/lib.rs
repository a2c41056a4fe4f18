pub mod chain;
pub mod components;
pub mod error;
pub mod hooks;
pub mod network;
pub mod selection;
pub mod theme;

pub use chain::Chain;
pub use error::ProviderError;
pub use network::NetworkContext;
pub use selection::{DisconnectPolicy, Selection, SelectionAction, SwitchTrigger};
pub use theme::Theme;
