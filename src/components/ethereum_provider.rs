use yew::prelude::*;

use crate::chain::Chain;
use crate::hooks::{use_ethereum, UseEthereumHandle};
use crate::network::NetworkContext;

#[derive(Properties, PartialEq)]
pub struct EthereumProviderProps {
    /// Chains offered to the user, in display order.
    #[prop_or_else(Chain::defaults)]
    pub chains: Vec<Chain>,
    #[prop_or_default]
    pub children: Children,
}

/// Provides `Option<UseEthereumHandle>` and `NetworkContext` to its children.
/// Without an injected wallet the network context still lists the chains but
/// has no active chain and cannot switch.
#[function_component]
pub fn EthereumProvider(props: &EthereumProviderProps) -> Html {
    let ethereum = use_ethereum(props.chains.clone());
    let network = match &ethereum {
        Some(ethereum) => ethereum.network(),
        None => NetworkContext::new(props.chains.clone()),
    };

    html! {
        <ContextProvider<Option<UseEthereumHandle>> context={ethereum}>
            <ContextProvider<NetworkContext> context={network}>
                { for props.children.iter() }
            </ContextProvider<NetworkContext>>
        </ContextProvider<Option<UseEthereumHandle>>>
    }
}
