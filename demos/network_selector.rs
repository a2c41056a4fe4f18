use yew::prelude::*;
use yew_chain_selector::components::{
    AccountLabel, ConnectButton, EthereumProvider, NetworkSelector,
};
use yew_chain_selector::Chain;

#[function_component]
fn App() -> Html {
    let chains = vec![
        Chain::mainnet(),
        Chain::polygon(),
        Chain::optimism(),
        Chain::arbitrum(),
        Chain::sepolia(),
    ];

    html! {
        <EthereumProvider {chains}>
            <ConnectButton />
            <AccountLabel />
            <NetworkSelector />
        </EthereumProvider>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    yew::Renderer::<App>::new().render();
}
