use crate::chain::Chain;
use crate::hooks::UseEthereumHandle;
use yew::prelude::*;

pub fn chain_label(chain: &Chain) -> String {
    if chain.unsupported {
        format!("{} (unsupported)", chain.name)
    } else {
        chain.name.clone()
    }
}

#[function_component]
pub fn AccountLabel() -> Html {
    let ethereum = use_context::<Option<UseEthereumHandle>>().expect(
        "no ethereum provider found. you must wrap your components in an <EthereumProvider/>",
    );

    html! {
        <div>
            if let Some(ethereum) = ethereum {
                if ethereum.connected() {
                    {ethereum.display_address()}
                    if let Some(chain) = ethereum.active_chain() {
                        {format!(" on {}", chain_label(&chain))}
                    }
                } else {
                    {"Disconnected"}
                }
            } else {
                {"No ethereum provider found"}
            }
        </div>
    }
}
