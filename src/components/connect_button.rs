use yew::prelude::*;

use crate::hooks::UseEthereumHandle;

#[function_component]
pub fn ConnectButton() -> Html {
    let ethereum = use_context::<Option<UseEthereumHandle>>().expect(
        "no ethereum provider found. you must wrap your components in an <EthereumProvider/>",
    );

    match ethereum {
        Some(ethereum) => {
            let connected = ethereum.connected();
            let onclick = Callback::from(move |_: MouseEvent| {
                if ethereum.connected() {
                    ethereum.disconnect();
                } else {
                    ethereum.connect();
                }
            });
            html! {
                <button type="button" {onclick}>
                    { if connected { "Disconnect" } else { "Connect wallet" } }
                </button>
            }
        }
        None => html! {
            <button type="button" disabled=true>{"Connect wallet"}</button>
        },
    }
}
