use yew::prelude::*;

use crate::network::NetworkContext;

#[hook]
pub fn use_network() -> NetworkContext {
    use_context::<NetworkContext>().expect(
        "no network context found. you must wrap your components in an <EthereumProvider/>",
    )
}
