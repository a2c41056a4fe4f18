use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use serde_json::{json, Value};
use wasm_bindgen_futures::spawn_local;
use web3::futures::future::{abortable, AbortHandle, Abortable};
use web3::futures::{Stream, StreamExt};
use web3::transports::eip_1193::{Eip1193, Provider};
use web3::types::{Address, U256};
use web3::{Transport, Web3};
use yew::prelude::*;

use crate::chain::{hex_chain_id, AddChainParams, Chain};
use crate::error::ProviderError;
use crate::network::NetworkContext;

/// Wallet state tracked from an injected EIP-1193 provider (`window.ethereum`).
#[derive(Clone)]
pub struct UseEthereumHandle {
    transport: Eip1193,
    accounts: UseStateHandle<Vec<Address>>,
    chain_id: UseStateHandle<Option<u64>>,
    /// Set by `disconnect`, cleared by `connect`. Wallet events do not
    /// reconnect while it is set.
    disconnected: Rc<RefCell<bool>>,
    chains: Rc<[Chain]>,
    switch: Callback<u64>,
}

impl PartialEq for UseEthereumHandle {
    fn eq(&self, other: &Self) -> bool {
        *self.accounts == *other.accounts
            && *self.chain_id == *other.chain_id
            && self.chains == other.chains
            && self.switch == other.switch
    }
}

impl UseEthereumHandle {
    pub fn connected(&self) -> bool {
        !self.accounts.is_empty()
    }

    pub fn address(&self) -> Option<&Address> {
        self.accounts.first()
    }

    /// Shortened address, e.g. `0x1234…abcd`.
    pub fn display_address(&self) -> String {
        self.address().map(short_address).unwrap_or_default()
    }

    pub fn chain_id(&self) -> Option<u64> {
        *self.chain_id
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    /// The chain the wallet is on, if connected. Chains outside the configured
    /// list come back flagged `unsupported`.
    pub fn active_chain(&self) -> Option<Chain> {
        if !self.connected() {
            return None;
        }
        let id = self.chain_id()?;
        Some(
            self.chains
                .iter()
                .find(|chain| chain.id == id)
                .cloned()
                .unwrap_or_else(|| Chain::unsupported(id)),
        )
    }

    pub fn connect(&self) {
        *self.disconnected.borrow_mut() = false;
        let handle = self.clone();
        spawn_local(async move {
            match Web3::new(handle.transport.clone()).eth().request_accounts().await {
                Ok(accounts) => {
                    log::debug!("wallet connected with {} account(s)", accounts.len());
                    handle.accounts.set(accounts);
                }
                Err(err) => log::error!("failed to connect wallet: {}", ProviderError::from(err)),
            }
        });
    }

    /// Forgets the accounts locally; injected wallets cannot be disconnected
    /// from the page. Account events are ignored until `connect` is called.
    pub fn disconnect(&self) {
        *self.disconnected.borrow_mut() = true;
        self.accounts.set(Vec::new());
    }

    /// Fire-and-forget network switch. The new chain arrives through the
    /// wallet's `chainChanged` event.
    pub fn switch_chain(&self, chain_id: u64) {
        self.switch.emit(chain_id);
    }

    pub async fn try_switch_chain(&self, chain_id: u64) -> Result<(), ProviderError> {
        switch_chain(&self.transport, &self.chains, chain_id).await
    }

    /// The selector-facing view of this wallet. Switching is only offered
    /// while an account is connected.
    pub fn network(&self) -> NetworkContext {
        network_context(
            &self.chains,
            self.active_chain(),
            self.connected().then_some(&self.switch),
        )
    }
}

fn network_context(
    chains: &Rc<[Chain]>,
    active_chain: Option<Chain>,
    switch: Option<&Callback<u64>>,
) -> NetworkContext {
    let network = NetworkContext::new(chains.clone()).with_active_chain(active_chain);
    match switch {
        Some(switch) => network.with_switch_network(switch.clone()),
        None => network,
    }
}

async fn switch_chain(transport: &Eip1193, chains: &[Chain], chain_id: u64) -> Result<(), ProviderError> {
    let switch = json!({ "chainId": hex_chain_id(chain_id) });
    match request(transport, "wallet_switchEthereumChain", vec![switch]).await {
        Ok(_) => Ok(()),
        Err(err) if err.is_unrecognized_chain() => {
            let chain = chains
                .iter()
                .find(|chain| chain.id == chain_id)
                .ok_or(ProviderError::UnknownChain(chain_id))?;
            log::debug!("wallet does not know chain {chain_id}, adding it");
            let params = serde_json::to_value(AddChainParams::from(chain))?;
            request(transport, "wallet_addEthereumChain", vec![params]).await?;
            Ok(())
        }
        Err(err) => Err(err),
    }
}

async fn request(transport: &Eip1193, method: &str, params: Vec<Value>) -> Result<Value, ProviderError> {
    Ok(transport.execute(method, params).await?)
}

fn short_address(address: &Address) -> String {
    let full = format!("{address:?}");
    format!("{}…{}", &full[..6], &full[full.len() - 4..])
}

fn injected_transport() -> Option<Eip1193> {
    match Provider::default() {
        Ok(Some(provider)) => Some(Eip1193::new(provider)),
        Ok(None) => {
            log::warn!("{}", ProviderError::NotInstalled);
            None
        }
        Err(err) => {
            log::error!("failed to read injected provider: {}", ProviderError::from(err));
            None
        }
    }
}

/// Abort handles for the wallet listeners of one provider mount.
#[derive(Default)]
struct Subscriptions {
    handles: Vec<AbortHandle>,
}

impl Subscriptions {
    fn guard<F: Future>(&mut self, future: F) -> Abortable<F> {
        let (future, handle) = abortable(future);
        self.handles.push(handle);
        future
    }

    fn spawn<F: Future<Output = ()> + 'static>(&mut self, future: F) {
        let future = self.guard(future);
        spawn_local(async move {
            let _ = future.await;
        });
    }

    fn abort_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

/// Applies the initial value, then every change. `changes` has to be
/// subscribed before `initial` is requested so a change that lands in between
/// is applied after, not before, the stale initial value.
async fn follow<T, S>(
    initial: impl Future<Output = Option<T>>,
    changes: S,
    mut apply: impl FnMut(T),
) where
    S: Stream<Item = T>,
{
    let mut changes = Box::pin(changes);
    if let Some(value) = initial.await {
        apply(value);
    }
    while let Some(value) = changes.next().await {
        apply(value);
    }
}

/// Accounts to show after the wallet reports `incoming`, or `None` to keep
/// the local state.
fn accepted_accounts(locally_disconnected: bool, incoming: Vec<Address>) -> Option<Vec<Address>> {
    if locally_disconnected && !incoming.is_empty() {
        None
    } else {
        Some(incoming)
    }
}

fn track_wallet(
    transport: Eip1193,
    accounts: UseStateHandle<Vec<Address>>,
    chain_id: UseStateHandle<Option<u64>>,
    disconnected: Rc<RefCell<bool>>,
) -> Subscriptions {
    let mut subscriptions = Subscriptions::default();

    let changes = transport.accounts_changed_stream();
    let eth = Web3::new(transport.clone()).eth();
    subscriptions.spawn(follow(
        async move {
            eth.accounts()
                .await
                .map_err(|err| log::error!("failed to read accounts: {err}"))
                .ok()
        },
        changes,
        move |current: Vec<Address>| {
            log::debug!("accounts changed: {} account(s)", current.len());
            match accepted_accounts(*disconnected.borrow(), current) {
                Some(current) => accounts.set(current),
                None => log::debug!("ignoring accounts while disconnected"),
            }
        },
    ));

    let changes = transport.chain_changed_stream();
    let eth = Web3::new(transport).eth();
    subscriptions.spawn(follow(
        async move {
            eth.chain_id()
                .await
                .map_err(|err| log::error!("failed to read chain id: {err}"))
                .ok()
        },
        changes,
        move |id: U256| {
            log::debug!("chain changed to {id}");
            chain_id.set(Some(id.low_u64()));
        },
    ));

    subscriptions
}

#[hook]
pub fn use_ethereum(chains: Vec<Chain>) -> Option<UseEthereumHandle> {
    let transport = use_memo(|_| injected_transport(), ());
    let chains = use_memo(|chains: &Vec<Chain>| Rc::<[Chain]>::from(chains.clone()), chains);
    let accounts = use_state(Vec::new);
    let chain_id = use_state(|| None);
    let disconnected = use_mut_ref(|| false);

    let switch = {
        let transport = transport.clone();
        use_callback(
            move |chain_id: u64, chains: &Rc<[Chain]>| {
                let Some(transport) = (*transport).clone() else {
                    return;
                };
                let chains = chains.clone();
                spawn_local(async move {
                    if let Err(err) = switch_chain(&transport, &chains, chain_id).await {
                        log::error!("failed to switch to chain {chain_id}: {err}");
                    }
                });
            },
            (*chains).clone(),
        )
    };

    {
        let transport = transport.clone();
        let accounts = accounts.clone();
        let chain_id = chain_id.clone();
        let disconnected = disconnected.clone();
        use_effect_with_deps(
            move |_| {
                let mut subscriptions = match (*transport).clone() {
                    Some(transport) => track_wallet(transport, accounts, chain_id, disconnected),
                    None => Subscriptions::default(),
                };
                move || subscriptions.abort_all()
            },
            (),
        );
    }

    (*transport).clone().map(|transport| UseEthereumHandle {
        transport,
        accounts,
        chain_id,
        disconnected,
        chains: (*chains).clone(),
        switch,
    })
}
