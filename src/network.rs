use std::rc::Rc;

use yew::Callback;

use crate::chain::Chain;

/// What a network selector needs from the wallet: the active chain, the
/// chains on offer and, when the wallet can do it, a way to switch.
///
/// Provided through Yew context by [`crate::components::EthereumProvider`];
/// tests and other wallets can build one directly.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkContext {
    active_chain: Option<Chain>,
    chains: Rc<[Chain]>,
    switch_network: Option<Callback<u64>>,
}

impl NetworkContext {
    pub fn new(chains: impl Into<Rc<[Chain]>>) -> Self {
        Self {
            active_chain: None,
            chains: chains.into(),
            switch_network: None,
        }
    }

    pub fn with_active_chain(mut self, chain: Option<Chain>) -> Self {
        self.active_chain = chain;
        self
    }

    pub fn with_switch_network(mut self, switch_network: Callback<u64>) -> Self {
        self.switch_network = Some(switch_network);
        self
    }

    pub fn active_chain(&self) -> Option<&Chain> {
        self.active_chain.as_ref()
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    pub fn can_switch(&self) -> bool {
        self.switch_network.is_some()
    }

    /// Asks the wallet to switch to `chain_id`. Returns whether a request was
    /// made; without a switch operation this is a no-op.
    pub fn switch_network(&self, chain_id: u64) -> bool {
        match &self.switch_network {
            Some(switch_network) => {
                log::debug!("requesting network switch to chain {chain_id}");
                switch_network.emit(chain_id);
                true
            }
            None => {
                log::debug!("network switch to chain {chain_id} skipped: wallet cannot switch");
                false
            }
        }
    }
}
