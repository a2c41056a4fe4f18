use std::cell::RefCell;
use std::rc::Rc;

use yew::Callback;
use yew_chain_selector::components::network_selector::{
    option_click_handler, option_list, value_change_handler, DEFAULT_LABEL,
};
use yew_chain_selector::{
    Chain, DisconnectPolicy, NetworkContext, Selection, SelectionAction, SwitchTrigger,
};

/// Drives the selector's handlers and sync effect the way the component
/// wires them, without a DOM.
struct Harness {
    selection: Rc<RefCell<Selection>>,
    switches: Rc<RefCell<Vec<u64>>>,
    network: NetworkContext,
    policy: DisconnectPolicy,
    trigger: SwitchTrigger,
    synced_with: Option<Option<Chain>>,
}

impl Harness {
    fn mount(network: NetworkContext, policy: DisconnectPolicy, trigger: SwitchTrigger) -> Self {
        let initial = network.active_chain().map(|chain| chain.id);
        let mut harness = Self {
            selection: Rc::new(RefCell::new(Selection::new(initial))),
            switches: Rc::new(RefCell::new(Vec::new())),
            network,
            policy,
            trigger,
            synced_with: None,
        };
        harness.run_effects();
        harness
    }

    fn switch_callback(&self) -> Callback<u64> {
        let switches = self.switches.clone();
        Callback::from(move |id| switches.borrow_mut().push(id))
    }

    fn dispatch(&self) -> Callback<SelectionAction> {
        let selection = self.selection.clone();
        Callback::from(move |action| {
            let next = selection.borrow().apply(action);
            *selection.borrow_mut() = next;
        })
    }

    /// Runs the sync effect only when the active chain changed.
    fn run_effects(&mut self) {
        let active = self.network.active_chain().cloned();
        if self.synced_with.as_ref() != Some(&active) {
            self.dispatch().emit(SelectionAction::ActiveChainChanged {
                chain_id: active.as_ref().map(|chain| chain.id),
                policy: self.policy,
            });
            self.synced_with = Some(active);
        }
    }

    fn provider_update(&mut self, network: NetworkContext) {
        self.network = network;
        self.run_effects();
    }

    fn committed(&self) -> Option<u64> {
        self.selection.borrow().value()
    }

    /// A mouse click: the option content handler fires, then the listbox
    /// commits the value.
    fn click_option(&self, id: u64) {
        if let Some(on_click) = option_click_handler(self.network.clone(), self.trigger) {
            on_click.emit(id);
        }
        value_change_handler(self.dispatch(), self.network.clone(), self.trigger).emit(id);
    }

    /// A keyboard commit only reaches the value-change handler.
    fn keyboard_select(&self, id: u64) {
        value_change_handler(self.dispatch(), self.network.clone(), self.trigger).emit(id);
    }
}

fn chains() -> Vec<Chain> {
    vec![Chain::new(1, "Mainnet"), Chain::new(137, "Polygon")]
}

fn connected(harness_switch: Callback<u64>, active: u64) -> NetworkContext {
    let active = chains().into_iter().find(|chain| chain.id == active);
    NetworkContext::new(chains())
        .with_active_chain(active)
        .with_switch_network(harness_switch)
}

fn mounted(policy: DisconnectPolicy, trigger: SwitchTrigger) -> Harness {
    let mut harness = Harness::mount(NetworkContext::new(chains()), policy, trigger);
    let network = connected(harness.switch_callback(), 1);
    harness.provider_update(network);
    harness
}

#[test]
fn test_initial_render_shows_active_chain() {
    let harness = mounted(DisconnectPolicy::RetainLast, SwitchTrigger::OptionClick);

    assert_eq!(DEFAULT_LABEL, "Source Chain");
    let labels: Vec<String> = option_list(&harness.network)
        .into_iter()
        .map(|option| option.label.to_string())
        .collect();
    assert_eq!(labels, vec!["Mainnet", "Polygon"]);
    assert_eq!(harness.committed(), Some(1));
}

#[test]
fn test_mount_with_active_chain_converges() {
    let harness = Harness::mount(
        NetworkContext::new(chains()).with_active_chain(Some(Chain::new(137, "Polygon"))),
        DisconnectPolicy::RetainLast,
        SwitchTrigger::OptionClick,
    );
    assert_eq!(harness.committed(), Some(137));
}

#[test]
fn test_active_chain_change_updates_without_user_action() {
    let mut harness = mounted(DisconnectPolicy::RetainLast, SwitchTrigger::OptionClick);

    let network = connected(harness.switch_callback(), 137);
    harness.provider_update(network);

    assert_eq!(harness.committed(), Some(137));
    assert!(harness.switches.borrow().is_empty());
}

#[test]
fn test_clicking_option_switches_and_commits() {
    let harness = mounted(DisconnectPolicy::RetainLast, SwitchTrigger::OptionClick);

    harness.click_option(137);

    assert_eq!(*harness.switches.borrow(), vec![137]);
    assert_eq!(harness.committed(), Some(137));
}

#[test]
fn test_keyboard_selection_commits_without_switching() {
    let harness = mounted(DisconnectPolicy::RetainLast, SwitchTrigger::OptionClick);

    harness.keyboard_select(137);

    assert_eq!(harness.committed(), Some(137));
    assert!(harness.switches.borrow().is_empty());
}

#[test]
fn test_keyboard_selection_switches_when_unified() {
    let harness = mounted(DisconnectPolicy::RetainLast, SwitchTrigger::ValueChange);

    harness.keyboard_select(137);
    harness.click_option(1);

    assert_eq!(*harness.switches.borrow(), vec![137, 1]);
    assert_eq!(harness.committed(), Some(1));
}

#[test]
fn test_disconnect_retains_last_value() {
    let mut harness = mounted(DisconnectPolicy::RetainLast, SwitchTrigger::OptionClick);
    harness.click_option(137);

    harness.provider_update(NetworkContext::new(chains()));

    assert_eq!(harness.committed(), Some(137));
}

#[test]
fn test_disconnect_resets_when_configured() {
    let mut harness = mounted(DisconnectPolicy::Reset, SwitchTrigger::OptionClick);

    harness.provider_update(NetworkContext::new(chains()));

    assert_eq!(harness.committed(), None);
}

#[test]
fn test_selection_without_switch_capability_still_commits() {
    let mut harness = Harness::mount(
        NetworkContext::new(chains()),
        DisconnectPolicy::RetainLast,
        SwitchTrigger::OptionClick,
    );
    harness.provider_update(
        NetworkContext::new(chains()).with_active_chain(Some(Chain::new(1, "Mainnet"))),
    );

    harness.click_option(137);
    harness.keyboard_select(1);

    assert!(!harness.network.can_switch());
    assert!(harness.switches.borrow().is_empty());
    assert_eq!(harness.committed(), Some(1));
}

#[test]
fn test_pick_survives_unchanged_provider_render() {
    let mut harness = mounted(DisconnectPolicy::RetainLast, SwitchTrigger::OptionClick);
    harness.keyboard_select(137);

    // Same active chain again: the sync effect does not rerun.
    let network = connected(harness.switch_callback(), 1);
    harness.provider_update(network);

    assert_eq!(harness.committed(), Some(137));
}
