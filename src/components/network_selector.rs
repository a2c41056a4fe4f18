use std::collections::HashSet;

use yew::prelude::*;

use crate::chain::Chain;
use crate::components::account_label::chain_label;
use crate::components::select::{Select, SelectOption};
use crate::hooks::use_network;
use crate::network::NetworkContext;
use crate::selection::{DisconnectPolicy, Selection, SelectionAction, SwitchTrigger};
use crate::theme::Theme;

pub const DEFAULT_LABEL: &str = "Source Chain";
pub const DEFAULT_PLACEHOLDER: &str = "Select a chain";

#[derive(Properties, PartialEq)]
pub struct NetworkSelectorProps {
    #[prop_or(AttrValue::Static(DEFAULT_LABEL))]
    pub label: AttrValue,
    /// Prefix for the ids of the rendered label and button.
    #[prop_or(AttrValue::Static("network-selector"))]
    pub id: AttrValue,
    #[prop_or_default]
    pub theme: Theme,
    #[prop_or_default]
    pub disconnect_policy: DisconnectPolicy,
    #[prop_or_default]
    pub switch_trigger: SwitchTrigger,
}

/// One option per chain, in the order the wallet lists them. A repeated id
/// only shows up once.
pub fn option_list(network: &NetworkContext) -> Vec<SelectOption> {
    let mut seen = HashSet::new();
    network
        .chains()
        .iter()
        .filter(|chain| seen.insert(chain.id))
        .map(|chain| SelectOption {
            value: chain.id,
            label: AttrValue::from(chain.name.clone()),
        })
        .collect()
}

/// Button text when the selection matches no option: the active chain when
/// the wallet sits on one outside the list, otherwise a prompt.
pub fn placeholder(network: &NetworkContext, selection: Option<u64>) -> AttrValue {
    match network.active_chain() {
        Some(chain) if selection == Some(chain.id) => AttrValue::from(chain_label(chain)),
        _ => AttrValue::Static(DEFAULT_PLACEHOLDER),
    }
}

/// Commits a picked chain to the selection straight away, whatever the
/// wallet later makes of the switch.
pub fn value_change_handler(
    dispatch: Callback<SelectionAction>,
    network: NetworkContext,
    trigger: SwitchTrigger,
) -> Callback<u64> {
    Callback::from(move |chain_id| {
        dispatch.emit(SelectionAction::Picked(chain_id));
        if trigger == SwitchTrigger::ValueChange {
            network.switch_network(chain_id);
        }
    })
}

pub fn option_click_handler(network: NetworkContext, trigger: SwitchTrigger) -> Option<Callback<u64>> {
    match trigger {
        SwitchTrigger::OptionClick => Some(Callback::from(move |chain_id| {
            network.switch_network(chain_id);
        })),
        SwitchTrigger::ValueChange => None,
    }
}

#[function_component]
pub fn NetworkSelector(props: &NetworkSelectorProps) -> Html {
    let network = use_network();
    let active_chain = network.active_chain().cloned();
    let selection = use_reducer({
        let initial = active_chain.as_ref().map(|chain| chain.id);
        move || Selection::new(initial)
    });

    {
        let dispatcher = selection.dispatcher();
        let policy = props.disconnect_policy;
        use_effect_with_deps(
            move |active_chain: &Option<Chain>| {
                dispatcher.dispatch(SelectionAction::ActiveChainChanged {
                    chain_id: active_chain.as_ref().map(|chain| chain.id),
                    policy,
                });
                || ()
            },
            active_chain,
        );
    }

    let dispatch = {
        let dispatcher = selection.dispatcher();
        Callback::from(move |action| dispatcher.dispatch(action))
    };
    let on_change = value_change_handler(dispatch, network.clone(), props.switch_trigger);
    let on_option_click = option_click_handler(network.clone(), props.switch_trigger);

    let button_id = format!("{}-button", props.id);
    let label_id = format!("{}-label", props.id);

    html! {
        <div>
            <label id={label_id.clone()} for={button_id.clone()} style={props.theme.label_style()}>
                { props.label.clone() }
            </label>
            <Select
                id={button_id}
                value={selection.value()}
                placeholder={placeholder(&network, selection.value())}
                options={option_list(&network)}
                {on_change}
                {on_option_click}
                theme={props.theme}
                labelled_by={Some(AttrValue::from(label_id))}
            />
        </div>
    }
}
