use std::rc::Rc;

use yew::Reducible;

/// What happens to the selected chain when the wallet stops reporting one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisconnectPolicy {
    /// Keep showing the last chain.
    #[default]
    RetainLast,
    /// Clear the selection.
    Reset,
}

/// Which user action asks the wallet to switch networks.
///
/// With `OptionClick` the switch is bound to a click on an option's content
/// while committing the value is bound to the listbox's change handler. A
/// mouse click fires both, a keyboard commit only changes the value.
/// `ValueChange` routes every committed value to the wallet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwitchTrigger {
    #[default]
    OptionClick,
    ValueChange,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionAction {
    ActiveChainChanged {
        chain_id: Option<u64>,
        policy: DisconnectPolicy,
    },
    Picked(u64),
}

/// The chain id the selector currently shows as chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    value: Option<u64>,
}

impl Selection {
    pub fn new(value: Option<u64>) -> Self {
        Self { value }
    }

    pub fn value(&self) -> Option<u64> {
        self.value
    }

    pub fn apply(self, action: SelectionAction) -> Self {
        match action {
            SelectionAction::ActiveChainChanged {
                chain_id: Some(id), ..
            } => Self::new(Some(id)),
            SelectionAction::ActiveChainChanged {
                chain_id: None,
                policy: DisconnectPolicy::RetainLast,
            } => self,
            SelectionAction::ActiveChainChanged {
                chain_id: None,
                policy: DisconnectPolicy::Reset,
            } => Self::new(None),
            SelectionAction::Picked(id) => Self::new(Some(id)),
        }
    }
}

impl Reducible for Selection {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
