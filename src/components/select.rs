use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::theme::Theme;

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: u64,
    pub label: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct SelectProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub value: Option<u64>,
    pub options: Vec<SelectOption>,
    /// Fired when an option is committed, by click or keyboard.
    pub on_change: Callback<u64>,
    /// Fired when the content of an option is clicked.
    #[prop_or_default]
    pub on_option_click: Option<Callback<u64>>,
    #[prop_or_default]
    pub theme: Theme,
    #[prop_or_default]
    pub labelled_by: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: AttrValue,
}

pub fn next_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match current {
        Some(index) if index + 1 < len => index + 1,
        _ => 0,
    })
}

pub fn prev_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match current {
        Some(index) if index > 0 && index < len => index - 1,
        _ => len - 1,
    })
}

/// Single-value listbox: a toggle button and, while open, the list of options.
#[function_component]
pub fn Select(props: &SelectProps) -> Html {
    let open = use_state(|| false);
    let highlighted = use_state(|| None::<usize>);
    let selected_index = props
        .value
        .and_then(|value| props.options.iter().position(|option| option.value == value));

    let toggle = {
        let open = open.clone();
        let highlighted = highlighted.clone();
        Callback::from(move |_: MouseEvent| {
            if !*open {
                highlighted.set(selected_index);
            }
            open.set(!*open);
        })
    };

    let onkeydown = {
        let open = open.clone();
        let highlighted = highlighted.clone();
        let options = props.options.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: KeyboardEvent| {
            let len = options.len();
            match e.key().as_str() {
                "ArrowDown" => {
                    e.prevent_default();
                    highlighted.set(if *open {
                        next_index(*highlighted, len)
                    } else {
                        selected_index.or_else(|| next_index(None, len))
                    });
                    open.set(true);
                }
                "ArrowUp" => {
                    e.prevent_default();
                    highlighted.set(if *open {
                        prev_index(*highlighted, len)
                    } else {
                        selected_index.or_else(|| prev_index(None, len))
                    });
                    open.set(true);
                }
                "Home" if *open => {
                    e.prevent_default();
                    highlighted.set(next_index(None, len));
                }
                "End" if *open => {
                    e.prevent_default();
                    highlighted.set(prev_index(None, len));
                }
                "Enter" | " " => {
                    e.prevent_default();
                    if *open {
                        if let Some(option) = (*highlighted).and_then(|index| options.get(index)) {
                            on_change.emit(option.value);
                        }
                        open.set(false);
                    } else {
                        highlighted.set(selected_index);
                        open.set(true);
                    }
                }
                "Escape" => open.set(false),
                _ => {}
            }
        })
    };

    // Space activates buttons on keyup; it is already handled on keydown.
    let onkeyup = Callback::from(|e: KeyboardEvent| {
        if e.key() == " " {
            e.prevent_default();
        }
    });

    // Focus only lives on the button, so leaving it means leaving the widget.
    let onfocusout = {
        let open = open.clone();
        Callback::from(move |_: FocusEvent| open.set(false))
    };
    // Keeps focus on the button while an option is pressed.
    let keep_focus = Callback::from(|e: MouseEvent| e.prevent_default());

    let options = props.options.iter().enumerate().map(|(index, option)| {
        let value = option.value;
        let selected = props.value == Some(value);
        let onclick = {
            let on_change = props.on_change.clone();
            let open = open.clone();
            Callback::from(move |_: MouseEvent| {
                on_change.emit(value);
                open.set(false);
            })
        };
        let onmouseenter = {
            let highlighted = highlighted.clone();
            Callback::from(move |_: MouseEvent| highlighted.set(Some(index)))
        };
        let content_click = props
            .on_option_click
            .clone()
            .map(|on_option_click| Callback::from(move |_: MouseEvent| on_option_click.emit(value)));

        html! {
            <li
                key={value.to_string()}
                id={format!("{}-option-{}", props.id, value)}
                role="option"
                aria-selected={selected.to_string()}
                style={props.theme.option_style(selected, *highlighted == Some(index))}
                {onclick}
                {onmouseenter}
            >
                <div onclick={content_click}>{ option.label.clone() }</div>
            </li>
        }
    });

    let current = selected_index
        .and_then(|index| props.options.get(index))
        .map(|option| option.label.clone())
        .unwrap_or_else(|| props.placeholder.clone());

    html! {
        <div style="position: relative; display: inline-block;" {onfocusout}>
            <button
                type="button"
                id={props.id.clone()}
                aria-haspopup="listbox"
                aria-expanded={open.to_string()}
                aria-labelledby={props.labelled_by.clone()}
                style={props.theme.button_style(*open)}
                onclick={toggle}
                {onkeydown}
                {onkeyup}
            >
                { current }
                <span style="position: absolute; right: 10px;">
                    { if *open { "▴" } else { "▾" } }
                </span>
            </button>
            if *open {
                <ul
                    role="listbox"
                    id={format!("{}-listbox", props.id)}
                    aria-labelledby={props.labelled_by.clone()}
                    style={props.theme.listbox_style()}
                    onmousedown={keep_focus}
                >
                    { for options }
                </ul>
            }
        </div>
    }
}
