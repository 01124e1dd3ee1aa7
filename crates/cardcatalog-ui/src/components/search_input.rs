//! Search Input Component
//!
//! Every search surface mounts one of these bound to the controller's raw
//! input, so typing into any of them updates all of them.

use dioxus::prelude::*;

/// Search input with icon
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// Raw text as the user typed it
    pub value: String,
    /// Handler called with the raw text on every keystroke
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default = "Search cards...".to_string())]
    pub placeholder: String,
    /// Element ID, distinct per surface
    #[props(default = "search".to_string())]
    pub id: String,
    /// Disabled until the catalog has loaded
    #[props(default = false)]
    pub disabled: bool,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-input-wrapper",
            span { class: "search-icon", "aria-hidden": "true", "\u{1F50D}" }
            input {
                id: "{props.id}",
                class: "search-input",
                r#type: "search",
                placeholder: "{props.placeholder}",
                "aria-label": "Search cards",
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
