//! Category List Component
//!
//! Vertical list of category filter controls. The desktop sidebar and the
//! mobile drawer each mount one, fed from the same frame.

use cardcatalog_core::CategoryControl;
use dioxus::prelude::*;

/// Properties for the CategoryList component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryListProps {
    /// Controls from the current frame, "All" first
    pub controls: Vec<CategoryControl>,
    /// Called with the control's raw value (`None` for "All")
    pub on_select: EventHandler<Option<String>>,
    /// Surface name, used as an extra CSS class ("desktop", "mobile")
    #[props(default = "desktop".to_string())]
    pub surface: String,
}

/// CSS class for a category control.
pub fn control_class(active: bool) -> &'static str {
    if active {
        "category-control active"
    } else {
        "category-control"
    }
}

/// Displays the selectable category controls
///
/// # Example
///
/// ```rust,ignore
/// let mut controller = use_catalog();
///
/// rsx! {
///     CategoryList {
///         controls: controller.read().frame().categories.clone(),
///         surface: "mobile".to_string(),
///         on_select: move |value: Option<String>| match value {
///             Some(cat) => controller.write().select_category(&cat),
///             None => controller.write().clear_category(),
///         }
///     }
/// }
/// ```
#[component]
pub fn CategoryList(props: CategoryListProps) -> Element {
    rsx! {
        nav {
            class: "category-list {props.surface}",
            role: "listbox",
            "aria-label": "Categories",
            for control in props.controls.iter() {
                {
                    let value = control.value.clone();
                    let key = match &control.value {
                        Some(v) => format!("cat:{v}"),
                        None => "all".to_string(),
                    };
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{key}",
                            class: control_class(control.active),
                            role: "option",
                            "aria-selected": if control.active { "true" } else { "false" },
                            onclick: move |_| {
                                tracing::debug!(category = ?value, "Category control clicked");
                                on_select.call(value.clone());
                            },
                            "{control.label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_class_reflects_active_state() {
        assert_eq!(control_class(true), "category-control active");
        assert_eq!(control_class(false), "category-control");
    }
}
