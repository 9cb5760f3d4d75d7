//! Filter Input Component
//!
//! The text field whose value filters the product grid.
//! Features:
//! - Stable element id so the page can locate it
//! - Value changes reported on input, evaluation triggered on key release

use dioxus::prelude::*;

/// Properties for the FilterInput component
#[derive(Clone, PartialEq, Props)]
pub struct FilterInputProps {
    /// Current query text
    pub value: String,
    /// Handler called with the new text on every edit
    pub oninput: EventHandler<String>,
    /// Handler called on every key release
    pub onkeyup: EventHandler<()>,
    /// Element id of the input
    #[props(default = "filterInput".to_string())]
    pub id: String,
    /// Placeholder text
    #[props(default = "filter by title, model, service tag, user or computer...".to_string())]
    pub placeholder: String,
    /// Optional label text
    #[props(default)]
    pub label: Option<String>,
}

/// Text input driving the live filter
///
/// No debouncing: every key release triggers `onkeyup`. The parent reads
/// its own copy of the query at that moment, so the value is always the
/// one visible in the field.
///
/// # Example
///
/// ```rust,ignore
/// let mut query = use_signal(String::new);
///
/// rsx! {
///     FilterInput {
///         value: query(),
///         oninput: move |s| query.set(s),
///         onkeyup: move |_| refilter(),
///     }
/// }
/// ```
#[component]
pub fn FilterInput(props: FilterInputProps) -> Element {
    let onkeyup = props.onkeyup;

    rsx! {
        div { class: "filter-input-wrapper",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{props.id}",
                    "{label}"
                }
            }
            span { class: "search-icon", "\u{1F50D}" }
            input {
                id: "{props.id}",
                class: "input-field filter-input",
                r#type: "search",
                autocomplete: "off",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
                onkeyup: move |_| onkeyup.call(()),
            }
        }
    }
}
