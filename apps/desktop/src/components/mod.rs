//! Small display-only components: the loading spinner and the error notice.

use dioxus::prelude::*;

use crate::state::RETRY_HINT;

/// Indeterminate spinner shown while a lookup is in flight.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "spinner-row",
            div { class: "spinner" }
        }
    }
}

/// Failed-lookup notice: the failure message plus the fixed retry hint.
#[component]
pub fn ErrorNotice(message: String) -> Element {
    rsx! {
        div {
            class: "error-notice",
            "{message}{RETRY_HINT}"
        }
    }
}
