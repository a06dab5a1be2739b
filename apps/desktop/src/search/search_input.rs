//! Title input and the Search trigger.

use dioxus::prelude::*;

use crate::state::*;

#[component]
pub fn SearchInput() -> Element {
    let query = SEARCH.read().query.clone();

    rsx! {
        div {
            class: "search-input-row",

            input {
                class: "search-input",
                r#type: "text",
                placeholder: "Enter a movie title",
                value: "{query}",
                autofocus: true,
                // Keystrokes only replace the query text; nothing fires
                // until the button does
                oninput: move |e: Event<FormData>| {
                    SEARCH.write().set_query(e.value());
                },
            }

            button {
                class: "search-button",
                onclick: move |_| start_search(),
                "Search"
            }
        }
    }
}
