//! Root application component — titled card over a state-conditional body.

use dioxus::prelude::*;

use crate::components::{ErrorNotice, Spinner};
use crate::search::{MovieCard, SearchPanel};
use crate::state::*;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    // Consume the pre-runtime client exactly once
    use_hook(|| {
        if let Some(client) = crate::INITIAL_CLIENT.lock().unwrap().take() {
            *PROVIDER.write() = Some(client);
        }
    });

    let search = SEARCH.read();

    // Exactly one section renders; the state machine guarantees result and
    // error are never both present, and begin() clears both under loading.
    let body = if search.loading {
        rsx! { Spinner {} }
    } else if let Some(message) = search.error.clone() {
        rsx! { ErrorNotice { message } }
    } else if let Some(record) = search.result.clone() {
        rsx! { MovieCard { record } }
    } else {
        rsx! {}
    };

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            div {
                class: "search-card",

                header {
                    class: "card-header",
                    h1 { class: "card-title", "Movie Search" }
                    p { class: "card-subtitle", "Search for any movies and display details." }
                }

                SearchPanel {}

                {body}
            }
        }
    }
}
