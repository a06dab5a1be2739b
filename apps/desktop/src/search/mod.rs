//! Search panel — input field + trigger button, and the movie detail card.

mod movie_card;
mod search_input;

use dioxus::prelude::*;
pub use movie_card::MovieCard;
use search_input::SearchInput;

/// Search panel spanning the full width of the card.
#[component]
pub fn SearchPanel() -> Element {
    rsx! {
        div {
            class: "search-panel",
            SearchInput {}
        }
    }
}
