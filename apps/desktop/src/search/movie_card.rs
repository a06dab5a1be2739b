//! Movie detail card — poster over the record's display fields.

use cinescope_core::MovieRecord;
use dioxus::prelude::*;

static PLACEHOLDER_POSTER: Asset = asset!("/assets/placeholder.svg");

#[component]
pub fn MovieCard(record: MovieRecord) -> Element {
    // Provider sends "N/A" when no poster exists for the title
    let poster_src = match record.poster_url() {
        Some(url) => url.to_string(),
        None => PLACEHOLDER_POSTER.to_string(),
    };

    rsx! {
        div {
            class: "movie-card",

            img {
                class: "movie-poster",
                src: "{poster_src}",
                alt: "{record.title}",
            }

            div {
                class: "movie-details",

                h2 { class: "movie-title", "{record.title}" }
                p { class: "movie-plot", "{record.plot}" }

                div {
                    class: "movie-meta",

                    span {
                        class: "meta-item",
                        CalendarIcon {}
                        "{record.year}"
                    }
                    span {
                        class: "meta-item",
                        StarIcon {}
                        "{record.imdb_rating}"
                    }
                    span { class: "meta-item", "{record.genre}" }
                    span { class: "meta-item", "Directed by {record.director}" }
                    span { class: "meta-item", "{record.actors}" }
                    span { class: "meta-item", "{record.runtime}" }
                    span {
                        class: "meta-item",
                        CalendarIcon {}
                        "Released {record.released}"
                    }
                }
            }
        }
    }
}

#[component]
fn CalendarIcon() -> Element {
    rsx! {
        svg {
            class: "meta-icon",
            width: "14",
            height: "14",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            rect { x: "3", y: "4", width: "18", height: "18", rx: "2" }
            line { x1: "16", y1: "2", x2: "16", y2: "6" }
            line { x1: "8", y1: "2", x2: "8", y2: "6" }
            line { x1: "3", y1: "10", x2: "21", y2: "10" }
        }
    }
}

#[component]
fn StarIcon() -> Element {
    rsx! {
        svg {
            class: "meta-icon",
            width: "14",
            height: "14",
            view_box: "0 0 24 24",
            fill: "currentColor",
            stroke: "none",
            polygon {
                points: "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26",
            }
        }
    }
}
