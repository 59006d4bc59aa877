//! Link card component

use crate::Route;
use dioxus::prelude::*;

/// Card-style link to a mock page
#[component]
pub fn LinkCard(to: Route, title: &'static str, description: &'static str) -> Element {
    rsx! {
        Link {
            to,
            class: "flex items-center justify-between gap-4 p-4 bg-gray-800 rounded-lg border border-gray-700 hover:bg-gray-700 transition-colors",
            div {
                div { class: "font-medium", "{title}" }
                div { class: "text-sm text-gray-400", "{description}" }
            }
            span { class: "text-gray-500", "→" }
        }
    }
}
