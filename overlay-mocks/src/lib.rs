//! overlay mocks - Component workbench for the overlay components
//!
//! Renders each component with interactive controls whose state lives in the
//! URL, so a given configuration can be shared or screenshotted.

pub mod mocks;
pub mod pages;
pub mod ui;

use dioxus::prelude::*;
use pages::{MockConfirmDialog, MockIndex, MockModal};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
/// Tailwind browser build, compiles utility classes at runtime
pub const TAILWIND_BROWSER: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    MockIndex {},
    #[route("/modal?:state")]
    MockModal { state: Option<String> },
    #[route("/confirm-dialog?:state")]
    MockConfirmDialog { state: Option<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_BROWSER }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
