//! Mock pages with URL state persistence

use crate::mocks::framework::MockPage;
use crate::mocks::{ConfirmDialogMock, ModalMock};
use crate::ui::LinkCard;
use dioxus::prelude::*;

#[component]
pub fn MockIndex() -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white p-8",
            h1 { class: "text-2xl font-bold mb-6", "overlay mocks" }

            h2 { class: "text-lg font-semibold text-gray-400 mb-3", "Components" }
            div { class: "space-y-2",
                for page in MockPage::ALL.iter().copied() {
                    LinkCard {
                        key: "{page.label()}",
                        to: page.to_route(None),
                        title: page.label(),
                        description: page.description(),
                    }
                }
            }
        }
    }
}

#[component]
pub fn MockModal(state: Option<String>) -> Element {
    rsx! {
        ModalMock { initial_state: state }
    }
}

#[component]
pub fn MockConfirmDialog(state: Option<String>) -> Element {
    rsx! {
        ConfirmDialogMock { initial_state: state }
    }
}
