//! Confirm dialog built on [`Modal`]

use crate::components::{Button, ButtonSize, ButtonVariant, Modal, ModalSize};
use dioxus::prelude::*;

/// A confirmation dialog with cancel and confirm actions.
///
/// Dismissing through the backdrop or close button counts as cancel.
#[component]
pub fn ConfirmDialog(
    is_open: bool,
    title: String,
    message: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    #[props(default = "Cancel".to_string())] cancel_label: String,
    #[props(default = true)] is_destructive: bool,
    #[props(default = ModalSize::Small)] size: ModalSize,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let confirm_variant = if is_destructive {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Primary
    };

    rsx! {
        Modal {
            is_open,
            on_close: move |_| on_cancel.call(()),
            title,
            size,
            p { class: "text-gray-300 mb-6", "{message}" }
            div { class: "flex gap-3 justify-end",
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Medium,
                    onclick: move |_| on_cancel.call(()),
                    "{cancel_label}"
                }
                Button {
                    variant: confirm_variant,
                    size: ButtonSize::Medium,
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}
