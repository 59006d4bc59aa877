//! Confirm dialog mock component

use super::framework::{ControlRegistryBuilder, MockPanel, Preset};
use crate::Route;
use dioxus::prelude::*;
use overlay_ui::{Button, ButtonSize, ButtonVariant, ConfirmDialog};
use tracing::info;

#[component]
pub fn ConfirmDialogMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .bool_control("open", "Open", true)
        .bool_control("destructive", "Destructive", true)
        .doc("Danger styling for the confirm action")
        .with_presets(vec![
            Preset::new("Delete"),
            Preset::new("Save").set_bool("destructive", false),
        ])
        .build(initial_state);

    registry.use_url_sync(|state| Route::MockConfirmDialog { state });

    let is_open = registry.get_bool("open");
    let is_destructive = registry.get_bool("destructive");
    let mut last_action = use_signal(|| None::<&'static str>);

    let (title, message, confirm_label) = if is_destructive {
        (
            "Delete album?",
            "This removes the album and its files from your library.",
            "Delete",
        )
    } else {
        (
            "Save changes?",
            "Your edits will be applied to every release.",
            "Save",
        )
    };

    let open_registry = registry.clone();
    let confirm_registry = registry.clone();
    let cancel_registry = registry.clone();

    rsx! {
        MockPanel { title: "Confirm Dialog", registry,
            div { class: "space-y-4",
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Medium,
                    onclick: move |_| open_registry.set_bool("open", true),
                    "Open dialog"
                }
                if let Some(action) = last_action() {
                    p { class: "text-sm text-gray-400", "Last action: {action}" }
                }
            }

            ConfirmDialog {
                is_open,
                title,
                message,
                confirm_label,
                is_destructive,
                on_confirm: move |_| {
                    info!("Confirm dialog mock confirmed");
                    last_action.set(Some("confirmed"));
                    confirm_registry.set_bool("open", false);
                },
                on_cancel: move |_| {
                    info!("Confirm dialog mock cancelled");
                    last_action.set(Some("cancelled"));
                    cancel_registry.set_bool("open", false);
                },
            }
        }
    }
}
