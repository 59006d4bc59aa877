//! Modal mock component

use super::framework::{ControlRegistryBuilder, MockPanel, Preset};
use crate::Route;
use dioxus::prelude::*;
use overlay_ui::{Button, ButtonSize, ButtonVariant, Modal, ModalSize};
use tracing::info;

const LONG_BODY_PARAGRAPHS: usize = 12;

#[component]
pub fn ModalMock(initial_state: Option<String>) -> Element {
    let registry = modal_controls().build(initial_state);

    registry.use_url_sync(|state| Route::MockModal { state });

    let is_open = registry.get_bool("open");
    let title = registry.get_string("title");
    let class = registry.get_string("custom_class");
    let show_close_button = registry.get_bool("close_button");
    let long_body = registry.get_bool("long_body");
    let size = registry
        .get_string("size")
        .parse::<ModalSize>()
        .unwrap_or_default();

    let open_registry = registry.clone();
    let close_registry = registry.clone();

    rsx! {
        MockPanel { title: "Modal", registry,
            div { class: "space-y-4",
                p { class: "text-sm text-gray-400",
                    "Panel max width: {size.max_width_rem()}rem ({size.max_width_px()}px)"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    onclick: move |_| {
                        info!("Opening modal mock");
                        open_registry.set_bool("open", true);
                    },
                    "Open modal"
                }
            }

            Modal {
                is_open,
                on_close: move |_| {
                    info!("Modal mock requested close");
                    close_registry.set_bool("open", false);
                },
                title,
                size,
                show_close_button,
                class,
                if long_body {
                    for i in 0..LONG_BODY_PARAGRAPHS {
                        p { key: "{i}", class: "text-gray-300 mb-4",
                            "Paragraph {i + 1}. The body scrolls inside the panel while the header stays in place."
                        }
                    }
                } else {
                    p { class: "text-gray-300", "Are you sure?" }
                }
            }
        }
    }
}

/// Controls and presets for the modal mock
fn modal_controls() -> ControlRegistryBuilder {
    ControlRegistryBuilder::new()
        .enum_control(
            "size",
            "Size",
            "md",
            ModalSize::ALL
                .iter()
                .map(|size| (size.as_str(), size_label(*size)))
                .collect(),
        )
        .text_control("title", "Title", "Dialog title")
        .text_control("custom_class", "Panel class", "")
        .doc("Extra classes merged onto the panel; max-width is always the size preset")
        .bool_control("open", "Open", true)
        .bool_control("close_button", "Close button", true)
        .bool_control("long_body", "Long body", false)
        .doc("Overflows the panel so the body scrolls")
        .with_presets(vec![
            Preset::new("Default"),
            Preset::new("Confirm").set_string("title", "Confirm"),
            Preset::new("Body only")
                .set_string("title", "")
                .set_bool("close_button", false),
            Preset::new("Untitled").set_string("title", ""),
            Preset::new("Large")
                .set_string("size", "lg")
                .set_string("title", "Release details"),
            Preset::new("Extra large")
                .set_string("size", "xl")
                .set_string("title", "Storage")
                .set_bool("long_body", true),
        ])
}

fn size_label(size: ModalSize) -> &'static str {
    match size {
        ModalSize::Small => "Small",
        ModalSize::Medium => "Medium",
        ModalSize::Large => "Large",
        ModalSize::ExtraLarge => "Extra large",
    }
}
