//! Server-side render tests for the overlay components.
//!
//! Each case mounts a small app in a `VirtualDom` and inspects the HTML.

use dioxus::prelude::*;
use overlay_ui::{ConfirmDialog, Modal, ModalSize};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

const BACKDROP: &str = "data-part=\"backdrop\"";
const PANEL: &str = "data-part=\"panel\"";
const HEADER: &str = "data-part=\"header\"";
const CLOSE_BUTTON: &str = "aria-label=\"Close\"";

#[test]
fn test_closed_modal_renders_nothing() {
    fn app() -> Element {
        rsx! {
            Modal {
                is_open: false,
                on_close: |_| {},
                title: "Confirm",
                size: ModalSize::ExtraLarge,
                "Are you sure?"
            }
        }
    }

    let html = render(app);
    assert!(!html.contains("data-part"));
    assert!(!html.contains("Are you sure?"));
    assert!(!html.contains("Confirm"));
}

#[test]
fn test_open_modal_has_one_backdrop_and_one_panel() {
    fn app() -> Element {
        rsx! {
            Modal { is_open: true, on_close: |_| {}, "content" }
        }
    }

    let html = render(app);
    assert_eq!(count(&html, "data-part=\"overlay\""), 1);
    assert_eq!(count(&html, BACKDROP), 1);
    assert_eq!(count(&html, PANEL), 1);
}

#[test]
fn test_panel_is_not_inside_backdrop() {
    fn app() -> Element {
        rsx! {
            Modal { is_open: true, on_close: |_| {}, "content" }
        }
    }

    let html = render(app);
    let backdrop = html.find(BACKDROP).expect("backdrop rendered");
    let rest = &html[backdrop..];
    let backdrop_end = rest.find("</div>").expect("backdrop closed");
    // The backdrop element closes before any other element opens
    assert!(!rest[..backdrop_end].contains('<'));
    assert!(rest.find(PANEL).expect("panel rendered") > backdrop_end);
}

#[test]
fn test_confirm_scenario() {
    fn app() -> Element {
        rsx! {
            Modal { is_open: true, on_close: |_| {}, title: "Confirm", "Are you sure?" }
        }
    }

    let html = render(app);
    assert_eq!(count(&html, HEADER), 1);
    assert!(html.contains("Confirm</h2>"));
    assert_eq!(count(&html, CLOSE_BUTTON), 1);
    assert!(html.contains("Are you sure?"));
    assert!(html.contains("max-w-lg"));
    assert!(html.contains("aria-labelledby=\"modal-title-"));
}

#[test]
fn test_body_only_scenario() {
    fn app() -> Element {
        rsx! {
            Modal { is_open: true, on_close: |_| {}, show_close_button: false, "Body only" }
        }
    }

    let html = render(app);
    assert!(!html.contains(HEADER));
    assert!(!html.contains(CLOSE_BUTTON));
    assert!(!html.contains("aria-labelledby"));
    assert!(html.contains("data-part=\"body\""));
    assert!(html.contains("Body only"));
}

#[test]
fn test_empty_title_without_close_button_has_no_header() {
    fn app() -> Element {
        rsx! {
            Modal {
                is_open: true,
                on_close: |_| {},
                title: "",
                show_close_button: false,
                "Body"
            }
        }
    }

    let html = render(app);
    assert!(!html.contains(HEADER));
    assert!(!html.contains("<h2"));
}

#[test]
fn test_title_without_close_button() {
    fn app() -> Element {
        rsx! {
            Modal {
                is_open: true,
                on_close: |_| {},
                title: "Details",
                show_close_button: false,
                "Body"
            }
        }
    }

    let html = render(app);
    assert_eq!(count(&html, HEADER), 1);
    assert!(html.contains("Details</h2>"));
    assert!(!html.contains(CLOSE_BUTTON));
}

#[test]
fn test_close_button_without_title() {
    fn app() -> Element {
        rsx! {
            Modal { is_open: true, on_close: |_| {}, "Body" }
        }
    }

    let html = render(app);
    assert_eq!(count(&html, HEADER), 1);
    assert!(!html.contains("<h2"));
    assert_eq!(count(&html, CLOSE_BUTTON), 1);
}

#[test]
fn test_large_size_wins_over_caller_class() {
    fn app() -> Element {
        rsx! {
            Modal {
                is_open: true,
                on_close: |_| {},
                size: ModalSize::Large,
                class: "max-w-sm bg-gray-900",
                "Body"
            }
        }
    }

    let html = render(app);
    assert!(html.contains("max-w-2xl"));
    assert!(!html.contains("max-w-sm"));
    assert!(html.contains("bg-gray-900"));
    assert!(!html.contains("bg-gray-800"));
}

#[test]
fn test_each_size_maps_to_its_preset() {
    fn app() -> Element {
        rsx! {
            for size in ModalSize::ALL {
                Modal { is_open: true, on_close: |_| {}, size, "{size}" }
            }
        }
    }

    let html = render(app);
    for size in ModalSize::ALL {
        assert_eq!(count(&html, size.max_width_class()), 1, "{size}");
    }
}

#[test]
fn test_confirm_dialog_renders_actions() {
    fn app() -> Element {
        rsx! {
            ConfirmDialog {
                is_open: true,
                title: "Delete album?",
                message: "This cannot be undone.",
                confirm_label: "Delete",
                on_confirm: |_| {},
                on_cancel: |_| {},
            }
        }
    }

    let html = render(app);
    assert!(html.contains("Delete album?</h2>"));
    assert!(html.contains("This cannot be undone."));
    assert!(html.contains("Cancel"));
    assert!(html.contains("Delete"));
    assert!(html.contains("bg-red-600"));
    assert!(html.contains("max-w-md"));
}

#[test]
fn test_non_destructive_confirm_dialog_uses_primary_button() {
    fn app() -> Element {
        rsx! {
            ConfirmDialog {
                is_open: true,
                title: "Save changes?",
                message: "Your edits will be applied.",
                is_destructive: false,
                on_confirm: |_| {},
                on_cancel: |_| {},
            }
        }
    }

    let html = render(app);
    assert!(html.contains("bg-indigo-600"));
    assert!(!html.contains("bg-red-600"));
}
