//! Modal overlay component
//!
//! A controlled overlay: the parent owns visibility and content and passes them
//! in on every render. The modal never closes itself, it only asks via `on_close`.
//!
//! Layout is a fixed full-viewport layer holding two siblings, a dimmed backdrop
//! and the centered panel. Because the panel is not a child of the backdrop, a
//! click inside the panel never reaches the backdrop's handler.
//!
//! Focus trapping, Escape handling and scroll locking are left to the host page.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::cn;
use crate::components::{ChromelessButton, XIcon};

/// Counter for generating unique title IDs
static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Width preset for the modal panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModalSize {
    /// 28rem (448px)
    Small,
    /// 32rem (512px)
    #[default]
    Medium,
    /// 42rem (672px)
    Large,
    /// 56rem (896px)
    ExtraLarge,
}

impl ModalSize {
    pub const ALL: [ModalSize; 4] = [
        ModalSize::Small,
        ModalSize::Medium,
        ModalSize::Large,
        ModalSize::ExtraLarge,
    ];

    /// Tailwind max-width utility for this preset
    pub fn max_width_class(self) -> &'static str {
        match self {
            ModalSize::Small => "max-w-md",
            ModalSize::Medium => "max-w-lg",
            ModalSize::Large => "max-w-2xl",
            ModalSize::ExtraLarge => "max-w-4xl",
        }
    }

    pub fn max_width_rem(self) -> u32 {
        match self {
            ModalSize::Small => 28,
            ModalSize::Medium => 32,
            ModalSize::Large => 42,
            ModalSize::ExtraLarge => 56,
        }
    }

    /// Max width in CSS pixels at the default 16px root font size
    pub fn max_width_px(self) -> u32 {
        self.max_width_rem() * 16
    }

    /// Short name (`sm`, `md`, `lg`, `xl`)
    pub fn as_str(self) -> &'static str {
        match self {
            ModalSize::Small => "sm",
            ModalSize::Medium => "md",
            ModalSize::Large => "lg",
            ModalSize::ExtraLarge => "xl",
        }
    }
}

impl fmt::Display for ModalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown modal size {0:?}, expected one of sm, md, lg, xl")]
pub struct ParseModalSizeError(String);

impl FromStr for ModalSize {
    type Err = ParseModalSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sm" | "small" => Ok(ModalSize::Small),
            "md" | "medium" => Ok(ModalSize::Medium),
            "lg" | "large" => Ok(ModalSize::Large),
            "xl" | "xlarge" | "extra-large" | "extra_large" => Ok(ModalSize::ExtraLarge),
            _ => Err(ParseModalSizeError(s.to_string())),
        }
    }
}

impl Serialize for ModalSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModalSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Where a dismissal request came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissSource {
    Backdrop,
    CloseButton,
}

impl fmt::Display for DismissSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DismissSource::Backdrop => f.write_str("backdrop"),
            DismissSource::CloseButton => f.write_str("close_button"),
        }
    }
}

/// Whether the header row is rendered at all.
///
/// An empty title counts as no title.
pub fn header_visible(title: Option<&str>, show_close_button: bool) -> bool {
    show_close_button || title.is_some_and(|t| !t.is_empty())
}

fn request_close(on_close: EventHandler<()>, source: DismissSource) {
    debug!(%source, "Modal dismissal requested");
    on_close.call(());
}

/// Centered panel over a dimmed backdrop
#[component]
pub fn Modal(
    /// Renders nothing when false
    is_open: bool,
    /// Called on backdrop click or close button click
    on_close: EventHandler<()>,
    /// Optional header label
    #[props(default)]
    title: Option<String>,
    /// Max-width preset for the panel
    #[props(default)]
    size: ModalSize,
    #[props(default = true)] show_close_button: bool,
    /// Extra panel classes. The size preset's max-width always wins.
    #[props(default)]
    class: Option<String>,
    children: Element,
) -> Element {
    // Hooks run before the open check so hook order is stable across renders
    let title_id = use_hook(|| {
        let id = MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("modal-title-{}", id)
    });

    if !is_open {
        return rsx! {};
    }

    let title = title.filter(|t| !t.is_empty());
    let has_header = header_visible(title.as_deref(), show_close_button);
    let labelled_by = title.as_ref().map(|_| title_id.clone());

    let panel_class = cn!(
        "relative flex flex-col w-full mx-4 max-h-[85vh] overflow-hidden",
        "bg-gray-800 border border-gray-700 rounded-lg shadow-2xl",
        "transition-all duration-150",
        class,
        size.max_width_class(),
    );

    rsx! {
        div {
            "data-part": "overlay",
            class: "fixed inset-0 z-50 flex items-center justify-center",
            div {
                "data-part": "backdrop",
                class: "absolute inset-0 bg-black/50 backdrop-blur-sm",
                onclick: move |_| request_close(on_close, DismissSource::Backdrop),
            }
            div {
                "data-part": "panel",
                class: "{panel_class}",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: labelled_by,
                if has_header {
                    div {
                        "data-part": "header",
                        class: "flex items-center justify-between gap-4 px-6 py-4 border-b border-gray-700",
                        if let Some(title) = &title {
                            h2 {
                                "data-part": "title",
                                id: "{title_id}",
                                class: "text-lg font-semibold text-white truncate",
                                "{title}"
                            }
                        }
                        if show_close_button {
                            ChromelessButton {
                                class: "ml-auto p-1 rounded text-gray-400 hover:text-white hover:bg-gray-700 transition-colors",
                                aria_label: "Close",
                                onclick: move |_| request_close(on_close, DismissSource::CloseButton),
                                XIcon { class: "w-5 h-5" }
                            }
                        }
                    }
                }
                div { "data-part": "body", class: "px-6 py-4 overflow-y-auto", {children} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_table() {
        let table: Vec<_> = ModalSize::ALL
            .iter()
            .map(|s| (s.as_str(), s.max_width_class(), s.max_width_px()))
            .collect();
        assert_eq!(
            table,
            vec![
                ("sm", "max-w-md", 448),
                ("md", "max-w-lg", 512),
                ("lg", "max-w-2xl", 672),
                ("xl", "max-w-4xl", 896),
            ]
        );
    }

    #[test]
    fn test_default_size_is_medium() {
        assert_eq!(ModalSize::default(), ModalSize::Medium);
        assert_eq!(ModalSize::default().max_width_rem(), 32);
    }

    #[test]
    fn test_parse_size_names() {
        assert_eq!("lg".parse(), Ok(ModalSize::Large));
        assert_eq!(" Extra-Large ".parse(), Ok(ModalSize::ExtraLarge));
        assert_eq!("small".parse(), Ok(ModalSize::Small));
        for size in ModalSize::ALL {
            assert_eq!(size.to_string().parse(), Ok(size));
        }
    }

    #[test]
    fn test_parse_size_rejects_unknown() {
        let err = "huge".parse::<ModalSize>().unwrap_err();
        assert_eq!(err, ParseModalSizeError("huge".to_string()));
        assert!(err.to_string().contains("\"huge\""));
    }

    #[test]
    fn test_size_serde_uses_short_names() {
        assert_eq!(serde_json::to_string(&ModalSize::ExtraLarge).unwrap(), "\"xl\"");
        let size: ModalSize = serde_json::from_str("\"large\"").unwrap();
        assert_eq!(size, ModalSize::Large);
        assert!(serde_json::from_str::<ModalSize>("\"tiny\"").is_err());
    }

    #[test]
    fn test_header_visibility() {
        assert!(header_visible(Some("Confirm"), false));
        assert!(header_visible(None, true));
        assert!(header_visible(Some(""), true));
        assert!(!header_visible(None, false));
        assert!(!header_visible(Some(""), false));
    }

    #[test]
    fn test_dismiss_source_display() {
        assert_eq!(DismissSource::Backdrop.to_string(), "backdrop");
        assert_eq!(DismissSource::CloseButton.to_string(), "close_button");
    }
}
