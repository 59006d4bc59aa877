//! Button primitives used by the overlay components

use crate::cn;
use dioxus::prelude::*;

/// Unstyled button - carries labelling and disabled handling only.
///
/// Always renders `type="button"` so it never submits a surrounding form.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let is_disabled = disabled || loading;

    rsx! {
        button {
            r#type: "button",
            class: class.as_deref(),
            disabled: is_disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_busy: if loading { Some("true") } else { None },
            onclick: move |e| {
                if !is_disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Indigo background - for primary actions
    #[default]
    Primary,
    /// Gray background - for secondary/cancel actions
    Secondary,
    /// Red background - for destructive actions
    Danger,
    /// No background - text only with hover
    Ghost,
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-indigo-600 hover:bg-indigo-500 text-white",
            ButtonVariant::Secondary => "bg-gray-700 hover:bg-gray-600 text-gray-300",
            ButtonVariant::Danger => "bg-red-600 hover:bg-red-500 text-white",
            ButtonVariant::Ghost => "text-gray-400 hover:text-white hover:bg-gray-700/50",
        }
    }
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
}

impl ButtonSize {
    fn classes(self) -> &'static str {
        match self {
            ButtonSize::Small => "px-3 py-1.5 text-sm",
            ButtonSize::Medium => "px-4 py-2",
        }
    }
}

/// Class string for a styled button; caller classes override the defaults.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    cn!(
        "inline-flex items-center gap-2 rounded-lg transition-colors",
        "disabled:opacity-50 disabled:cursor-not-allowed",
        size.classes(),
        variant.classes(),
        extra,
    )
}

/// Styled button
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let class = button_class(variant, size, class.as_deref());

    rsx! {
        ChromelessButton {
            disabled,
            loading,
            class,
            onclick,
            {children}
        }
    }
}
