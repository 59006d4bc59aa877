//! Auto-generated control panel UI

use super::registry::{ControlDef, ControlKind, ControlRegistry};
use crate::Route;
use dioxus::prelude::*;

/// Main mock panel component that renders controls, presets, and the mock body
#[component]
pub fn MockPanel(title: String, registry: ControlRegistry, children: Element) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white",
            // Controls panel
            div { class: "sticky top-0 z-40 bg-gray-800 border-b border-gray-700 p-4",
                div { class: "max-w-4xl mx-auto",
                    div { class: "flex items-center gap-3 mb-3",
                        Link {
                            to: Route::MockIndex {},
                            class: "text-sm text-gray-400 hover:text-white",
                            "← mocks"
                        }
                        h1 { class: "text-lg font-semibold", "{title}" }
                    }

                    if !registry.presets.is_empty() {
                        PresetBar { registry: registry.clone() }
                    }

                    ControlsRow { registry: registry.clone() }
                }
            }

            div { class: "max-w-4xl mx-auto p-6", {children} }
        }
    }
}

/// Preset buttons bar
#[component]
fn PresetBar(registry: ControlRegistry) -> Element {
    rsx! {
        div { class: "flex flex-wrap gap-2 mb-3",
            span { class: "text-xs text-gray-500 self-center mr-2", "Presets:" }
            for preset in registry.presets.clone() {
                button {
                    key: "{preset.name}",
                    class: if preset.matches(&registry) { "px-2 py-1 text-xs rounded bg-blue-600 text-white" } else { "px-2 py-1 text-xs rounded bg-gray-700 text-gray-300 hover:bg-gray-600" },
                    onclick: {
                        let preset = preset.clone();
                        let registry = registry.clone();
                        move |_| registry.apply_preset(&preset)
                    },
                    "{preset.name}"
                }
            }
        }
    }
}

/// Controls grouped by kind: enum button groups, then text fields, then checkboxes
#[component]
fn ControlsRow(registry: ControlRegistry) -> Element {
    let of_kind = |pred: fn(&ControlKind) -> bool| -> Vec<ControlDef> {
        registry
            .controls
            .iter()
            .filter(|c| pred(&c.kind))
            .cloned()
            .collect()
    };
    let enum_controls = of_kind(|k| matches!(k, ControlKind::Enum(_)));
    let text_controls = of_kind(|k| matches!(k, ControlKind::Text));
    let bool_controls = of_kind(|k| matches!(k, ControlKind::Bool));

    rsx! {
        for control in enum_controls {
            div { key: "{control.key}", class: "flex flex-wrap items-center gap-2 mb-3",
                span { class: "text-xs text-gray-500 mr-2", "{control.label}:" }
                if let ControlKind::Enum(options) = &control.kind {
                    for (value , label) in options.clone() {
                        EnumButton {
                            registry: registry.clone(),
                            control_key: control.key,
                            value,
                            label,
                            doc: control.doc,
                        }
                    }
                }
            }
        }

        if !text_controls.is_empty() {
            div { class: "flex flex-wrap gap-4 mb-3",
                for control in text_controls {
                    TextField {
                        key: "{control.key}",
                        registry: registry.clone(),
                        control_key: control.key,
                        label: control.label,
                        doc: control.doc,
                    }
                }
            }
        }

        if !bool_controls.is_empty() {
            div { class: "flex flex-wrap gap-4 text-sm",
                for control in bool_controls {
                    BoolCheckbox {
                        key: "{control.key}",
                        registry: registry.clone(),
                        control_key: control.key,
                        label: control.label,
                        doc: control.doc,
                    }
                }
            }
        }
    }
}

/// Individual enum button - reads signal reactively
#[component]
fn EnumButton(
    registry: ControlRegistry,
    control_key: &'static str,
    value: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    // Reading inside component body creates reactive subscription
    let is_selected = registry.get_string(control_key) == value;

    rsx! {
        button {
            class: if is_selected { "px-3 py-1.5 text-sm rounded bg-blue-600 text-white" } else { "px-3 py-1.5 text-sm rounded bg-gray-700 text-gray-300 hover:bg-gray-600" },
            onclick: move |_| registry.set_string(control_key, value.to_string()),
            title: doc.unwrap_or(""),
            "{label}"
        }
    }
}

/// Individual text field - reads signal reactively
#[component]
fn TextField(
    registry: ControlRegistry,
    control_key: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    let current = registry.get_string(control_key);

    rsx! {
        label {
            class: "flex items-center gap-2 text-sm text-gray-400",
            title: doc.unwrap_or(""),
            "{label}"
            input {
                r#type: "text",
                class: "px-2 py-1 rounded bg-gray-900 border border-gray-700 text-white",
                value: "{current}",
                oninput: move |e| registry.set_string(control_key, e.value()),
            }
        }
    }
}

/// Individual bool checkbox - reads signal reactively
#[component]
fn BoolCheckbox(
    registry: ControlRegistry,
    control_key: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    let current = registry.get_bool(control_key);

    rsx! {
        label {
            class: "flex items-center gap-2 text-gray-400",
            title: doc.unwrap_or(""),
            input {
                r#type: "checkbox",
                checked: current,
                onchange: move |e| registry.set_bool(control_key, e.checked()),
            }
            "{label}"
            if doc.is_some() {
                span { class: "text-gray-600", "ⓘ" }
            }
        }
    }
}
