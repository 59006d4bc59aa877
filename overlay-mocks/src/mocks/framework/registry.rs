//! Control registry for typed control management with URL sync

use super::preset::Preset;
use crate::mocks::url_state::{parse_bool, parse_state, StateBuilder};
use crate::Route;
use dioxus::prelude::*;
use std::collections::HashMap;

/// Value stored in the control registry
#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    Bool(bool),
    String(String),
}

/// How a control is edited in the panel
#[derive(Clone, Debug, PartialEq)]
pub enum ControlKind {
    Bool,
    /// (value, label) pairs rendered as a button group
    Enum(Vec<(&'static str, &'static str)>),
    Text,
}

/// Definition of a control with metadata
#[derive(Clone, PartialEq)]
pub struct ControlDef {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ControlKind,
    pub default: ControlValue,
    pub doc: Option<&'static str>,
}

/// Builder for creating a ControlRegistry
#[derive(Default)]
pub struct ControlRegistryBuilder {
    controls: Vec<ControlDef>,
    presets: Vec<Preset>,
}

impl ControlRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, key: &'static str, label: &'static str, kind: ControlKind, default: ControlValue) -> Self {
        self.controls.push(ControlDef {
            key,
            label,
            kind,
            default,
            doc: None,
        });
        self
    }

    /// Add a boolean control
    pub fn bool_control(self, key: &'static str, label: &'static str, default: bool) -> Self {
        self.push(key, label, ControlKind::Bool, ControlValue::Bool(default))
    }

    /// Add an enum control (represented as string internally)
    pub fn enum_control(
        self,
        key: &'static str,
        label: &'static str,
        default: &'static str,
        options: Vec<(&'static str, &'static str)>,
    ) -> Self {
        self.push(
            key,
            label,
            ControlKind::Enum(options),
            ControlValue::String(default.to_string()),
        )
    }

    /// Add a free-form text control
    pub fn text_control(self, key: &'static str, label: &'static str, default: &str) -> Self {
        self.push(
            key,
            label,
            ControlKind::Text,
            ControlValue::String(default.to_string()),
        )
    }

    /// Add documentation to the last control
    pub fn doc(mut self, doc: &'static str) -> Self {
        if let Some(last) = self.controls.last_mut() {
            last.doc = Some(doc);
        }
        self
    }

    /// Add state presets
    pub fn with_presets(mut self, presets: Vec<Preset>) -> Self {
        self.presets = presets;
        self
    }

    /// Keys of the defined controls, in panel order
    pub fn control_keys(&self) -> Vec<&'static str> {
        self.controls.iter().map(|c| c.key).collect()
    }

    pub fn preset_names(&self) -> Vec<&'static str> {
        self.presets.iter().map(|p| p.name).collect()
    }

    /// (value, label) options of an enum control
    pub fn enum_options(&self, key: &str) -> Option<&[(&'static str, &'static str)]> {
        self.controls
            .iter()
            .find(|c| c.key == key)
            .and_then(|c| match &c.kind {
                ControlKind::Enum(options) => Some(options.as_slice()),
                _ => None,
            })
    }

    /// Build the registry - must be called inside a component (uses hooks)
    pub fn build(self, initial_state: Option<String>) -> ControlRegistry {
        let state = initial_state
            .as_deref()
            .map(parse_state)
            .unwrap_or_default();

        let mut values: HashMap<&'static str, Signal<ControlValue>> = HashMap::new();

        for def in &self.controls {
            let initial = match (&def.default, state.get(def.key)) {
                (ControlValue::Bool(_), Some(raw)) => ControlValue::Bool(parse_bool(raw)),
                (ControlValue::String(_), Some(raw)) => ControlValue::String(raw.clone()),
                (default, None) => default.clone(),
            };
            // Same number of controls every render, so hook order is stable
            let signal = use_signal(|| initial);
            values.insert(def.key, signal);
        }

        ControlRegistry {
            controls: self.controls,
            values,
            presets: self.presets,
        }
    }
}

/// Registry holding all controls and their current values
#[derive(Clone, PartialEq)]
pub struct ControlRegistry {
    pub controls: Vec<ControlDef>,
    pub values: HashMap<&'static str, Signal<ControlValue>>,
    pub presets: Vec<Preset>,
}

impl ControlRegistry {
    /// Get a boolean value (reads signal, creating subscription)
    pub fn get_bool(&self, key: &'static str) -> bool {
        self.values
            .get(key)
            .map(|s| matches!(&*s.read(), ControlValue::Bool(true)))
            .unwrap_or(false)
    }

    /// Get a string value (reads signal, creating subscription)
    pub fn get_string(&self, key: &'static str) -> String {
        self.values
            .get(key)
            .map(|s| match &*s.read() {
                ControlValue::String(s) => s.clone(),
                _ => String::new(),
            })
            .unwrap_or_default()
    }

    /// Set a boolean value
    pub fn set_bool(&self, key: &'static str, value: bool) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(ControlValue::Bool(value));
        }
    }

    /// Set a string value (for enums and text)
    pub fn set_string(&self, key: &'static str, value: String) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(ControlValue::String(value));
        }
    }

    /// Apply a preset - resets all controls to defaults, then applies preset values
    pub fn apply_preset(&self, preset: &Preset) {
        for control in &self.controls {
            if let Some(mut signal) = self.values.get(control.key).copied() {
                signal.set(preset.value_for(control).clone());
            }
        }
    }

    /// Build URL state string from current values
    pub fn build_state(&self) -> Option<String> {
        let mut builder = StateBuilder::new();

        for def in &self.controls {
            if let Some(signal) = self.values.get(def.key) {
                match (&*signal.read(), &def.default) {
                    (ControlValue::Bool(v), ControlValue::Bool(default)) => {
                        builder.set_bool(def.key, *v, *default);
                    }
                    (ControlValue::String(v), ControlValue::String(default)) => {
                        builder.set_string(def.key, v, default);
                    }
                    _ => {}
                }
            }
        }

        builder.build()
    }

    /// Keep the page URL in sync with control values.
    ///
    /// `to_route` maps the encoded state onto the page's own route.
    pub fn use_url_sync(&self, to_route: fn(Option<String>) -> Route) {
        let registry = self.clone();
        let mut is_mounted = use_signal(|| false);

        use_effect(move || {
            // Read all values to subscribe to changes
            for signal in registry.values.values() {
                let _ = signal.read();
            }

            // The initial URL already reflects the initial state
            if !*is_mounted.peek() {
                is_mounted.set(true);
                return;
            }

            navigator().replace(to_route(registry.build_state()));
        });
    }
}
