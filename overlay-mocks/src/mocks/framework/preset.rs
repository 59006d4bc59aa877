//! State presets for quick configuration switching

use super::registry::{ControlDef, ControlRegistry, ControlValue};
use std::collections::HashMap;

/// A named preset with predefined control values
#[derive(Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub values: HashMap<&'static str, ControlValue>,
}

impl Preset {
    /// Create a new preset with the given name
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            values: HashMap::new(),
        }
    }

    /// Set a boolean value in this preset
    pub fn set_bool(mut self, key: &'static str, value: bool) -> Self {
        self.values.insert(key, ControlValue::Bool(value));
        self
    }

    /// Set a string/enum value in this preset
    pub fn set_string(mut self, key: &'static str, value: &'static str) -> Self {
        self.values
            .insert(key, ControlValue::String(value.to_string()));
        self
    }

    /// Value this preset gives a control: its own override, or the control's default
    pub fn value_for<'a>(&'a self, control: &'a ControlDef) -> &'a ControlValue {
        self.values.get(control.key).unwrap_or(&control.default)
    }

    /// Whether every control currently holds the value this preset would give it
    pub fn matches(&self, registry: &ControlRegistry) -> bool {
        registry.controls.iter().all(|control| {
            registry
                .values
                .get(control.key)
                .is_some_and(|signal| *signal.read() == *self.value_for(control))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::framework::registry::ControlKind;

    fn control(key: &'static str, default: ControlValue) -> ControlDef {
        ControlDef {
            key,
            label: key,
            kind: ControlKind::Bool,
            default,
            doc: None,
        }
    }

    #[test]
    fn test_value_for_prefers_override() {
        let preset = Preset::new("Body only").set_bool("close_button", false);
        let close = control("close_button", ControlValue::Bool(true));
        assert_eq!(preset.value_for(&close), &ControlValue::Bool(false));
    }

    #[test]
    fn test_value_for_falls_back_to_default() {
        let preset = Preset::new("Large").set_string("size", "lg");
        let title = control("title", ControlValue::String("Confirm".to_string()));
        assert_eq!(
            preset.value_for(&title),
            &ControlValue::String("Confirm".to_string())
        );
    }
}
