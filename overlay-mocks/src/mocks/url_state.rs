//! URL state persistence for mock pages
//!
//! Control values are serialized as JSON and base64url-encoded into a single
//! query parameter, keeping URLs opaque and free of name clashes.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::collections::BTreeMap;
use tracing::warn;

/// Decode a state string from the URL into key-value pairs.
///
/// Malformed state is logged and treated as empty so the page falls back to defaults.
pub fn parse_state(encoded: &str) -> BTreeMap<String, String> {
    if encoded.is_empty() {
        return BTreeMap::new();
    }

    let json_bytes = match URL_SAFE_NO_PAD.decode(encoded) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Ignoring mock state with invalid base64: {e}");
            return BTreeMap::new();
        }
    };

    match serde_json::from_slice(&json_bytes) {
        Ok(map) => map,
        Err(e) => {
            warn!("Ignoring mock state with invalid JSON: {e}");
            BTreeMap::new()
        }
    }
}

/// Encode key-value pairs into a state string for the URL.
pub fn encode_state(pairs: &BTreeMap<String, String>) -> String {
    // A string map always serializes
    let json = serde_json::to_string(pairs).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json.as_bytes())
}

/// Collects non-default values and produces an encoded state string
#[derive(Default)]
pub struct StateBuilder {
    pairs: BTreeMap<String, String>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bool(&mut self, key: &str, value: bool, default: bool) {
        if value != default {
            self.pairs
                .insert(key.to_string(), if value { "1" } else { "0" }.to_string());
        }
    }

    pub fn set_string(&mut self, key: &str, value: &str, default: &str) {
        if value != default {
            self.pairs.insert(key.to_string(), value.to_string());
        }
    }

    /// `None` when every value is at its default, giving a clean URL
    pub fn build(self) -> Option<String> {
        if self.pairs.is_empty() {
            None
        } else {
            Some(encode_state(&self.pairs))
        }
    }
}

/// Read a bool the way [`StateBuilder::set_bool`] writes it
pub fn parse_bool(raw: &str) -> bool {
    raw == "1" || raw == "true"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_skips_defaults() {
        let mut builder = StateBuilder::new();
        builder.set_bool("open", true, true);
        builder.set_string("size", "md", "md");
        assert_eq!(builder.build(), None);
    }

    #[test]
    fn test_builder_state_decodes() {
        let mut builder = StateBuilder::new();
        builder.set_bool("close_button", false, true);
        builder.set_string("size", "xl", "md");
        let encoded = builder.build().expect("non-default values produce state");

        let decoded = parse_state(&encoded);
        assert_eq!(decoded.get("close_button").map(String::as_str), Some("0"));
        assert_eq!(decoded.get("size").map(String::as_str), Some("xl"));
        assert!(!encoded.contains('='));
    }

    #[test]
    fn test_malformed_state_is_empty() {
        assert!(parse_state("").is_empty());
        assert!(parse_state("not base64!").is_empty());
        assert!(parse_state(&URL_SAFE_NO_PAD.encode(b"[1, 2]")).is_empty());
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("1"));
        assert!(parse_bool("true"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool(""));
    }
}
