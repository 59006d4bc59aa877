//! overlay-ui - Modal overlay component for Dioxus
//!
//! Contains the controlled `Modal`, the class merging and icon pieces it is
//! built from, and small compositions such as `ConfirmDialog`.

pub mod components;

pub use components::*;
