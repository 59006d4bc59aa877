//! Overlay components and their collaborators

pub mod button;
pub mod class_names;
pub mod confirm_dialog;
pub mod icons;
pub mod modal;

pub use button::{button_class, Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use class_names::{class_group, merge_classes, ClassFragment};
pub use confirm_dialog::ConfirmDialog;
pub use icons::XIcon;
pub use modal::{header_visible, DismissSource, Modal, ModalSize, ParseModalSizeError};
