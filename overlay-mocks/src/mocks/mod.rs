//! Component mocks with interactive controls

mod confirm_dialog;
pub mod framework;
mod modal;
pub mod url_state;

pub use confirm_dialog::ConfirmDialogMock;
pub use modal::ModalMock;
