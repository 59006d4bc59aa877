//! Workbench pages

mod mock_index;

pub use mock_index::{MockConfirmDialog, MockIndex, MockModal};
