//! Index of mock pages

use crate::Route;

/// Every page the workbench can show
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MockPage {
    Modal,
    ConfirmDialog,
}

impl MockPage {
    pub const ALL: &'static [MockPage] = &[MockPage::Modal, MockPage::ConfirmDialog];

    pub fn label(self) -> &'static str {
        match self {
            MockPage::Modal => "Modal",
            MockPage::ConfirmDialog => "Confirm Dialog",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MockPage::Modal => "Overlay panel with title, close button, and size presets",
            MockPage::ConfirmDialog => "Cancel/confirm prompt composed from the modal",
        }
    }

    pub fn to_route(self, state: Option<String>) -> Route {
        match self {
            MockPage::Modal => Route::MockModal { state },
            MockPage::ConfirmDialog => Route::MockConfirmDialog { state },
        }
    }
}
