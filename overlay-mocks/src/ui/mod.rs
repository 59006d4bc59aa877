//! Shared UI components for the workbench

mod link_card;

pub use link_card::LinkCard;
