//! Entities panel UI module.
//!
//! Right-side panel listing the stored entities with the filter controls
//! above the list.
//!
//! ## Module Structure
//!
//! - [`filter`] - Search box and kind toggles
//! - [`list`] - Entity rows with visibility, edit and delete actions
//! - [`main_panel`] - Main panel orchestration

mod filter;
mod list;
mod main_panel;

pub use main_panel::entities_panel_ui;
