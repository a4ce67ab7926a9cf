//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the application chrome from the render signals and
//! handles that `App` provides as context.

pub mod notification_bar;
pub mod preferences_panel;
pub mod root_layout;
pub mod tools_panel;
