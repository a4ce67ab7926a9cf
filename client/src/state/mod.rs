//! Client state coordination.
//!
//! ARCHITECTURE
//! ============
//! Everything here is independent of rendering. Handles are cheap `Clone`,
//! `Send + Sync` and notify listeners synchronously after each committed
//! change, so they can sit in Leptos contexts on both server and client.

pub mod consent;
pub mod controls;
pub mod ids;
pub mod listeners;
pub mod medium;
pub mod notifications;
pub mod preferences;
pub mod set_state;
pub mod store;
pub mod tool_panel;
