//! Networking boundary types.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP client itself lives outside this crate; `api_error` defines the
//! failure shape it hands to the notification adapter.

pub mod api_error;
