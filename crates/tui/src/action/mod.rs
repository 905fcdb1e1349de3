//! Action protocol for the showcase event loop.
//!
//! This module defines the unified `Action` enum. Actions represent user
//! input, environment notifications (resize, location changes) and requests
//! raised by widget sections.
//!
//! # What This Module Does NOT Handle
//!
//! - Action handling logic (handled by the navigation shell in `App`)
//! - Event source wiring (handled by `runtime::events`)
//! - UI rendering (handled by the `ui` and `widgets` modules)

pub mod variants;

pub use variants::Action;
