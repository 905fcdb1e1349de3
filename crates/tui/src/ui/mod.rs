//! Shared rendering building blocks.
//!
//! This module contains the pieces used by both the navigation shell and the
//! widget sections: theme style helpers, toasts, popups and small reusable
//! components.

pub mod components;
pub mod popup;
pub mod theme;
pub mod toast;

pub use toast::{Toast, ToastLevel};
