//! Widget sections composed into pages.
//!
//! Each section owns its state and timers and talks to the shell only through
//! `pages::Effects` (toasts and navigation requests).

pub mod common;
pub mod data_display;
pub mod feedback;
pub mod form_controls;
pub mod gestures;
pub mod home;
pub mod navigation;
pub mod search;
pub mod special;
pub mod store;
pub mod text_field;
