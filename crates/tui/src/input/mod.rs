//! Centralized input/keybinding definitions for the showcase.
//!
//! Responsibilities:
//! - Define the shared keybinding catalog used by input resolution and the help overlay.
//! - Provide deterministic rendering helpers for help output.
//!
//! Non-responsibilities:
//! - Mutating application state directly (handled by App via Actions).
//! - Routing keys into widget sections (handled by the page view).
//!
//! Invariants:
//! - Keybinding metadata must remain the single source of truth for help.
//! - Input resolution must return Actions only and never mutate App state.

pub mod help;
pub mod keymap;
