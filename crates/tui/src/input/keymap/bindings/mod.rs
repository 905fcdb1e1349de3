//! Keybinding definitions grouped by concern.
//!
//! Responsibilities:
//! - Provide ordered keybinding groups for the keymap resolver.
//!
//! Does NOT handle:
//! - Resolving input events into Actions.
//! - Rendering help content.
//!
//! Invariants:
//! - Binding order is stable for deterministic help output.

mod navigation;
mod shell;

use super::Keybinding;

pub(super) fn all() -> Vec<Keybinding> {
    let mut bindings = Vec::new();
    bindings.extend(shell::bindings());
    bindings.extend(navigation::bindings());
    bindings
}
