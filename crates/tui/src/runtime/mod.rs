//! Runtime components for the showcase.
//!
//! This module contains the runtime infrastructure:
//! - Event hub with scoped listener registration (`events`)
//! - Cancellable timer handles owned by widget sections (`timer`)
//! - Terminal restoration guard (`terminal`)
//! - The crossterm input pump (`input`)
//!
//! Does NOT handle:
//! - UI rendering or input interpretation (see `app` and `input`).
//!
//! Invariants:
//! - The input pump is the only task that reads terminal events.
//! - All state mutation happens on the UI loop; runtime pieces only deliver actions.

pub mod events;
pub mod input;
pub mod terminal;
pub mod timer;
