//! In-process location holding the current fragment and its history.
//!
//! Behaves like a browser address bar reduced to its fragment: writes that
//! change the value push a history entry and emit a `HashChange` event;
//! history traversal emits as well.

use super::history::History;
use crate::runtime::events::{EventHub, HubEvent};

/// Strip whitespace and a single leading `#`.
fn normalize(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.strip_prefix('#').unwrap_or(trimmed)
}

#[derive(Debug)]
pub struct Location {
    history: History,
    hub: EventHub,
}

impl Location {
    /// Open a location at `initial` (with or without `#`). No event is emitted.
    pub fn new(initial: &str, hub: EventHub) -> Self {
        Self {
            history: History::new(normalize(initial)),
            hub,
        }
    }

    /// Current fragment without the leading `#`.
    pub fn fragment(&self) -> &str {
        self.history.current()
    }

    /// Write the fragment. Returns `false` (and emits nothing) if it is already current.
    pub fn set_hash(&mut self, raw: &str) -> bool {
        let value = normalize(raw);
        if !self.history.push(value) {
            return false;
        }
        tracing::debug!(fragment = value, "Location fragment written");
        self.hub.emit(HubEvent::HashChange(value.to_string()));
        true
    }

    pub fn back(&mut self) -> bool {
        let Some(fragment) = self.history.back().map(str::to_string) else {
            return false;
        };
        self.hub.emit(HubEvent::HashChange(fragment));
        true
    }

    pub fn forward(&mut self) -> bool {
        let Some(fragment) = self.history.forward().map(str::to_string) else {
            return false;
        };
        self.hub.emit(HubEvent::HashChange(fragment));
        true
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn hub(&self) -> &EventHub {
        &self.hub
    }
}
