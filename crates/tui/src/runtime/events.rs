//! Event hub with explicit listener registration.
//!
//! Responsibilities:
//! - Keep the set of listeners interested in each kind of environment event.
//! - Deliver events to listeners as `Action`s over their channels.
//! - Unregister listeners when their `Subscription` guard is dropped.
//!
//! Does NOT handle:
//! - Interpreting events (the subscriber's `update` loop does that).
//!
//! Invariants:
//! - A dropped `Subscription` never receives another event.
//! - `emit` never blocks; pointer events are always droppable.
//! - Listeners whose receiver is gone are pruned on the next delivery.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crossterm::event::{KeyEvent, MouseEvent};
use tokio::sync::mpsc::{Sender, error::TrySendError};

use crate::action::Action;

/// Category a listener subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    HashChange,
    KeyDown,
    Pointer,
    Resize,
}

/// An environment event travelling through the hub.
#[derive(Debug, Clone, PartialEq)]
pub enum HubEvent {
    HashChange(String),
    KeyDown(KeyEvent),
    Pointer(MouseEvent),
    Resize(u16, u16),
}

impl HubEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::HashChange(_) => EventKind::HashChange,
            Self::KeyDown(_) => EventKind::KeyDown,
            Self::Pointer(_) => EventKind::Pointer,
            Self::Resize(..) => EventKind::Resize,
        }
    }

    /// Pointer floods may be dropped under backpressure; everything else carries user intent.
    pub fn is_droppable(&self) -> bool {
        matches!(self, Self::Pointer(_))
    }

    fn to_action(&self) -> Action {
        match self {
            Self::HashChange(fragment) => Action::HashChanged(fragment.clone()),
            Self::KeyDown(key) => Action::Input(*key),
            Self::Pointer(mouse) => Action::Mouse(*mouse),
            Self::Resize(w, h) => Action::Resize(*w, *h),
        }
    }
}

struct Listener {
    id: u64,
    kind: EventKind,
    tx: Sender<Action>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<Listener>,
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared, cloneable handle to the listener registry.
#[derive(Clone, Default)]
pub struct EventHub {
    registry: Arc<Mutex<Registry>>,
}

impl std::fmt::Debug for EventHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `tx` for events of `kind`. The listener lives as long as the returned guard.
    #[must_use = "dropping the subscription unregisters the listener immediately"]
    pub fn subscribe(&self, kind: EventKind, tx: Sender<Action>) -> Subscription {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push(Listener { id, kind, tx });
        tracing::debug!(?kind, id, "Listener registered");
        Subscription {
            id,
            kind,
            registry: Arc::downgrade(&self.registry),
        }
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.registry).listeners.len()
    }

    pub fn listener_count_for(&self, kind: EventKind) -> usize {
        lock(&self.registry)
            .listeners
            .iter()
            .filter(|listener| listener.kind == kind)
            .count()
    }

    fn senders(&self, kind: EventKind) -> Vec<Sender<Action>> {
        let mut registry = lock(&self.registry);
        registry.listeners.retain(|listener| !listener.tx.is_closed());
        registry
            .listeners
            .iter()
            .filter(|listener| listener.kind == kind)
            .map(|listener| listener.tx.clone())
            .collect()
    }

    /// Deliver without waiting. Returns how many listeners accepted the event.
    pub fn emit(&self, event: HubEvent) -> usize {
        let mut delivered = 0;
        for tx in self.senders(event.kind()) {
            match tx.try_send(event.to_action()) {
                Ok(()) => delivered += 1,
                Err(TrySendError::Full(_)) => {
                    tracing::debug!(kind = ?event.kind(), "Listener channel full, dropping event");
                }
                Err(TrySendError::Closed(_)) => {}
            }
        }
        delivered
    }

    /// Deliver with backpressure: waits for channel capacity unless the event is droppable.
    pub async fn deliver(&self, event: HubEvent) -> usize {
        if event.is_droppable() {
            return self.emit(event);
        }
        let mut delivered = 0;
        for tx in self.senders(event.kind()) {
            if tx.send(event.to_action()).await.is_ok() {
                delivered += 1;
            }
        }
        delivered
    }
}

/// Guard returned by `EventHub::subscribe`; unregisters its listener on drop.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    kind: EventKind,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    pub fn kind(&self) -> EventKind {
        self.kind
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry)
                .listeners
                .retain(|listener| listener.id != self.id);
            tracing::debug!(kind = ?self.kind, id = self.id, "Listener unregistered");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers, MouseEventKind};
    use tokio::sync::mpsc::channel;

    #[test]
    fn test_emit_reaches_matching_listeners_only() {
        let hub = EventHub::new();
        let (tx, mut rx) = channel(8);
        let _hash = hub.subscribe(EventKind::HashChange, tx.clone());
        let _resize = hub.subscribe(EventKind::Resize, tx);

        assert_eq!(hub.emit(HubEvent::HashChange("forms".into())), 1);
        assert_eq!(rx.try_recv().unwrap(), Action::HashChanged("forms".into()));
        assert_eq!(
            hub.emit(HubEvent::KeyDown(KeyEvent::new(
                KeyCode::Char('x'),
                KeyModifiers::NONE
            ))),
            0
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropping_subscription_unregisters() {
        let hub = EventHub::new();
        let (tx, mut rx) = channel(8);
        let subscription = hub.subscribe(EventKind::HashChange, tx);
        assert_eq!(hub.listener_count(), 1);

        drop(subscription);
        assert_eq!(hub.listener_count(), 0);
        assert_eq!(hub.emit(HubEvent::HashChange("basics".into())), 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_full_channel_drops_instead_of_blocking() {
        let hub = EventHub::new();
        let (tx, _rx) = channel(1);
        let _sub = hub.subscribe(EventKind::Pointer, tx);
        let mouse = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(hub.emit(HubEvent::Pointer(mouse)), 1);
        assert_eq!(hub.emit(HubEvent::Pointer(mouse)), 0);
    }

    #[test]
    fn test_closed_receivers_are_pruned() {
        let hub = EventHub::new();
        let (tx, rx) = channel(1);
        let _sub = hub.subscribe(EventKind::Resize, tx);
        drop(rx);
        hub.emit(HubEvent::Resize(80, 24));
        assert_eq!(hub.listener_count(), 0);
    }

    #[tokio::test]
    async fn test_deliver_waits_for_capacity() {
        let hub = EventHub::new();
        let (tx, mut rx) = channel(1);
        let _sub = hub.subscribe(EventKind::Resize, tx);

        assert_eq!(hub.deliver(HubEvent::Resize(100, 40)).await, 1);
        let pending = {
            let hub = hub.clone();
            tokio::spawn(async move { hub.deliver(HubEvent::Resize(120, 40)).await })
        };
        assert_eq!(rx.recv().await, Some(Action::Resize(100, 40)));
        assert_eq!(rx.recv().await, Some(Action::Resize(120, 40)));
        assert_eq!(pending.await.unwrap(), 1);
    }
}
