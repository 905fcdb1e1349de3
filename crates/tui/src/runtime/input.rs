//! Terminal input pump.
//!
//! Reads crossterm events on a tracked task and forwards them through the
//! `EventHub`. Key and resize events wait for channel capacity; pointer
//! events are dropped when listeners are saturated.

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use super::events::{EventHub, HubEvent};

/// Translate a terminal event into a hub event, ignoring key releases and repeats.
pub fn translate(event: Event) -> Option<HubEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(HubEvent::KeyDown(key)),
        Event::Mouse(mouse) => Some(HubEvent::Pointer(mouse)),
        Event::Resize(width, height) => Some(HubEvent::Resize(width, height)),
        _ => None,
    }
}

/// Spawn the input pump on `tracker`. It stops when `cancel` fires or the stream ends.
pub fn spawn_input_task(tracker: &TaskTracker, hub: EventHub, cancel: CancellationToken) {
    tracker.spawn(async move {
        let mut reader = EventStream::new();
        loop {
            let next = tokio::select! {
                _ = cancel.cancelled() => break,
                next = reader.next() => next,
            };
            match next {
                Some(Ok(event)) => {
                    if let Some(event) = translate(event) {
                        hub.deliver(event).await;
                    }
                }
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "Terminal event stream failed");
                    break;
                }
                None => break,
            }
        }
        tracing::debug!("Input task finished");
    });
}
