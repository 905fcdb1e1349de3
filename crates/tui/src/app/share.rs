//! Clipboard access for the share action.
//!
//! Responsibilities:
//! - Write the shareable URL to the system clipboard through `arboard`.
//! - Offer a per-thread override backend so tests never touch the host clipboard.
//!
//! Does NOT handle:
//! - Building the URL (see `ShowcaseConfig::share_url`).
//! - Toast feedback (handled by `App::update`).
//!
//! Invariants:
//! - An unavailable clipboard is an error value, never a panic.
//! - A failed write is not retried.

use std::cell::RefCell;
use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShareError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write to clipboard: {0}")]
    Write(String),
}

#[derive(Clone)]
enum OverrideBackend {
    Recording(Arc<Mutex<Option<String>>>),
    Failing(ShareError),
}

thread_local! {
    static OVERRIDE_BACKEND: RefCell<Option<OverrideBackend>> = const { RefCell::new(None) };
}

/// Copy `text` to the clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), ShareError> {
    let overridden = OVERRIDE_BACKEND.with(|cell| {
        cell.borrow().as_ref().map(|backend| match backend {
            OverrideBackend::Recording(store) => {
                *store.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_string());
                Ok(())
            }
            OverrideBackend::Failing(error) => Err(error.clone()),
        })
    });
    if let Some(result) = overridden {
        return result;
    }

    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ShareError::Unavailable(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| ShareError::Write(e.to_string()))
}

/// Install a recording backend on this thread until the guard drops.
#[doc(hidden)]
pub fn install_recording_clipboard() -> RecordingClipboardGuard {
    let store = Arc::new(Mutex::new(None));
    let prev = OVERRIDE_BACKEND.with(|cell| {
        cell.borrow_mut()
            .replace(OverrideBackend::Recording(Arc::clone(&store)))
    });
    RecordingClipboardGuard { prev, store }
}

/// Install a backend that fails every write with `error`.
#[doc(hidden)]
pub fn install_failing_clipboard(error: ShareError) -> FailingClipboardGuard {
    let prev = OVERRIDE_BACKEND.with(|cell| {
        cell.borrow_mut()
            .replace(OverrideBackend::Failing(error))
    });
    FailingClipboardGuard { prev }
}

#[doc(hidden)]
pub struct RecordingClipboardGuard {
    prev: Option<OverrideBackend>,
    store: Arc<Mutex<Option<String>>>,
}

impl RecordingClipboardGuard {
    /// Last text written while the guard was installed.
    pub fn copied(&self) -> Option<String> {
        self.store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Drop for RecordingClipboardGuard {
    fn drop(&mut self) {
        let prev = self.prev.take();
        OVERRIDE_BACKEND.with(|cell| *cell.borrow_mut() = prev);
    }
}

#[doc(hidden)]
pub struct FailingClipboardGuard {
    prev: Option<OverrideBackend>,
}

impl Drop for FailingClipboardGuard {
    fn drop(&mut self) {
        let prev = self.prev.take();
        OVERRIDE_BACKEND.with(|cell| *cell.borrow_mut() = prev);
    }
}
