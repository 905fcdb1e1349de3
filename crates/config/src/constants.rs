//! Centralized constants for the showcase workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Event Loop
// =============================================================================

/// Capacity of the bounded action channel between the input task and the UI loop.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval in milliseconds (drives timers and animations).
pub const DEFAULT_UI_TICK_MS: u64 = 50;

/// Smallest accepted tick interval in milliseconds.
pub const MIN_UI_TICK_MS: u64 = 10;

/// Largest accepted tick interval in milliseconds.
pub const MAX_UI_TICK_MS: u64 = 1000;

// =============================================================================
// Layout & Scrolling
// =============================================================================

/// Height of one terminal row expressed in pixel-equivalents.
pub const LINE_HEIGHT_PX: u32 = 16;

/// Scroll offset (px) beyond which the scroll-to-top affordance is shown.
pub const SCROLL_TO_TOP_THRESHOLD_PX: u32 = 400;

/// Rows moved by a single wheel notch or arrow key.
pub const SCROLL_STEP_ROWS: u16 = 1;

/// Terminal width (columns) at which the persistent sidebar replaces the overlay menu.
pub const DEFAULT_WIDE_LAYOUT_MIN_COLS: u16 = 100;

/// Smallest accepted wide-layout threshold.
pub const MIN_WIDE_LAYOUT_COLS: u16 = 40;

/// Width of the expanded sidebar in columns.
pub const SIDEBAR_EXPANDED_WIDTH: u16 = 26;

/// Width of the collapsed (icon-only) sidebar in columns.
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 6;

// =============================================================================
// Animation & Timers
// =============================================================================

/// Duration of the smooth scroll-to-top animation.
pub const SMOOTH_SCROLL_MS: u64 = 300;

/// Duration of the page entry transition.
pub const PAGE_TRANSITION_MS: u64 = 300;

/// Quiet period before a search query is applied.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Interval driving the looping progress demo.
pub const PROGRESS_INTERVAL_MS: u64 = 200;

/// Interval driving the simulated download.
pub const DOWNLOAD_INTERVAL_MS: u64 = 100;

/// Simulated load time of the skeleton demo.
pub const SKELETON_LOAD_MS: u64 = 3000;

/// How long the snackbar stays up.
pub const SNACKBAR_MS: u64 = 4000;

/// Gap between toasts in the "show all" demo.
pub const TOAST_STAGGER_MS: u64 = 1000;

/// Simulated fetch time of the infinite list.
pub const INFINITE_LOAD_MS: u64 = 1000;

/// Slideshow autoplay period.
pub const SLIDESHOW_MS: u64 = 3000;

// =============================================================================
// Sharing
// =============================================================================

/// Base URL used to build shareable links when none is configured.
pub const DEFAULT_SHARE_BASE_URL: &str = "http://localhost:5173/";
