//! Body scroll offset, smooth scrolling and home-page scroll tracking.
//!
//! Offsets are kept in rows. Progress and the scroll-to-top threshold are
//! expressed in pixel-equivalents (`LINE_HEIGHT_PX` per row) so they read the
//! same as their browser counterparts.

use std::time::{Duration, Instant};

use showcase_config::constants::{LINE_HEIGHT_PX, SCROLL_TO_TOP_THRESHOLD_PX, SMOOTH_SCROLL_MS};

use crate::ui::components::ScrollTween;

pub fn rows_to_px(rows: u16) -> u32 {
    u32::from(rows) * LINE_HEIGHT_PX
}

/// Percentage of the scrollable distance already travelled.
///
/// Returns 0 when the content fits in the viewport.
pub fn scroll_progress(scroll_top_px: u32, scroll_height_px: u32, viewport_px: u32) -> f64 {
    let denominator = f64::from(scroll_height_px) - f64::from(viewport_px);
    if denominator <= 0.0 {
        return 0.0;
    }
    f64::from(scroll_top_px) / denominator * 100.0
}

pub fn scroll_to_top_visible(scroll_top_px: u32) -> bool {
    scroll_top_px > SCROLL_TO_TOP_THRESHOLD_PX
}

/// Vertical offset of the page body.
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    offset: u16,
    tween: Option<ScrollTween>,
}

impl ScrollState {
    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Move by `delta` rows, cancelling any running animation.
    pub fn scroll_by(&mut self, delta: i32, max_offset: u16) {
        self.tween = None;
        let next = (i32::from(self.offset) + delta).clamp(0, i32::from(max_offset));
        self.offset = u16::try_from(next).unwrap_or(max_offset);
    }

    /// Jump to `offset`, cancelling any running animation.
    pub fn set(&mut self, offset: u16, max_offset: u16) {
        self.tween = None;
        self.offset = offset.min(max_offset);
    }

    /// Start an ease-out animation back to the top.
    pub fn smooth_to_top(&mut self, now: Instant) {
        if self.offset == 0 {
            self.tween = None;
            return;
        }
        self.tween = Some(ScrollTween::new(
            self.offset,
            0,
            Duration::from_millis(SMOOTH_SCROLL_MS),
            now,
        ));
    }

    /// Advance the animation. Returns whether the offset changed.
    pub fn tick(&mut self, now: Instant, max_offset: u16) -> bool {
        let Some(tween) = &self.tween else {
            return false;
        };
        let before = self.offset;
        self.offset = tween.value_at(now).min(max_offset);
        if tween.is_completed_at(now) {
            self.offset = tween.target().min(max_offset);
            self.tween = None;
        }
        self.offset != before
    }

    /// Keep the offset inside content that may have shrunk.
    pub fn clamp(&mut self, max_offset: u16) {
        self.offset = self.offset.min(max_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_scroll_to_top_threshold() {
        for (offset, expected) in [
            (0, false),
            (399, false),
            (400, false),
            (401, true),
            (10_000, true),
        ] {
            assert_eq!(scroll_to_top_visible(offset), expected, "offset {offset}");
        }
    }

    #[test]
    fn test_progress_halfway() {
        assert_eq!(scroll_progress(500, 1500, 500), 50.0);
        assert_eq!(scroll_progress(0, 400, 800), 0.0);
        assert_eq!(scroll_progress(0, 800, 800), 0.0);
    }

    #[test]
    fn test_scroll_by_clamps_and_cancels_animation() {
        let now = Instant::now();
        let mut scroll = ScrollState::default();
        scroll.scroll_by(50, 30);
        assert_eq!(scroll.offset(), 30);
        scroll.smooth_to_top(now);
        assert!(scroll.is_animating());
        scroll.scroll_by(-5, 30);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.offset(), 25);
        scroll.scroll_by(-100, 30);
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_smooth_to_top_reaches_zero() {
        let now = Instant::now();
        let mut scroll = ScrollState::default();
        scroll.set(40, 100);
        scroll.smooth_to_top(now);

        assert!(scroll.tick(now + Duration::from_millis(100), 100));
        let midway = scroll.offset();
        assert!(midway > 0 && midway < 40, "midway offset {midway}");

        scroll.tick(now + Duration::from_millis(SMOOTH_SCROLL_MS), 100);
        assert_eq!(scroll.offset(), 0);
        assert!(!scroll.is_animating());
        assert!(!scroll.tick(now + Duration::from_secs(1), 100));
    }

    #[test]
    fn test_smooth_to_top_at_top_is_noop() {
        let mut scroll = ScrollState::default();
        scroll.smooth_to_top(Instant::now());
        assert!(!scroll.is_animating());
    }

    proptest! {
        #[test]
        fn prop_progress_is_bounded(
            height in 0u32..100_000,
            viewport in 0u32..100_000,
            fraction in 0.0f64..=1.0,
        ) {
            let max = height.saturating_sub(viewport);
            let top = (f64::from(max) * fraction) as u32;
            let progress = scroll_progress(top, height, viewport);
            prop_assert!((0.0..=100.0).contains(&progress));
        }

        #[test]
        fn prop_threshold_matches_comparison(offset in any::<u32>()) {
            prop_assert_eq!(scroll_to_top_visible(offset), offset > 400);
        }
    }
}
