//! Time-based animation helpers.
//!
//! Used for the page entry transition and the smooth scroll-to-top.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use ui_showcase::ui::components::AnimationController;
//!
//! let start = Instant::now();
//! let fade = AnimationController::ease_out(Duration::from_millis(300), start);
//! assert!(!fade.is_completed_at(start));
//! assert!(fade.is_completed_at(start + Duration::from_millis(300)));
//! ```

use std::time::{Duration, Instant};

/// Progress curve applied to raw elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOutCubic,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Tracks a single run of an animation.
#[derive(Debug, Clone)]
pub struct AnimationController {
    start_time: Instant,
    duration: Duration,
    easing: Easing,
}

impl AnimationController {
    pub fn new(duration: Duration, easing: Easing, now: Instant) -> Self {
        Self {
            start_time: now,
            duration,
            easing,
        }
    }

    pub fn ease_out(duration: Duration, now: Instant) -> Self {
        Self::new(duration, Easing::EaseOutCubic, now)
    }

    /// Restart from `now`.
    pub fn reset(&mut self, now: Instant) {
        self.start_time = now;
    }

    /// Linear progress in 0.0..=1.0.
    pub fn raw_progress_at(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Eased progress in 0.0..=1.0.
    pub fn progress_at(&self, now: Instant) -> f64 {
        self.easing.apply(self.raw_progress_at(now))
    }

    pub fn is_completed_at(&self, now: Instant) -> bool {
        self.raw_progress_at(now) >= 1.0
    }

    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.duration
            .saturating_sub(now.saturating_duration_since(self.start_time))
    }
}

/// Animated movement between two row offsets.
#[derive(Debug, Clone)]
pub struct ScrollTween {
    from: u16,
    to: u16,
    animation: AnimationController,
}

impl ScrollTween {
    pub fn new(from: u16, to: u16, duration: Duration, now: Instant) -> Self {
        Self {
            from,
            to,
            animation: AnimationController::ease_out(duration, now),
        }
    }

    pub fn target(&self) -> u16 {
        self.to
    }

    pub fn value_at(&self, now: Instant) -> u16 {
        let t = self.animation.progress_at(now);
        let from = f64::from(self.from);
        let to = f64::from(self.to);
        (from + (to - from) * t).round() as u16
    }

    pub fn is_completed_at(&self, now: Instant) -> bool {
        self.animation.is_completed_at(now)
    }
}
