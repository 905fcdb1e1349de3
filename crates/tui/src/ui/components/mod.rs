//! Reusable UI components shared by widget sections and the shell.

pub mod animation;
pub mod big_text;
pub mod slider;

pub use animation::{AnimationController, Easing, ScrollTween};
pub use big_text::BigTextWidget;
pub use slider::Slider;
