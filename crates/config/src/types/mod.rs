//! Configuration types.

mod showcase;
mod theme;

pub use showcase::ShowcaseConfig;
pub use theme::{ColorTheme, Theme, UnknownTheme};
