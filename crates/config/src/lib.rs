//! Configuration management for the UI showcase.
//!
//! This crate provides the layered configuration (CLI overrides, environment
//! variables, `.env` files, defaults), the color theme palettes, and the shared
//! timing/layout constants used by the terminal frontend.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{ColorTheme, ShowcaseConfig, Theme};
