//! UI Showcase library.
//!
//! This library provides the navigation shell, the hash router, the page
//! compositions and the widget sections behind the `ui-showcase` terminal
//! application.
//!
//! # Example
//!
//! ```rust
//! use ui_showcase::{Action, App, EventHub, PageId};
//! use showcase_config::ConfigLoader;
//!
//! let config = ConfigLoader::new().build().unwrap();
//! let mut app = App::new(&config, EventHub::new());
//! app.update(Action::Navigate(PageId::Forms));
//! assert_eq!(app.fragment(), "forms");
//! assert_eq!(app.current_page(), PageId::Forms);
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod input;
pub mod pages;
pub mod route;
pub mod runtime;
pub mod ui;
pub mod widgets;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, FOOTER_HEIGHT, HEADER_HEIGHT};
pub use route::{HashRouter, Location, PageId};
pub use runtime::events::{EventHub, EventKind, Subscription};
pub use ui::toast::{Toast, ToastLevel};
