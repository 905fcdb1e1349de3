//! Fragment-based routing.
//!
//! Responsibilities:
//! - Map location fragments to page identifiers and back (`page`).
//! - Describe each page's chrome (`registry`).
//! - Keep the location fragment and its history stack (`history`, `location`).
//! - Derive the active page from the location and write it on navigation (`router`).
//!
//! Does NOT handle:
//! - Shell state such as the menu or scroll tracking (see `app`).
//! - Rendering page content (see `pages`).
//!
//! Invariants:
//! - Unrecognized fragments always resolve to `PageId::Home`.
//! - Writing the fragment that is already current is a no-op: no history entry, no event.

mod history;
mod location;
mod page;
mod registry;
mod router;

pub use history::History;
pub use location::Location;
pub use page::PageId;
pub use registry::{VIEWS, ViewDescriptor, content_pages, descriptor};
pub use router::HashRouter;
