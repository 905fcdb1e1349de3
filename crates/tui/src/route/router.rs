//! Hash router: the single writer of navigation state into the location.
//!
//! Responsibilities:
//! - Derive the active page from the location fragment.
//! - Write the fragment for programmatic navigation.
//! - Traverse history and accept direct location edits.
//!
//! Does NOT handle:
//! - Menu state or scroll side effects of navigation (see `app::navigation`).
//!
//! Invariants:
//! - `current_page()` is always `PageId::from_fragment(location.fragment())`.

use super::location::Location;
use super::page::PageId;

#[derive(Debug)]
pub struct HashRouter {
    location: Location,
}

impl HashRouter {
    pub fn new(location: Location) -> Self {
        Self { location }
    }

    /// Page derived from the current fragment.
    pub fn current_page(&self) -> PageId {
        PageId::from_fragment(self.location.fragment())
    }

    pub fn fragment(&self) -> &str {
        self.location.fragment()
    }

    /// Write the fragment for `page`. Returns whether a history entry was created.
    pub fn navigate(&mut self, page: PageId) -> bool {
        self.location.set_hash(page.fragment())
    }

    /// Replace the location with user-typed text, as an address-bar edit would.
    pub fn edit(&mut self, raw: &str) -> bool {
        self.location.set_hash(raw)
    }

    pub fn back(&mut self) -> bool {
        self.location.back()
    }

    pub fn forward(&mut self) -> bool {
        self.location.forward()
    }

    pub fn location(&self) -> &Location {
        &self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::events::EventHub;

    fn router(initial: &str) -> HashRouter {
        HashRouter::new(Location::new(initial, EventHub::new()))
    }

    #[test]
    fn test_mount_derives_page_from_fragment() {
        assert_eq!(router("#forms").current_page(), PageId::Forms);
        assert_eq!(router("#nope").current_page(), PageId::Home);
        assert_eq!(router("").current_page(), PageId::Home);
    }

    #[test]
    fn test_navigate_writes_expected_fragment() {
        let mut router = router("");
        for page in PageId::ALL {
            router.navigate(page);
            assert_eq!(router.fragment(), page.fragment());
            assert_eq!(router.current_page(), page);
        }
    }

    #[test]
    fn test_repeated_navigation_creates_one_entry() {
        let mut router = router("");
        assert!(router.navigate(PageId::Forms));
        assert!(!router.navigate(PageId::Forms));
        assert_eq!(router.location().history().len(), 2);
    }

    #[test]
    fn test_edit_with_unknown_fragment_resolves_home() {
        let mut router = router("#basics");
        router.edit("#pricing");
        assert_eq!(router.fragment(), "pricing");
        assert_eq!(router.current_page(), PageId::Home);
    }
}
