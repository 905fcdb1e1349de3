//! Page identifiers and their fragment encoding.

use std::fmt;

/// Closed set of pages the showcase can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageId {
    #[default]
    Home,
    Basics,
    Forms,
    Interactions,
}

impl PageId {
    pub const ALL: [PageId; 4] = [Self::Home, Self::Basics, Self::Forms, Self::Interactions];

    /// Derive a page from a location fragment.
    ///
    /// Accepts the fragment with or without a leading `#` and ignores
    /// surrounding whitespace. Matching is case-sensitive. Anything that is
    /// not `basics`, `forms` or `interactions` resolves to `Home`.
    pub fn from_fragment(raw: &str) -> Self {
        let trimmed = raw.trim();
        let fragment = trimmed.strip_prefix('#').unwrap_or(trimmed);
        match fragment {
            "basics" => Self::Basics,
            "forms" => Self::Forms,
            "interactions" => Self::Interactions,
            _ => Self::Home,
        }
    }

    /// Fragment written to the location for this page. Home is the empty fragment.
    pub fn fragment(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Basics => "basics",
            Self::Forms => "forms",
            Self::Interactions => "interactions",
        }
    }

    /// Stable identifier used in logs.
    pub fn key(self) -> &'static str {
        match self {
            Self::Home => "home",
            other => other.fragment(),
        }
    }

    pub fn is_home(self) -> bool {
        self == Self::Home
    }

    /// Position in `ALL`, used for numeric shortcuts and registry lookup.
    pub fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Basics => 1,
            Self::Forms => 2,
            Self::Interactions => 3,
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_fragments_resolve() {
        assert_eq!(PageId::from_fragment("basics"), PageId::Basics);
        assert_eq!(PageId::from_fragment("#forms"), PageId::Forms);
        assert_eq!(PageId::from_fragment("  #interactions "), PageId::Interactions);
        assert_eq!(PageId::from_fragment(""), PageId::Home);
        assert_eq!(PageId::from_fragment("#"), PageId::Home);
    }

    #[test]
    fn test_unknown_fragments_fall_back_to_home() {
        for raw in ["home", "Basics", "#FORMS", "settings", "##forms", "forms/extra"] {
            assert_eq!(PageId::from_fragment(raw), PageId::Home, "{raw}");
        }
    }

    #[test]
    fn test_fragment_round_trip() {
        for page in PageId::ALL {
            assert_eq!(PageId::from_fragment(page.fragment()), page);
            assert_eq!(PageId::ALL[page.index()], page);
        }
        assert_eq!(PageId::Home.fragment(), "");
    }

    proptest! {
        #[test]
        fn prop_arbitrary_fragments_never_panic(raw in ".{0,24}") {
            let page = PageId::from_fragment(&raw);
            let known = ["basics", "forms", "interactions"];
            let cleaned = raw.trim();
            let cleaned = cleaned.strip_prefix('#').unwrap_or(cleaned);
            if !known.contains(&cleaned) {
                prop_assert_eq!(page, PageId::Home);
            }
        }
    }
}
