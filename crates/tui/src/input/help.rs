//! Help overlay rendering from centralized keybindings.
//!
//! Responsibilities:
//! - Convert keybinding metadata into a human-readable help string.
//! - Generate context-aware help that hides bindings inactive on a page.
//!
//! Does NOT handle:
//! - Mutating application state.
//! - Owning keybinding definitions (delegated to keymap).
//!
//! Invariants:
//! - Rendering order is stable across runs for snapshot determinism.
//! - Duplicate (keys, description) pairs render once.

use std::collections::BTreeSet;

use crate::input::keymap::{Group, keybindings, groups_in_order};
use crate::route::PageId;

/// Help for every binding regardless of page.
#[cfg(test)]
pub(crate) fn help_text() -> String {
    render(|_| true)
}

/// Help limited to bindings active on `page`.
pub fn contextual_help_text(page: PageId) -> String {
    render(|binding| binding.scope_applies(page))
}

fn render(include: impl Fn(&crate::input::keymap::Keybinding) -> bool) -> String {
    let mut out = String::new();
    for &group in groups_in_order() {
        let entries = unique_entries(group, &include);
        if entries.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(group_title(group));
        out.push('\n');
        let max_key_len = entries
            .iter()
            .map(|(keys, _)| keys.chars().count())
            .max()
            .unwrap_or(0);
        for (keys, description) in entries {
            let padding = max_key_len.saturating_sub(keys.chars().count()) + 2;
            out.push_str("  ");
            out.push_str(keys);
            out.push_str(&" ".repeat(padding));
            out.push_str(description);
            out.push('\n');
        }
    }
    out
}

fn unique_entries(
    group: Group,
    include: &impl Fn(&crate::input::keymap::Keybinding) -> bool,
) -> Vec<(&'static str, &'static str)> {
    let mut seen = BTreeSet::new();
    let mut entries = Vec::new();
    for binding in keybindings() {
        if binding.group != group || !include(&binding) {
            continue;
        }
        let key = (binding.keys, binding.description);
        if seen.insert(key) {
            entries.push(key);
        }
    }
    entries
}

fn group_title(group: Group) -> &'static str {
    match group {
        Group::Shortcuts => "Shortcuts:",
        Group::Shell => "Shell:",
        Group::Scrolling => "Scrolling:",
        Group::Navigation => "Navigation:",
        Group::Menu => "Menu (content pages):",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_text_includes_every_group() {
        let help = help_text();
        for title in [
            "Shortcuts:",
            "Shell:",
            "Scrolling:",
            "Navigation:",
            "Menu (content pages):",
        ] {
            assert!(help.contains(title), "help should include {title}");
        }
    }

    #[test]
    fn help_text_deduplicates_aliases() {
        let help = help_text();
        assert_eq!(help.matches("Toggle menu").count(), 2, "Ctrl+/ and m");
        assert_eq!(help.matches("Scroll down").count(), 1);
    }

    #[test]
    fn home_help_hides_content_page_bindings() {
        let help = contextual_help_text(PageId::Home);
        assert!(!help.contains("Back to home"));
        assert!(!help.contains("Menu (content pages):"));

        let help = contextual_help_text(PageId::Forms);
        assert!(help.contains("Back to home"));
    }

    #[test]
    fn descriptions_align_within_a_group() {
        let help = help_text();
        let columns: BTreeSet<usize> = keybindings()
            .iter()
            .filter(|binding| binding.group == Group::Shortcuts)
            .filter_map(|binding| {
                help.lines()
                    .find(|line| {
                        line.trim_start().starts_with(binding.keys)
                            && line.ends_with(binding.description)
                    })
                    .map(|line| line.chars().count() - binding.description.chars().count())
            })
            .collect();
        assert_eq!(columns.len(), 1, "descriptions should align: {columns:?}");
    }
}
