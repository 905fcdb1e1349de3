//! Linear history stack with a cursor, as kept by a browser tab.

/// Ordered fragments with a cursor at the current entry.
///
/// Invariants:
/// - There is always at least one entry.
/// - `cursor < entries.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Push a new entry, discarding any forward entries.
    ///
    /// Returns `false` without touching the stack when `value` equals the current entry.
    pub fn push(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if value == self.current() {
            return false;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(value);
        self.cursor += 1;
        true
    }

    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_same_value_is_noop() {
        let mut history = History::new("");
        assert!(history.push("forms"));
        assert!(!history.push("forms"));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_back_and_forward() {
        let mut history = History::new("");
        history.push("basics");
        history.push("forms");

        assert_eq!(history.back(), Some("basics"));
        assert_eq!(history.back(), Some(""));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), Some("basics"));
        assert!(history.can_go_forward());
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let mut history = History::new("");
        history.push("basics");
        history.push("forms");
        history.back();
        history.push("interactions");

        assert_eq!(history.len(), 3);
        assert!(!history.can_go_forward());
        assert_eq!(history.back(), Some("basics"));
    }
}
