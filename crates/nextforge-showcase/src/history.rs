#![forbid(unsafe_code)]

//! Address-bar collaborator.
//!
//! The shell never owns browser history; it only reads the current location
//! and asks for `push` (user navigation) or `replace` (canonical rewrite).

/// Minimal router/history surface used by the shell.
pub trait History {
    /// Current location, including any query string.
    fn current_path(&self) -> &str;

    /// Add a new entry and make it current.
    fn push(&mut self, path: String);

    /// Overwrite the current entry.
    fn replace(&mut self, path: String);

    /// Step back one entry. Returns false at the start of history.
    fn back(&mut self) -> bool;

    /// Step forward one entry. Returns false at the end of history.
    fn forward(&mut self) -> bool;
}

/// In-memory history stack, as used by the CLI and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
        }
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Position of the current entry in [`entries`](Self::entries).
    pub fn index(&self) -> usize {
        self.index
    }
}

impl History for MemoryHistory {
    fn current_path(&self) -> &str {
        &self.entries[self.index]
    }

    fn push(&mut self, path: String) {
        self.entries.truncate(self.index + 1);
        self.entries.push(path);
        self.index = self.entries.len() - 1;
    }

    fn replace(&mut self, path: String) {
        self.entries[self.index] = path;
    }

    fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_replace() {
        let mut history = MemoryHistory::new("/component");
        history.replace("/component/buttons/decrypt".into());
        assert_eq!(history.entries(), ["/component/buttons/decrypt"]);

        history.push("/component/cards/parallax_gallery".into());
        assert_eq!(history.current_path(), "/component/cards/parallax_gallery");
        assert_eq!(history.entries().len(), 2);
    }

    #[test]
    fn back_and_forward_stop_at_ends() {
        let mut history = MemoryHistory::new("/a");
        history.push("/b".into());
        assert!(history.back());
        assert_eq!(history.current_path(), "/a");
        assert!(!history.back());
        assert!(history.forward());
        assert_eq!(history.current_path(), "/b");
        assert!(!history.forward());
    }

    #[test]
    fn push_discards_forward_entries() {
        let mut history = MemoryHistory::new("/a");
        history.push("/b".into());
        history.push("/c".into());
        history.back();
        history.back();
        history.push("/d".into());
        assert_eq!(history.entries(), ["/a", "/d"]);
        assert_eq!(history.index(), 1);
    }
}
