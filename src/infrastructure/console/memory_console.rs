//! In-memory console for tests and embedding.

use super::service::Console;
use std::cell::RefCell;

/// A console that records every line instead of printing it.
///
/// # Use Cases
///
/// - Asserting the order of side effects in tests
/// - Capturing a scenario transcript for later rendering
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: RefCell<Vec<String>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all lines written so far, in write order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Number of lines written so far.
    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    /// Discards all recorded lines.
    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl Console for MemoryConsole {
    fn write_line(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_console_records_in_order() {
        let console = MemoryConsole::new();
        assert!(console.is_empty());

        console.write_line("first");
        console.write_line("second");

        assert_eq!(console.len(), 2);
        assert_eq!(console.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_memory_console_clear() {
        let console = MemoryConsole::new();
        console.write_line("line");

        console.clear();

        assert!(console.is_empty());
    }
}
