//! Console output trait.

/// Line-oriented sink for the human-readable transcript.
///
/// Every observable side effect in the mail pipeline and the ticket
/// notifier writes exactly one line through this trait, so the presence and
/// order of lines is the externally visible behaviour of a scenario.
///
/// # Implementations
///
/// - [`crate::infrastructure::console::StdoutConsole`] - prints to stdout
/// - [`crate::infrastructure::console::MemoryConsole`] - records lines for inspection
pub trait Console {
    fn write_line(&self, line: &str);
}
