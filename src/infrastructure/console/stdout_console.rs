//! Console implementation backed by standard output.

use super::service::Console;

/// Writes transcript lines to stdout.
///
/// Diagnostic logging goes to stderr (see `main.rs`), so the transcript
/// stays clean when stdout is piped.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}
