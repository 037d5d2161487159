//! Transcript output for the demonstrations.
//!
//! Provides a [`Console`] trait with two implementations:
//! - [`StdoutConsole`] - Production console printing to stdout
//! - [`MemoryConsole`] - Recording console for tests

mod memory_console;
mod service;
mod stdout_console;

pub use memory_console::MemoryConsole;
pub use service::Console;
pub use stdout_console::StdoutConsole;
