//! Infrastructure layer for concrete collaborators.
//!
//! This layer implements interfaces defined by the domain layer and provides
//! the console the demonstrations write their transcript to.
//!
//! # Modules
//!
//! - [`console`] - Transcript output (stdout and in-memory implementations)
//! - [`listeners`] - Concrete ticket change listeners
//! - [`mail`] - Base mail senders

pub mod console;
pub mod listeners;
pub mod mail;
