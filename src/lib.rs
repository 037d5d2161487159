//! # Pattern Demos
//!
//! Two small, synchronous demonstrations of classic object-oriented patterns
//! expressed with Rust traits.
//!
//! ## Architecture
//!
//! The crate keeps the same layer separation as a larger service would:
//!
//! - **Domain Layer** ([`domain`]) - Capability traits and the ticket change event
//! - **Application Layer** ([`application`]) - Mail decorators, notifier and order service
//! - **Infrastructure Layer** ([`infrastructure`]) - Base mail senders, listeners, console
//! - **Scenarios** ([`scenarios`]) - Scripted walkthroughs run by the binary
//!
//! ## Patterns
//!
//! - **Decorator**: [`domain::MailSender`] is implemented by two base senders
//!   and by [`application::decorators::StatisticsDecorator`] and
//!   [`application::decorators::MessageDatabaseDecorator`], which wrap any
//!   other sender.
//! - **Observer**: [`application::services::OrderService`] publishes a
//!   [`domain::TicketChange`] to every subscribed
//!   [`domain::TicketChangeListener`] when a sale completes.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run                # both walkthroughs
//! cargo run -- observer    # only the ticket notifier
//! RUST_LOG=debug cargo run -- decorator
//! ```
//!
//! ## Configuration
//!
//! Logging is configured from environment variables via [`config::Config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod scenarios;

pub use error::ConfigError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::decorators::{
        MailSenderExt, MessageDatabaseDecorator, StatisticsDecorator,
    };
    pub use crate::application::services::{OrderService, TicketChangeNotifier};
    pub use crate::domain::{MailSender, TicketChange, TicketChangeListener};
    pub use crate::infrastructure::console::{Console, MemoryConsole, StdoutConsole};
    pub use crate::infrastructure::listeners::{TicketResellerService, TicketStockService};
    pub use crate::infrastructure::mail::{CloudMailSender, OnPremiseMailSender};
}
