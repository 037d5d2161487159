//! Domain layer containing the capability contracts and event model.
//!
//! Traits defined here are implemented by the infrastructure layer (base mail
//! senders, concrete listeners) and consumed by the application layer
//! (decorators, notifier, order service).
//!
//! # Architecture
//!
//! - [`mail_sender`] - The `MailSender` capability
//! - [`ticket_change`] - Immutable ticket sale event
//! - [`ticket_change_listener`] - Observer contract for ticket sales
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` under `cfg(test)`.

pub mod mail_sender;
pub mod ticket_change;
pub mod ticket_change_listener;

pub use mail_sender::MailSender;
pub use ticket_change::TicketChange;
pub use ticket_change_listener::TicketChangeListener;

#[cfg(test)]
pub use mail_sender::MockMailSender;
#[cfg(test)]
pub use ticket_change_listener::MockTicketChangeListener;
