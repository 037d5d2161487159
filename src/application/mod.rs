//! Application layer composing domain contracts into working pipelines.
//!
//! This layer adds behaviour on top of the capability traits defined in
//! [`crate::domain`] without depending on any concrete implementation.
//!
//! # Modules
//!
//! - [`decorators`] - Mail sender decorators and chain builders
//! - [`services::order_service::OrderService`] - Ticket sales and change publication
//! - [`services::notifier::TicketChangeNotifier`] - Listener registry and fan-out

pub mod decorators;
pub mod services;
