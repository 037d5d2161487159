//! Services for the ticket sale workflow.

pub mod notifier;
pub mod order_service;

pub use notifier::TicketChangeNotifier;
pub use order_service::OrderService;
