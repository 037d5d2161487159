//! Concrete ticket change listeners.
//!
//! - [`TicketStockService`] - keeps ticket stock in line with sales
//! - [`TicketResellerService`] - keeps reseller listings in line with sales

mod ticket_reseller;
mod ticket_stock;

pub use ticket_reseller::TicketResellerService;
pub use ticket_stock::TicketStockService;
