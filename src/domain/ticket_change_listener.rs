//! Listener trait for ticket change notifications.

use crate::domain::ticket_change::TicketChange;

/// Receives [`TicketChange`] notifications from a
/// [`crate::application::services::TicketChangeNotifier`].
///
/// Delivery is synchronous: the notifier calls each listener in turn on the
/// caller's thread and the payload is only borrowed for the duration of the
/// call.
///
/// # Implementations
///
/// - [`crate::infrastructure::listeners::TicketStockService`] - stock bookkeeping
/// - [`crate::infrastructure::listeners::TicketResellerService`] - reseller bookkeeping
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait TicketChangeListener {
    fn receive_ticket_change(&self, change: &TicketChange);
}
