//! Subscriber registry and synchronous fan-out for ticket changes.

use crate::domain::{TicketChange, TicketChangeListener};
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// Ordered registry of [`TicketChangeListener`]s.
///
/// # Semantics
///
/// - Listeners are notified in registration order.
/// - Registering the same listener twice is allowed and results in two
///   notifications per event.
/// - Listener identity is the `Rc` allocation: two handles are the same
///   listener when they point to the same value.
///
/// # Reentrancy
///
/// [`notify_all`](Self::notify_all) borrows the notifier immutably while
/// [`subscribe`](Self::subscribe) and [`unsubscribe`](Self::unsubscribe)
/// require a mutable borrow. A listener that only holds its own state cannot
/// reach the registry it is being notified from. Modifying the registry from
/// inside a callback is not supported: if the owner is shared as
/// `Rc<RefCell<_>>` and a listener reaches back through it, the call compiles
/// but panics with a `RefCell` borrow error.
#[derive(Default)]
pub struct TicketChangeNotifier {
    listeners: Vec<Rc<dyn TicketChangeListener>>,
}

impl TicketChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `listener` to the registry.
    pub fn subscribe(&mut self, listener: Rc<dyn TicketChangeListener>) {
        self.listeners.push(listener);
        debug!(listeners = self.listeners.len(), "Listener subscribed");
    }

    /// Removes the earliest registration of `listener`.
    ///
    /// Returns `true` if a registration was removed. Removing a listener that
    /// was never registered leaves the registry untouched and returns `false`.
    pub fn unsubscribe(&mut self, listener: &Rc<dyn TicketChangeListener>) -> bool {
        let Some(index) = self
            .listeners
            .iter()
            .position(|registered| same_listener(registered, listener))
        else {
            debug!("Unsubscribe ignored, listener not registered");
            return false;
        };

        self.listeners.remove(index);
        debug!(listeners = self.listeners.len(), "Listener unsubscribed");
        true
    }

    /// Delivers `change` to every registered listener, in registration order.
    pub fn notify_all(&self, change: &TicketChange) {
        debug!(
            listeners = self.listeners.len(),
            artist_id = change.artist_id(),
            amount = change.amount(),
            "Notifying listeners"
        );

        for listener in &self.listeners {
            listener.receive_ticket_change(change);
        }
    }

    /// Number of registrations, counting duplicates.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for TicketChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TicketChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

// Compares data pointers only; vtable pointers for the same type may differ
// across codegen units.
fn same_listener(a: &Rc<dyn TicketChangeListener>, b: &Rc<dyn TicketChangeListener>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
