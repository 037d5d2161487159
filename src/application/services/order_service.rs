//! Ticket order service, the concrete subject of sale notifications.

use std::rc::Rc;

use super::notifier::TicketChangeNotifier;
use crate::domain::{TicketChange, TicketChangeListener};
use crate::infrastructure::console::Console;
use tracing::info;

/// Service completing ticket sales and publishing the resulting changes.
///
/// Owns the [`TicketChangeNotifier`]; listeners are registered through
/// [`subscribe`](Self::subscribe) and receive a [`TicketChange`] for every
/// completed sale.
pub struct OrderService {
    notifier: TicketChangeNotifier,
    console: Rc<dyn Console>,
}

impl OrderService {
    pub const NAME: &'static str = "OrderService";

    pub fn new(console: Rc<dyn Console>) -> Self {
        Self {
            notifier: TicketChangeNotifier::new(),
            console,
        }
    }

    pub fn subscribe(&mut self, listener: Rc<dyn TicketChangeListener>) {
        self.notifier.subscribe(listener);
    }

    /// Removes the earliest registration of `listener`.
    ///
    /// Returns `false` without error when the listener is not registered.
    pub fn unsubscribe(&mut self, listener: &Rc<dyn TicketChangeListener>) -> bool {
        self.notifier.unsubscribe(listener)
    }

    /// Completes a sale of `amount` tickets for `artist_id`.
    ///
    /// # Flow
    ///
    /// 1. Update the ticket store (no store is kept; the state change is reported)
    /// 2. Build a [`TicketChange`] for the sale
    /// 3. Notify every listener synchronously, in registration order
    ///
    /// Always succeeds.
    pub fn complete_sale(&self, artist_id: i32, amount: i32) -> TicketChange {
        info!(artist_id, amount, "Completing ticket sale");

        self.console
            .write_line(&format!("{} is changing its state.", Self::NAME));
        self.console
            .write_line(&format!("{} is notifying observers...", Self::NAME));

        let change = TicketChange::new(artist_id, amount);
        self.notifier.notify_all(&change);
        change
    }

    pub fn notifier(&self) -> &TicketChangeNotifier {
        &self.notifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockTicketChangeListener;
    use crate::infrastructure::console::MemoryConsole;
    use crate::infrastructure::listeners::TicketStockService;
    use mockall::Sequence;
    use std::cell::RefCell;
    use std::rc::Weak;

    /// Listener that reaches back into its subject to unsubscribe `target`.
    struct UnsubscribingListener {
        service: Weak<RefCell<OrderService>>,
        target: Rc<dyn TicketChangeListener>,
    }

    impl TicketChangeListener for UnsubscribingListener {
        fn receive_ticket_change(&self, _change: &TicketChange) {
            if let Some(service) = self.service.upgrade() {
                service.borrow_mut().unsubscribe(&self.target);
            }
        }
    }

    #[test]
    fn test_complete_sale_notifies_in_order() {
        let console = Rc::new(MemoryConsole::new());
        let mut seq = Sequence::new();

        let mut stock = MockTicketChangeListener::new();
        let mut reseller = MockTicketChangeListener::new();
        stock
            .expect_receive_ticket_change()
            .withf(|change| change.artist_id() == 1 && change.amount() == 2)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        reseller
            .expect_receive_ticket_change()
            .withf(|change| change.artist_id() == 1 && change.amount() == 2)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut service = OrderService::new(console.clone());
        service.subscribe(Rc::new(stock));
        service.subscribe(Rc::new(reseller));

        let change = service.complete_sale(1, 2);

        assert_eq!(change, TicketChange::new(1, 2));
        assert_eq!(
            console.lines(),
            vec![
                "OrderService is changing its state.",
                "OrderService is notifying observers...",
            ]
        );
    }

    #[test]
    fn test_complete_sale_after_unsubscribe() {
        let console = Rc::new(MemoryConsole::new());

        let mut stock = MockTicketChangeListener::new();
        let mut reseller = MockTicketChangeListener::new();
        stock
            .expect_receive_ticket_change()
            .withf(|change| *change == TicketChange::new(2, 4))
            .times(1)
            .return_const(());
        reseller.expect_receive_ticket_change().never();

        let stock: Rc<dyn TicketChangeListener> = Rc::new(stock);
        let reseller: Rc<dyn TicketChangeListener> = Rc::new(reseller);

        let mut service = OrderService::new(console);
        service.subscribe(stock);
        service.subscribe(reseller.clone());

        assert!(service.unsubscribe(&reseller));
        service.complete_sale(2, 4);

        assert_eq!(service.notifier().len(), 1);
    }

    #[test]
    fn test_complete_sale_without_listeners() {
        let console = Rc::new(MemoryConsole::new());
        let service = OrderService::new(console.clone());

        service.complete_sale(5, 1);

        assert_eq!(console.len(), 2);
    }

    #[test]
    #[should_panic(expected = "already borrowed")]
    fn test_unsubscribe_from_inside_notification_panics() {
        let console = Rc::new(MemoryConsole::new());
        let service = Rc::new(RefCell::new(OrderService::new(console.clone())));

        let target: Rc<dyn TicketChangeListener> = Rc::new(TicketStockService::new(console));
        let listener = Rc::new(UnsubscribingListener {
            service: Rc::downgrade(&service),
            target: target.clone(),
        });

        service.borrow_mut().subscribe(listener);
        service.borrow_mut().subscribe(target);

        service.borrow().complete_sale(1, 2);
    }
}
