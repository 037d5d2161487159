//! Ticket sale notification walkthrough.

use std::rc::Rc;

use crate::application::services::OrderService;
use crate::domain::TicketChangeListener;
use crate::infrastructure::console::Console;
use crate::infrastructure::listeners::{TicketResellerService, TicketStockService};
use tracing::info;

/// Runs the observer walkthrough, writing its transcript to `console`.
///
/// # Steps
///
/// 1. Subscribe the stock listener, then the reseller listener
/// 2. Complete a sale of 2 tickets for artist 1
/// 3. Write a blank separator line
/// 4. Unsubscribe the reseller listener
/// 5. Complete a sale of 4 tickets for artist 2
pub fn run_observer_scenario(console: Rc<dyn Console>) {
    info!("Running observer scenario");

    let stock: Rc<dyn TicketChangeListener> = Rc::new(TicketStockService::new(console.clone()));
    let reseller: Rc<dyn TicketChangeListener> =
        Rc::new(TicketResellerService::new(console.clone()));

    let mut orders = OrderService::new(console.clone());
    orders.subscribe(stock);
    orders.subscribe(reseller.clone());

    orders.complete_sale(1, 2);

    console.write_line("");

    orders.unsubscribe(&reseller);

    orders.complete_sale(2, 4);

    info!(
        listeners = orders.notifier().len(),
        "Observer scenario finished"
    );
}
