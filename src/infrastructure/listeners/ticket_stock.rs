//! Stock bookkeeping listener.

use crate::domain::{TicketChange, TicketChangeListener};
use crate::infrastructure::console::Console;
use std::rc::Rc;
use tracing::debug;

/// Adjusts remaining ticket stock when a sale completes.
///
/// The stock store itself is out of scope; receipt of the change is
/// reported on the console.
pub struct TicketStockService {
    console: Rc<dyn Console>,
}

impl TicketStockService {
    pub const NAME: &'static str = "TicketStockService";

    pub fn new(console: Rc<dyn Console>) -> Self {
        Self { console }
    }
}

impl TicketChangeListener for TicketStockService {
    fn receive_ticket_change(&self, change: &TicketChange) {
        debug!(
            listener = Self::NAME,
            artist_id = change.artist_id(),
            amount = change.amount(),
            "Ticket change received"
        );
        self.console.write_line(&format!(
            "{} notified of ticket change: artist {}, amount {}",
            Self::NAME,
            change.artist_id(),
            change.amount()
        ));
    }
}
