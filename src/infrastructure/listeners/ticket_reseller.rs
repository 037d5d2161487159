//! Reseller bookkeeping listener.

use crate::domain::{TicketChange, TicketChangeListener};
use crate::infrastructure::console::Console;
use std::rc::Rc;
use tracing::debug;

/// Updates reseller availability when a sale completes.
pub struct TicketResellerService {
    console: Rc<dyn Console>,
}

impl TicketResellerService {
    pub const NAME: &'static str = "TicketResellerService";

    pub fn new(console: Rc<dyn Console>) -> Self {
        Self { console }
    }
}

impl TicketChangeListener for TicketResellerService {
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
