//! Ticket change event model for sale notifications.

/// State change published when tickets for an artist are sold.
///
/// A change for artist `1` with amount `2` means two tickets for that artist
/// have been sold. Values are built once per sale by
/// [`crate::application::services::OrderService::complete_sale`] and handed
/// by reference to every subscribed listener; fields are private so no
/// listener can alter the payload another listener observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicketChange {
    artist_id: i32,
    amount: i32,
}

impl TicketChange {
    /// Creates a new ticket change.
    ///
    /// # Examples
    ///
    /// ```
    /// use pattern_demos::domain::TicketChange;
    ///
    /// let change = TicketChange::new(1, 2);
    /// assert_eq!(change.artist_id(), 1);
    /// assert_eq!(change.amount(), 2);
    /// ```
    pub fn new(artist_id: i32, amount: i32) -> Self {
        Self { artist_id, amount }
    }

    pub fn artist_id(&self) -> i32 {
        self.artist_id
    }

    /// Number of tickets sold. May be negative for corrections.
    pub fn amount(&self) -> i32 {
        self.amount
    }
}
