//! On-premise mail sender.

use crate::domain::MailSender;
use crate::infrastructure::console::Console;
use std::rc::Rc;
use tracing::debug;

/// Mail sender that reports delivery through the on-premise mail server.
///
/// Behaves exactly like [`super::CloudMailSender`] apart from the label in
/// the confirmation line.
pub struct OnPremiseMailSender {
    console: Rc<dyn Console>,
}

impl OnPremiseMailSender {
    pub const SERVICE_NAME: &'static str = "OnPremiseMailService";

    pub fn new(console: Rc<dyn Console>) -> Self {
        Self { console }
    }
}

impl MailSender for OnPremiseMailSender {
    fn send(&mut self, message: &str) -> bool {
        debug!(service = Self::SERVICE_NAME, mail = message, "Sending mail");
        self.console.write_line(&format!(
            "Message \"{}\" sent via {}.",
            message,
            Self::SERVICE_NAME
        ));
        true
    }
}
