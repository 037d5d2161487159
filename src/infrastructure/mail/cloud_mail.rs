//! Cloud-hosted mail sender.

use crate::domain::MailSender;
use crate::infrastructure::console::Console;
use std::rc::Rc;
use tracing::debug;

/// Mail sender that reports delivery through the cloud mail service.
///
/// No transport is involved: sending writes a confirmation line to the
/// console and always succeeds.
pub struct CloudMailSender {
    console: Rc<dyn Console>,
}

impl CloudMailSender {
    /// Label used in the confirmation line.
    pub const SERVICE_NAME: &'static str = "CloudMailService";

    pub fn new(console: Rc<dyn Console>) -> Self {
        Self { console }
    }
}

impl MailSender for CloudMailSender {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::console::MemoryConsole;

    #[test]
    fn test_cloud_sender_always_succeeds() {
        let console = Rc::new(MemoryConsole::new());
        let mut sender = CloudMailSender::new(console.clone());

        assert!(sender.send("Hi there."));
        assert!(sender.send(""));
        assert_eq!(console.len(), 2);
    }

    #[test]
    fn test_cloud_sender_output() {
        let console = Rc::new(MemoryConsole::new());
        let mut sender = CloudMailSender::new(console.clone());

        sender.send("Hi there.");

        assert_eq!(
            console.lines(),
            vec!["Message \"Hi there.\" sent via CloudMailService."]
        );
    }
}
