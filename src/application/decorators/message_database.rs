//! Message archiving mail decorator.

use crate::domain::MailSender;
use tracing::debug;

/// Delegates to the wrapped sender and archives every message it accepts.
///
/// The archive is an in-memory, append-only list kept in send order. A
/// message is only recorded when the wrapped sender reports success, and the
/// wrapped sender's result is always returned unchanged.
pub struct MessageDatabaseDecorator<S: MailSender> {
    inner: S,
    sent_messages: Vec<String>,
}

impl<S: MailSender> MessageDatabaseDecorator<S> {
    pub const NAME: &'static str = "MessageDatabaseDecorator";

    pub fn new(inner: S) -> Self {
        Self {
            inner,
            sent_messages: Vec::new(),
        }
    }

    /// Messages successfully sent through this decorator, oldest first.
    pub fn sent_messages(&self) -> &[String] {
        &self.sent_messages
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwraps the decorator, discarding the archive.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: MailSender> MailSender for MessageDatabaseDecorator<S> {
    fn send(&mut self, message: &str) -> bool {
        if !self.inner.send(message) {
            debug!(decorator = Self::NAME, "Send failed, message not archived");
            return false;
        }

        self.sent_messages.push(message.to_string());
        debug!(
            decorator = Self::NAME,
            archived = self.sent_messages.len(),
            "Message archived"
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockMailSender;
    use mockall::predicate::eq;

    #[test]
    fn test_archives_successful_sends_in_order() {
        let mut mock = MockMailSender::new();
        mock.expect_send().times(3).return_const(true);

        let mut decorator = MessageDatabaseDecorator::new(mock);

        assert!(decorator.send("m1"));
        assert!(decorator.send("m2"));
        assert!(decorator.send("m3"));

        assert_eq!(decorator.sent_messages(), ["m1", "m2", "m3"]);
    }

    #[test]
    fn test_failed_send_is_not_archived() {
        let mut mock = MockMailSender::new();
        mock.expect_send().with(eq("ok")).times(1).return_const(true);
        mock.expect_send()
            .with(eq("rejected"))
            .times(1)
            .return_const(false);

        let mut decorator = MessageDatabaseDecorator::new(mock);

        assert!(decorator.send("ok"));
        assert!(!decorator.send("rejected"));

        assert_eq!(decorator.sent_messages(), ["ok"]);
    }

    #[test]
    fn test_empty_archive_before_any_send() {
        let mock = MockMailSender::new();
        let decorator = MessageDatabaseDecorator::new(mock);

        assert!(decorator.sent_messages().is_empty());
    }
}
