//! Mail sending capability shared by base senders and decorators.

/// Capability contract for anything that can send a mail message.
///
/// Base senders deliver the message; decorators wrap another `MailSender`
/// and add one side effect around the delegated call. Decorators depend on
/// this trait only, so any implementor (including another decorator) is a
/// legal wrap target.
///
/// # Implementations
///
/// - [`crate::infrastructure::mail::CloudMailSender`] - cloud delivery
/// - [`crate::infrastructure::mail::OnPremiseMailSender`] - on-premise delivery
/// - [`crate::application::decorators::StatisticsDecorator`] - metrics before delegating
/// - [`crate::application::decorators::MessageDatabaseDecorator`] - archive after success
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait MailSender {
    /// Sends `message`, returning `true` on success.
    ///
    /// There is no richer failure type: a sender either delivered the
    /// message or it did not.
    fn send(&mut self, message: &str) -> bool;
}

impl<S: MailSender + ?Sized> MailSender for Box<S> {
    fn send(&mut self, message: &str) -> bool {
        (**self).send(message)
    }
}

impl<S: MailSender + ?Sized> MailSender for &mut S {
    fn send(&mut self, message: &str) -> bool {
        (**self).send(message)
    }
}
