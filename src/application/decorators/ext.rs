//! Builder-style adapters for composing decorator chains.

use super::{MessageDatabaseDecorator, StatisticsDecorator};
use crate::domain::MailSender;
use crate::infrastructure::console::Console;
use std::rc::Rc;

/// Extension methods available on every [`MailSender`].
///
/// Each adapter consumes the sender and returns it wrapped, so chains read
/// from the base sender outwards:
///
/// ```
/// use std::rc::Rc;
/// use pattern_demos::application::decorators::MailSenderExt;
/// use pattern_demos::domain::MailSender;
/// use pattern_demos::infrastructure::console::{Console, MemoryConsole};
/// use pattern_demos::infrastructure::mail::CloudMailSender;
///
/// let console: Rc<dyn Console> = Rc::new(MemoryConsole::new());
/// let mut sender = CloudMailSender::new(console.clone())
///     .with_message_database()
///     .with_statistics(console);
///
/// assert!(sender.send("Hello"));
/// assert_eq!(sender.inner().sent_messages(), ["Hello"]);
/// ```
pub trait MailSenderExt: MailSender + Sized {
    fn with_statistics(self, console: Rc<dyn Console>) -> StatisticsDecorator<Self> {
        StatisticsDecorator::new(self, console)
    }

    fn with_message_database(self) -> MessageDatabaseDecorator<Self> {
        MessageDatabaseDecorator::new(self)
    }

    /// Erases the concrete chain type.
    fn boxed(self) -> Box<dyn MailSender>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<S: MailSender> MailSenderExt for S {}
