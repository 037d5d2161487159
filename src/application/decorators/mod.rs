//! Mail sender decorators.
//!
//! Each decorator owns exactly one wrapped [`crate::domain::MailSender`] and
//! is itself a `MailSender`, so decorators nest to any depth:
//!
//! - [`StatisticsDecorator`] - collects statistics before delegating
//! - [`MessageDatabaseDecorator`] - archives messages after successful delivery
//! - [`MailSenderExt`] - builder adapters for composing chains

mod ext;
mod message_database;
mod statistics;

pub use ext::MailSenderExt;
pub use message_database::MessageDatabaseDecorator;
pub use statistics::{STATISTICS_COUNTER, StatisticsDecorator};
