//! Base mail senders.
//!
//! Concrete implementations of [`crate::domain::MailSender`] that terminate a
//! decorator chain:
//! - [`CloudMailSender`] - cloud mail service
//! - [`OnPremiseMailSender`] - on-premise mail server

mod cloud_mail;
mod on_premise_mail;

pub use cloud_mail::CloudMailSender;
pub use on_premise_mail::OnPremiseMailSender;
