//! Statistics-collecting mail decorator.

use crate::domain::MailSender;
use crate::infrastructure::console::Console;
use std::rc::Rc;
use tracing::debug;

/// Name of the counter incremented once per send through the decorator.
pub const STATISTICS_COUNTER: &str = "mail_statistics_collected_total";

/// Collects send statistics, then delegates to the wrapped sender.
///
/// The statistics step runs unconditionally before delegation, and the
/// wrapped sender's result is returned unchanged.
///
/// # Metrics
///
/// Increments [`STATISTICS_COUNTER`] through the `metrics` facade. Without an
/// installed recorder this is a no-op.
pub struct StatisticsDecorator<S: MailSender> {
    inner: S,
    console: Rc<dyn Console>,
}

impl<S: MailSender> StatisticsDecorator<S> {
    pub const NAME: &'static str = "StatisticsDecorator";

    /// Wraps `inner`, reporting collection on `console`.
    pub fn new(inner: S, console: Rc<dyn Console>) -> Self {
        Self { inner, console }
    }

    /// Returns the wrapped sender.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwraps the decorator, returning the wrapped sender.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: MailSender> MailSender for StatisticsDecorator<S> {
    fn send(&mut self, message: &str) -> bool {
        debug!(decorator = Self::NAME, "Collecting statistics");
        metrics::counter!(STATISTICS_COUNTER).increment(1);
        self.console
            .write_line(&format!("Collecting statistics in {}.", Self::NAME));

        self.inner.send(message)
    }
}
