//! Decorated mail pipeline walkthrough.

use std::rc::Rc;

use crate::application::decorators::{MessageDatabaseDecorator, StatisticsDecorator};
use crate::domain::MailSender;
use crate::infrastructure::console::Console;
use crate::infrastructure::mail::{CloudMailSender, OnPremiseMailSender};
use tracing::info;

/// Runs the decorator walkthrough, writing its transcript to `console`.
///
/// # Steps
///
/// 1. Send through each base sender on its own
/// 2. Send through a [`StatisticsDecorator`] wrapping the cloud sender
/// 3. Send two messages through a [`MessageDatabaseDecorator`] wrapping the
///    on-premise sender
/// 4. Print every archived message
///
/// Returns the archived messages.
pub fn run_decorator_scenario(console: Rc<dyn Console>) -> Vec<String> {
    info!("Running decorator scenario");

    let mut cloud = CloudMailSender::new(console.clone());
    cloud.send("Hi there.");

    let mut on_premise = OnPremiseMailSender::new(console.clone());
    on_premise.send("Hi there.");

    let statistics_name = StatisticsDecorator::<CloudMailSender>::NAME;
    let mut statistics = StatisticsDecorator::new(cloud, console.clone());
    statistics.send(&format!("Hi there via {statistics_name} wrapper."));

    let database_name = MessageDatabaseDecorator::<OnPremiseMailSender>::NAME;
    let mut database = MessageDatabaseDecorator::new(on_premise);
    database.send(&format!("Hi there via {database_name} wrapper, message 1."));
    database.send(&format!("Hi there via {database_name} wrapper, message 2."));

    for message in database.sent_messages() {
        console.write_line(&format!("Stored message: \"{message}\""));
    }

    info!(
        archived = database.sent_messages().len(),
        "Decorator scenario finished"
    );
    database.sent_messages().to_vec()
}
