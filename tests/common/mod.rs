#![allow(dead_code)]

use pattern_demos::domain::{MailSender, TicketChange, TicketChangeListener};
use pattern_demos::infrastructure::console::{Console, MemoryConsole};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub fn create_test_console() -> (Rc<MemoryConsole>, Rc<dyn Console>) {
    let console = Rc::new(MemoryConsole::new());
    let shared: Rc<dyn Console> = console.clone();
    (console, shared)
}

/// Sender returning a scripted sequence of results, then `fallback` once exhausted.
pub struct ScriptedSender {
    results: Vec<bool>,
    fallback: bool,
    calls: Rc<Cell<usize>>,
}

impl ScriptedSender {
    /// Scripted results followed by success.
    pub fn new(results: Vec<bool>) -> Self {
        Self::with_fallback(results, true)
    }

    pub fn with_fallback(results: Vec<bool>, fallback: bool) -> Self {
        Self {
            results,
            fallback,
            calls: Rc::new(Cell::new(0)),
        }
    }

    pub fn always_failing() -> Self {
        Self::with_fallback(Vec::new(), false)
    }

    pub fn call_counter(&self) -> Rc<Cell<usize>> {
        self.calls.clone()
    }
}

impl MailSender for ScriptedSender {
    fn send(&mut self, _message: &str) -> bool {
        let index = self.calls.get();
        self.calls.set(index + 1);
        self.results.get(index).copied().unwrap_or(self.fallback)
    }
}

/// Listener writing `<name> <artist>:<amount>` into a shared log.
pub struct RecordingListener {
    name: &'static str,
    log: Rc<RefCell<Vec<String>>>,
}

impl RecordingListener {
    pub fn new(name: &'static str, log: Rc<RefCell<Vec<String>>>) -> Rc<dyn TicketChangeListener> {
        Rc::new(Self { name, log })
    }
}

impl TicketChangeListener for RecordingListener {
    fn receive_ticket_change(&self, change: &TicketChange) {
        self.log.borrow_mut().push(format!(
            "{} {}:{}",
            self.name,
            change.artist_id(),
            change.amount()
        ));
    }
}
