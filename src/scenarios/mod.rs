//! Scripted walkthroughs of both patterns.
//!
//! Each scenario is a fixed call sequence that writes its transcript to a
//! [`crate::infrastructure::console::Console`]. The binary runs them against
//! stdout; tests run them against a recording console.

mod decorator;
mod observer;

pub use decorator::run_decorator_scenario;
pub use observer::run_observer_scenario;

use clap::ValueEnum;

/// Which walkthrough to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Scenario {
    /// Decorated mail pipeline
    Decorator,
    /// Ticket sale notifications
    Observer,
    /// Both, decorator first
    #[default]
    All,
}

impl Scenario {
    /// Whether the decorator walkthrough is part of this selection.
    pub fn includes_decorator(self) -> bool {
        matches!(self, Self::Decorator | Self::All)
    }

    pub fn includes_observer(self) -> bool {
        matches!(self, Self::Observer | Self::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_selection() {
        assert!(Scenario::All.includes_decorator());
        assert!(Scenario::All.includes_observer());
        assert!(Scenario::Decorator.includes_decorator());
        assert!(!Scenario::Decorator.includes_observer());
        assert!(!Scenario::Observer.includes_decorator());
        assert!(Scenario::Observer.includes_observer());
    }

    #[test]
    fn test_scenario_default_is_all() {
        assert_eq!(Scenario::default(), Scenario::All);
    }

    #[test]
    fn test_scenario_parses_from_cli_value() {
        assert_eq!(
            Scenario::from_str("observer", true).ok(),
            Some(Scenario::Observer)
        );
        assert!(Scenario::from_str("visitor", true).is_err());
    }
}
