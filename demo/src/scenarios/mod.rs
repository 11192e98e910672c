//! Demo scenarios
//!
//! Each scenario builds its own systems from the shared configuration, so a
//! failure in one never leaks state into the next.

mod bank;
mod basket;
mod library;
mod patterns;
mod store;

use crate::config::DemoConfig;
use clap::ValueEnum;
use entity_core::Metrics;

/// Scenario selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Selection {
    /// Accounts, deposits and transfers
    Bank,
    /// Book loans and returns
    Library,
    /// Reserving cart and checkout
    Store,
    /// Deferred basket and order placement
    Basket,
    /// Settings, factory, observer and strategy
    Patterns,
    /// Everything, in the order above
    All,
}

impl Selection {
    /// Scenarios this selection runs, in order
    pub fn scenarios(&self) -> &'static [Scenario] {
        match self {
            Selection::Bank => &[Scenario::Bank],
            Selection::Library => &[Scenario::Library],
            Selection::Store => &[Scenario::Store],
            Selection::Basket => &[Scenario::Basket],
            Selection::Patterns => &[Scenario::Patterns],
            Selection::All => &Scenario::ALL,
        }
    }
}

/// One runnable scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Bank,
    Library,
    Store,
    Basket,
    Patterns,
}

impl Scenario {
    const ALL: [Scenario; 5] = [
        Scenario::Bank,
        Scenario::Library,
        Scenario::Store,
        Scenario::Basket,
        Scenario::Patterns,
    ];

    /// Banner title
    pub fn title(&self) -> &'static str {
        match self {
            Scenario::Bank => "Banking System",
            Scenario::Library => "Library System",
            Scenario::Store => "Online Store",
            Scenario::Basket => "Shopping Basket",
            Scenario::Patterns => "Design Patterns",
        }
    }
}

/// Run one scenario
pub fn run(scenario: Scenario, config: &DemoConfig, metrics: Option<Metrics>) -> anyhow::Result<()> {
    match scenario {
        Scenario::Bank => bank::run(config, metrics),
        Scenario::Library => library::run(config, metrics),
        Scenario::Store => store::run(config, metrics),
        Scenario::Basket => basket::run(config, metrics),
        Scenario::Patterns => patterns::run(),
    }
}

/// Print the outcome of an operation expected to be rejected
fn expect_rejected<T>(what: &str, result: entity_core::Result<T>) -> anyhow::Result<()> {
    match result {
        Ok(_) => anyhow::bail!("{} unexpectedly succeeded", what),
        Err(err) => {
            println!("{} rejected ({}): {}", what, err.kind(), err);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_scenario_runs_with_defaults() {
        let config = DemoConfig::default();
        let metrics = Metrics::new().unwrap();

        for scenario in Selection::All.scenarios() {
            run(*scenario, &config, Some(metrics.clone())).unwrap();
        }

        assert!(metrics.count("transfer", entity_core::metrics::COMMITTED) > 0);
        assert!(metrics.count("lend", entity_core::metrics::COMMITTED) > 0);
        assert!(metrics.count("checkout", entity_core::metrics::COMMITTED) > 0);
    }

    #[test]
    fn test_selection_scenarios() {
        assert_eq!(Selection::All.scenarios().len(), 5);
        assert_eq!(Selection::All.scenarios()[0], Scenario::Bank);
        assert_eq!(Selection::Store.scenarios(), &[Scenario::Store]);
        assert_eq!(Selection::Patterns.scenarios(), &[Scenario::Patterns]);
    }
}
