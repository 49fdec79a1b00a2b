pub mod balance_computer;
pub mod settlement_engine;
pub mod totals_aggregator;

pub use balance_computer::{BalanceComputer, ComputedBalances, MIN_PARTICIPANTS};
pub use settlement_engine::SettlementEngine;
pub use totals_aggregator::TotalsAggregator;
