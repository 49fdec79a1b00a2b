#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod services;
pub mod settlement;

pub use error::{AmountError, ValidationError};
pub use model::{
    Amount, BalanceMismatch, MAX_AMOUNT, Money, NetBalance, Participant, ParticipantId,
    SettlementResult, TOLERANCE, Totals, Transfer,
};
pub use services::{BalanceComputer, ComputedBalances, SettlementEngine, TotalsAggregator};
pub use settlement::{compute_settlement, compute_totals};
