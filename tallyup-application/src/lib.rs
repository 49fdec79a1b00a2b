#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod ports;
pub mod settlement_processor;

pub use error::RosterParseError;
pub use model::SettlementReport;
pub use ports::RosterParser;
pub use settlement_processor::{ProcessingOutcome, SettlementProcessor};
