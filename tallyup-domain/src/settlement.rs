use crate::{
    error::ValidationError,
    model::{Participant, SettlementResult, Totals},
    services::{BalanceComputer, SettlementEngine, TotalsAggregator},
};

/// Validate the roster and compute the transfers that settle it.
///
/// A balance mismatch does not fail the call; it is attached to the result
/// as `balance_warning` next to whatever the greedy match produced.
pub fn compute_settlement(
    participants: &[Participant],
) -> Result<SettlementResult, ValidationError> {
    let computed = BalanceComputer.compute(participants)?;
    let transfers = SettlementEngine.settle(&computed.balances);

    Ok(SettlementResult {
        transfers,
        balance_warning: computed.mismatch,
    })
}

pub fn compute_totals(participants: &[Participant]) -> Totals {
    TotalsAggregator.aggregate(participants)
}
