use tallyup_domain::{Participant, SettlementResult, Totals, ValidationError};

/// Everything a caller needs to render one roster evaluation.
///
/// Totals are always present; `outcome` carries either the transfers (and
/// any imbalance advisory) or the validation error that blocked settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementReport {
    pub participants: Vec<Participant>,
    pub totals: Totals,
    pub outcome: Result<SettlementResult, ValidationError>,
}
