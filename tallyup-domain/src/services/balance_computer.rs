use crate::{
    error::ValidationError,
    model::{BalanceMismatch, Money, NetBalance, Participant, TOLERANCE},
};

pub const MIN_PARTICIPANTS: usize = 2;

/// Net balances of the named participants, plus the imbalance advisory if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComputedBalances {
    pub balances: Vec<NetBalance>,
    pub mismatch: Option<BalanceMismatch>,
}

/// Derives net balances (exit - entry) from a raw roster
pub struct BalanceComputer;

impl BalanceComputer {
    /// Validate the roster and compute one `NetBalance` per named participant.
    ///
    /// Unnamed rows are skipped. Output order follows input order so that
    /// downstream sorting breaks ties deterministically.
    ///
    /// # Errors
    /// * `InsufficientParticipants` - fewer than two named participants
    /// * `IncompleteAmounts` - the first named participant missing an amount
    pub fn compute(
        &self,
        participants: &[Participant],
    ) -> Result<ComputedBalances, ValidationError> {
        let named: Vec<(&str, &Participant)> = participants
            .iter()
            .filter_map(|participant| participant.display_name().map(|name| (name, participant)))
            .collect();

        if named.len() < MIN_PARTICIPANTS {
            tracing::debug!(
                reject_reason = "insufficient_participants",
                named_count = named.len(),
                row_count = participants.len(),
                "Settlement rejected"
            );
            return Err(ValidationError::InsufficientParticipants { found: named.len() });
        }

        let balances = named
            .into_iter()
            .map(|(name, participant)| match (participant.entry, participant.exit) {
                (Some(entry), Some(exit)) => Ok(NetBalance {
                    name: name.to_owned(),
                    balance: exit.to_money() - entry.to_money(),
                }),
                _ => {
                    tracing::debug!(
                        reject_reason = "incomplete_amounts",
                        participant_id = participant.id.0,
                        has_entry = participant.entry.is_some(),
                        has_exit = participant.exit.is_some(),
                        "Settlement rejected"
                    );
                    Err(ValidationError::IncompleteAmounts {
                        name: name.to_owned(),
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let total: Money = balances.iter().map(|entry| entry.balance).sum();
        let mismatch = if total.abs() > TOLERANCE {
            tracing::warn!(
                total = %total,
                member_count = balances.len(),
                "Net balances do not sum to zero; settling as given"
            );
            Some(BalanceMismatch { total })
        } else {
            None
        };

        Ok(ComputedBalances { balances, mismatch })
    }
}
