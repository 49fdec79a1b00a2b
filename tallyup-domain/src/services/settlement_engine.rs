use crate::model::{Money, NetBalance, TOLERANCE, Transfer};
use std::collections::VecDeque;

/// Outstanding magnitude of one side of the matching.
struct Position<'a> {
    name: &'a str,
    remaining: Money,
}

/// Greedy largest-debtor / largest-creditor settlement.
///
/// Not a minimum-transfer solver: it always pairs the two largest open
/// positions, which keeps the matching order easy to audit.
pub struct SettlementEngine;

impl SettlementEngine {
    /// Produce the ordered transfer list that settles `balances`.
    ///
    /// Balances within [`TOLERANCE`] of zero are left out. Equal magnitudes
    /// keep their input order. Every iteration exhausts at least one side, so
    /// at most `debtors + creditors - 1` transfers are emitted.
    pub fn settle(&self, balances: &[NetBalance]) -> Vec<Transfer> {
        let mut debtors: Vec<Position<'_>> = balances
            .iter()
            .filter(|entry| entry.balance < -TOLERANCE)
            .map(|entry| Position {
                name: &entry.name,
                remaining: -entry.balance,
            })
            .collect();
        let mut creditors: Vec<Position<'_>> = balances
            .iter()
            .filter(|entry| entry.balance > TOLERANCE)
            .map(|entry| Position {
                name: &entry.name,
                remaining: entry.balance,
            })
            .collect();

        tracing::debug!(
            member_count = balances.len(),
            debtor_count = debtors.len(),
            creditor_count = creditors.len(),
            "Settlement matching started"
        );

        if debtors.is_empty() || creditors.is_empty() {
            return Vec::new();
        }

        // `sort_by` is stable; ties stay in input order.
        debtors.sort_by(|lhs, rhs| rhs.remaining.cmp(&lhs.remaining));
        creditors.sort_by(|lhs, rhs| rhs.remaining.cmp(&lhs.remaining));

        let max_transfers = debtors.len() + creditors.len() - 1;
        let mut debtors = VecDeque::from(debtors);
        let mut creditors = VecDeque::from(creditors);
        let mut transfers = Vec::with_capacity(max_transfers);

        while let (Some(debtor), Some(creditor)) = (debtors.front_mut(), creditors.front_mut()) {
            let amount = debtor.remaining.min(creditor.remaining);
            if amount > TOLERANCE {
                transfers.push(Transfer::new(debtor.name, creditor.name, amount));
            }

            debtor.remaining -= amount;
            creditor.remaining -= amount;

            let debtor_settled = debtor.remaining < TOLERANCE;
            let creditor_settled = creditor.remaining < TOLERANCE;
            if debtor_settled {
                debtors.pop_front();
            }
            if creditor_settled {
                creditors.pop_front();
            }
        }

        debug_assert!(transfers.len() <= max_transfers);
        tracing::debug!(
            transfer_count = transfers.len(),
            unmatched_debtors = debtors.len(),
            unmatched_creditors = creditors.len(),
            "Settlement matching finished"
        );

        transfers
    }
}
