use proptest::prelude::*;
use std::collections::HashMap;
use tallyup_domain::{
    Amount, BalanceComputer, Money, Participant, ParticipantId, SettlementEngine, TOLERANCE,
    Transfer, compute_settlement,
};

const NAMES: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

/// Roster of `entries.len()` named participants with whole-unit amounts.
///
/// Whole units keep every non-zero balance above the tolerance, which is what
/// the closure and conservation properties assume.
fn roster(entries: &[(u32, u32)]) -> Vec<Participant> {
    entries
        .iter()
        .zip(NAMES)
        .zip(1u32..)
        .map(|((&(entry, exit), name), id)| {
            Participant::new(
                ParticipantId(id),
                name,
                Some(Amount::from_u32(entry)),
                Some(Amount::from_u32(exit)),
            )
        })
        .collect()
}

/// Balanced roster: the last participant's exit absorbs the difference.
fn balanced_roster(entries: &[(u32, u32)]) -> Vec<(u32, u32)> {
    let mut entries = entries.to_vec();
    let entry_sum: u32 = entries.iter().map(|(entry, _)| entry).sum();
    let exit_sum: u32 = entries[..entries.len() - 1]
        .iter()
        .map(|(_, exit)| exit)
        .sum();
    let last = entries.len() - 1;
    if entry_sum >= exit_sum {
        entries[last].1 = entry_sum - exit_sum;
    } else {
        // Too much already cashed out; raise the last buy-in instead.
        entries[last].0 += exit_sum - entry_sum;
        entries[last].1 = 0;
    }
    entries
}

fn net_flows(transfers: &[Transfer]) -> HashMap<String, Money> {
    let mut flows: HashMap<String, Money> = HashMap::new();
    for transfer in transfers {
        *flows.entry(transfer.from.clone()).or_default() -= transfer.amount;
        *flows.entry(transfer.to.clone()).or_default() += transfer.amount;
    }
    flows
}

fn amounts_strategy() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((0u32..=50_000, 0u32..=50_000), 2..=NAMES.len())
}

proptest! {
    #[test]
    fn balanced_rosters_close_to_zero(entries in amounts_strategy()) {
        let participants = roster(&balanced_roster(&entries));
        let balances = BalanceComputer.compute(&participants).expect("valid roster").balances;
        let result = compute_settlement(&participants).expect("valid roster");

        prop_assert_eq!(result.balance_warning, None);

        let flows = net_flows(&result.transfers);
        for entry in &balances {
            // Paying reduces what is owed to you; receiving offsets a debt.
            let flow = flows.get(&entry.name).copied().unwrap_or_default();
            let adjusted = entry.balance - flow;
            prop_assert!(adjusted.abs() <= TOLERANCE, "{} left at {}", entry.name, adjusted);
        }
    }

    #[test]
    fn transfers_conserve_each_position(entries in amounts_strategy()) {
        let participants = roster(&balanced_roster(&entries));
        let balances = BalanceComputer.compute(&participants).expect("valid roster").balances;
        let transfers = SettlementEngine.settle(&balances);

        for entry in &balances {
            let sent: Money = transfers
                .iter()
                .filter(|transfer| transfer.from == entry.name)
                .map(|transfer| transfer.amount)
                .sum();
            let received: Money = transfers
                .iter()
                .filter(|transfer| transfer.to == entry.name)
                .map(|transfer| transfer.amount)
                .sum();

            if entry.balance < -TOLERANCE {
                prop_assert!((sent - (-entry.balance)).abs() <= TOLERANCE);
                prop_assert!(received.is_zero());
            } else if entry.balance > TOLERANCE {
                prop_assert!((received - entry.balance).abs() <= TOLERANCE);
                prop_assert!(sent.is_zero());
            } else {
                prop_assert!(sent.is_zero() && received.is_zero());
            }
        }
    }

    #[test]
    fn transfer_count_is_bounded(entries in amounts_strategy()) {
        let participants = roster(&entries);
        let balances = BalanceComputer.compute(&participants).expect("valid roster").balances;
        let debtors = balances.iter().filter(|entry| entry.balance < -TOLERANCE).count();
        let creditors = balances.iter().filter(|entry| entry.balance > TOLERANCE).count();

        let transfers = SettlementEngine.settle(&balances);

        if debtors == 0 || creditors == 0 {
            prop_assert!(transfers.is_empty());
        } else {
            prop_assert!(transfers.len() < debtors + creditors);
        }
        for transfer in &transfers {
            prop_assert!(transfer.amount > TOLERANCE);
            prop_assert_ne!(&transfer.from, &transfer.to);
        }
    }

    #[test]
    fn repeated_runs_are_identical(entries in amounts_strategy()) {
        let participants = roster(&entries);

        let first = compute_settlement(&participants).expect("valid roster");
        let second = compute_settlement(&participants).expect("valid roster");

        prop_assert_eq!(first, second);
    }

    #[test]
    fn equal_entry_and_exit_needs_no_transfers(
        amounts in prop::collection::vec(0u32..=50_000, 2..=NAMES.len()),
    ) {
        let entries: Vec<(u32, u32)> = amounts.iter().map(|&amount| (amount, amount)).collect();
        let result = compute_settlement(&roster(&entries)).expect("valid roster");

        prop_assert!(result.transfers.is_empty());
        prop_assert_eq!(result.balance_warning, None);
    }
}
