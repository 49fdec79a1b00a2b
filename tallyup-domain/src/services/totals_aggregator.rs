use crate::model::{Amount, Money, Participant, Totals};

/// Lenient roster totals for live display: unset amounts count as zero.
pub struct TotalsAggregator;

impl TotalsAggregator {
    pub fn aggregate(&self, participants: &[Participant]) -> Totals {
        let participant_count = participants
            .iter()
            .filter(|participant| participant.display_name().is_some())
            .count();
        let total_entry: Money = participants
            .iter()
            .map(|participant| participant.entry.unwrap_or(Amount::ZERO).to_money())
            .sum();
        let total_exit: Money = participants
            .iter()
            .map(|participant| participant.exit.unwrap_or(Amount::ZERO).to_money())
            .sum();

        Totals {
            participant_count,
            total_entry,
            total_exit,
            net: total_exit - total_entry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParticipantId;
    use rstest::rstest;

    fn row(id: u32, name: &str, entry: Option<u32>, exit: Option<u32>) -> Participant {
        Participant::new(
            ParticipantId(id),
            name,
            entry.map(Amount::from_u32),
            exit.map(Amount::from_u32),
        )
    }

    #[rstest]
    #[case::empty(vec![], (0, 0, 0, 0))]
    #[case::balanced(
        vec![row(1, "A", Some(100), Some(250)), row(2, "B", Some(150), Some(0))],
        (2, 250, 250, 0)
    )]
    #[case::unset_counts_as_zero(
        vec![row(1, "A", Some(100), None), row(2, "B", None, Some(40))],
        (2, 100, 40, -60)
    )]
    #[case::unnamed_rows_add_to_sums_not_count(
        vec![row(1, "A", Some(100), Some(100)), row(2, "  ", Some(20), Some(50))],
        (1, 120, 150, 30)
    )]
    fn aggregates_raw_roster(
        #[case] roster: Vec<Participant>,
        #[case] expected: (usize, i64, i64, i64),
    ) {
        let (count, entry, exit, net) = expected;
        assert_eq!(
            TotalsAggregator.aggregate(&roster),
            Totals {
                participant_count: count,
                total_entry: Money::from_i64(entry),
                total_exit: Money::from_i64(exit),
                net: Money::from_i64(net),
            }
        );
    }

    #[test]
    fn balanced_uses_strict_tolerance() {
        let roster = vec![
            row(1, "A", Some(100), Some(100)),
            Participant::new(
                ParticipantId(2),
                "B",
                Some(Amount::ZERO),
                Some(Amount::try_new(rust_decimal::Decimal::new(1, 2)).expect("amount")),
            ),
        ];

        let totals = TotalsAggregator.aggregate(&roster);

        assert_eq!(totals.net, Money::new(1, 2));
        assert!(!totals.is_balanced());
    }
}
