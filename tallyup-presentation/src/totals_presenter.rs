use crate::money_format::DisplayOptions;
use tallyup_domain::{Amount, Participant, Totals};
use tallyup_i18n as i18n;

pub struct TotalsPresenter;

impl TotalsPresenter {
    pub fn render(totals: &Totals, options: &DisplayOptions) -> String {
        format!(
            "{}: {}\n{}: {}\n{}: {}\n{}: {}",
            i18n::PLAYERS,
            totals.participant_count,
            i18n::ENTRY,
            options.format(totals.total_entry),
            i18n::EXIT,
            options.format(totals.total_exit),
            i18n::NET,
            Self::format_net(totals, options),
        )
    }

    /// Signed net with `+` for a surplus; a balanced roster reads `0 ✓`.
    pub fn format_net(totals: &Totals, options: &DisplayOptions) -> String {
        if totals.is_balanced() {
            format!("0 {}", i18n::BALANCED_MARK)
        } else {
            options.format_signed(totals.net)
        }
    }

    /// One tab-separated line per named row: name, entry, exit, profit.
    pub fn render_participants(participants: &[Participant], options: &DisplayOptions) -> String {
        let amount = |value: Option<Amount>| {
            value.map_or_else(
                || i18n::UNSET.to_owned(),
                |value| options.format(value.to_money()),
            )
        };

        participants
            .iter()
            .filter_map(|participant| {
                let name = participant.display_name()?;
                let profit = participant
                    .profit()
                    .map_or_else(|| i18n::UNSET.to_owned(), |p| options.format_signed(p));
                Some(format!(
                    "{name}\t{}\t{}\t{profit}\n",
                    amount(participant.entry),
                    amount(participant.exit),
                ))
            })
            .collect()
    }
}
