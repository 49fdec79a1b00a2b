use crate::{error::RosterParseError, model::SettlementReport, ports::RosterParser};
use tallyup_domain::{Participant, compute_settlement, compute_totals};

#[derive(Clone, Copy)]
pub struct SettlementProcessor<'a> {
    parser: &'a dyn RosterParser,
}

pub enum ProcessingOutcome {
    Success(SettlementReport),
    InvalidRoster(RosterParseError),
}

impl<'a> SettlementProcessor<'a> {
    pub fn new(parser: &'a dyn RosterParser) -> Self {
        Self { parser }
    }

    pub fn process(&self, content: &str) -> ProcessingOutcome {
        match self.parser.parse(content) {
            Ok(participants) => ProcessingOutcome::Success(Self::build_report(participants)),
            Err(err) => {
                tracing::debug!(error = ?err, "Roster rejected by parser");
                ProcessingOutcome::InvalidRoster(err)
            }
        }
    }

    fn build_report(participants: Vec<Participant>) -> SettlementReport {
        let totals = compute_totals(&participants);
        let outcome = compute_settlement(&participants);

        match &outcome {
            Ok(result) => tracing::info!(
                row_count = participants.len(),
                participant_count = totals.participant_count,
                transfer_count = result.transfers.len(),
                imbalanced = result.balance_warning.is_some(),
                "Roster settled"
            ),
            Err(err) => tracing::info!(
                row_count = participants.len(),
                participant_count = totals.participant_count,
                error = %err,
                "Roster not settled"
            ),
        }

        SettlementReport {
            participants,
            totals,
            outcome,
        }
    }
}
