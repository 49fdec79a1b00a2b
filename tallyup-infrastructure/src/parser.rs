use rust_decimal::Decimal;
use std::str::FromStr;
use tallyup_application::{RosterParseError, RosterParser};
use tallyup_domain::{Amount, AmountError, Participant, ParticipantId};
use tallyup_parser::{
    FieldError, ParseError, RosterRowWithLine, parse_amount_field, parse_roster,
};

#[derive(Default)]
pub struct TallyRosterParser;

impl RosterParser for TallyRosterParser {
    fn parse(&self, content: &str) -> Result<Vec<Participant>, RosterParseError> {
        let roster = parse_roster(content).map_err(|err| match err {
            ParseError::SyntaxError { line, detail } => {
                RosterParseError::SyntaxError { line, detail }
            }
            ParseError::InvalidAmount { line, source } => RosterParseError::InvalidAmount {
                line,
                detail: source.to_string(),
            },
        })?;

        roster
            .rows
            .into_iter()
            .zip(1u32..)
            .map(|(row, id)| to_participant(ParticipantId(id), row))
            .collect()
    }
}

fn to_participant(
    id: ParticipantId,
    row: RosterRowWithLine<'_>,
) -> Result<Participant, RosterParseError> {
    let RosterRowWithLine { line, row } = row;
    let amount = |literal: Option<&str>| {
        literal
            .map(to_amount)
            .transpose()
            .map_err(|source| RosterParseError::InvalidAmount {
                line,
                detail: source.to_string(),
            })
    };

    Ok(Participant::new(
        id,
        row.name,
        amount(row.entry)?,
        amount(row.exit)?,
    ))
}

fn to_amount(literal: &str) -> Result<Amount, FieldError> {
    // The grammar only admits unsigned literals, so the remaining failure is overflow.
    let value =
        Decimal::from_str(literal).map_err(|_| FieldError::OutOfRange(literal.to_owned()))?;
    Amount::try_new(value).map_err(|err| match err {
        AmountError::Negative(_) => FieldError::Negative(literal.to_owned()),
        AmountError::TooLarge(_) => FieldError::OutOfRange(literal.to_owned()),
    })
}

/// Parse a single amount as typed into a roster field.
///
/// Blank input (or a lone `-`) is `Ok(None)`, the unset state.
pub fn parse_amount(text: &str) -> Result<Option<Amount>, FieldError> {
    parse_amount_field(text)?.map(to_amount).transpose()
}
