#![warn(clippy::uninlined_format_args)]

mod i18n;

use nom::{
    IResult, Parser,
    branch::alt,
    character::complete::{char, digit1, one_of, space0},
    combinator::{eof, opt, recognize},
};

const FIELD_COUNT: usize = 3;
const CURRENCY_SYMBOLS: &str = "$€₪¥£";

/// One roster row as written. Amounts are unsigned decimal literals with any
/// currency symbol stripped; `None` means the field was left unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow<'a> {
    pub name: &'a str,
    pub entry: Option<&'a str>,
    pub exit: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRowWithLine<'a> {
    pub line: usize,
    pub row: RosterRow<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster<'a> {
    pub rows: Vec<RosterRowWithLine<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("negative amount '{0}'")]
    Negative(String),
    #[error("'{0}' is not a decimal amount")]
    Malformed(String),
    #[error("amount '{0}' is out of range")]
    OutOfRange(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
    #[error("Invalid amount at line {line}: {source}")]
    InvalidAmount { line: usize, source: FieldError },
}

enum AmountField<'a> {
    Value(&'a str),
    Negative(&'a str),
}

fn sp(input: &str) -> IResult<&str, &str> {
    space0(input)
}

fn currency(input: &str) -> IResult<&str, char> {
    one_of(CURRENCY_SYMBOLS).parse(input)
}

// 12 | 12.5 | 12.50
fn decimal_literal(input: &str) -> IResult<&str, &str> {
    recognize((digit1, opt((char('.'), digit1)))).parse(input)
}

// [symbol] literal
fn amount(input: &str) -> IResult<&str, &str> {
    (opt(currency), sp, decimal_literal)
        .map(|(_, _, literal)| literal)
        .parse(input)
}

// -[symbol] literal, recognized only so it can be reported clearly
fn negative_amount(input: &str) -> IResult<&str, &str> {
    recognize((char('-'), sp, amount)).parse(input)
}

fn amount_field(input: &str) -> IResult<&str, AmountField<'_>> {
    (
        alt((
            negative_amount.map(AmountField::Negative),
            amount.map(AmountField::Value),
        )),
        sp,
        eof,
    )
        .map(|(field, _, _)| field)
        .parse(input)
}

/// Parse one amount field.
///
/// Blank text and a lone `-` mean "unset". Anything else must be a
/// non-negative decimal literal, optionally prefixed by a currency symbol.
pub fn parse_amount_field(input: &str) -> Result<Option<&str>, FieldError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return Ok(None);
    }

    match amount_field(trimmed) {
        Ok((_, AmountField::Value(literal))) => Ok(Some(literal)),
        Ok((_, AmountField::Negative(literal))) => {
            Err(FieldError::Negative(literal.to_owned()))
        }
        Err(_) => Err(FieldError::Malformed(trimmed.to_owned())),
    }
}

fn amount_at(line: usize, text: &str) -> Result<Option<&str>, ParseError> {
    parse_amount_field(text).map_err(|source| ParseError::InvalidAmount { line, source })
}

fn parse_row(line: usize, content: &str) -> Result<RosterRow<'_>, ParseError> {
    let fields: Vec<&str> = content.split(',').collect();
    let &[name, entry, exit] = fields.as_slice() else {
        return Err(ParseError::SyntaxError {
            line,
            detail: i18n::missing_field_detail(FIELD_COUNT, fields.len()),
        });
    };

    Ok(RosterRow {
        name: name.trim(),
        entry: amount_at(line, entry)?,
        exit: amount_at(line, exit)?,
    })
}

/// Parse a roster: one `name, entry, exit` row per line.
///
/// Blank lines and `#` comments are skipped. Rows with a blank name are kept;
/// deciding what they mean is left to the caller.
pub fn parse_roster(input: &str) -> Result<Roster<'_>, ParseError> {
    let mut rows = Vec::new();

    for (idx, raw_line) in input.lines().enumerate() {
        let line = idx + 1;
        let content = raw_line
            .split_once('#')
            .map_or(raw_line, |(content, _comment)| content);
        if content.trim().is_empty() {
            continue;
        }

        rows.push(RosterRowWithLine {
            line,
            row: parse_row(line, content)?,
        });
    }

    Ok(Roster { rows })
}
