use tallyup_application::RosterParseError;
use tallyup_domain::{BalanceMismatch, ValidationError, services::MIN_PARTICIPANTS};
use tallyup_i18n as i18n;

pub fn format_validation_error(error: &ValidationError) -> String {
    match error {
        ValidationError::InsufficientParticipants { .. } => {
            i18n::insufficient_participants(MIN_PARTICIPANTS)
        }
        ValidationError::IncompleteAmounts { name } => i18n::incomplete_amounts(name),
    }
}

pub fn format_roster_parse_error(error: &RosterParseError) -> String {
    match error {
        RosterParseError::SyntaxError { line, detail } => i18n::syntax_error(*line, detail),
        RosterParseError::InvalidAmount { line, detail } => i18n::invalid_amount(*line, detail),
    }
}

// Always two decimals with an explicit sign, independent of display options.
pub fn format_balance_warning(warning: &BalanceMismatch) -> String {
    let total = warning.total.round_dp(2).as_decimal();
    let sign = if total.is_sign_positive() && !total.is_zero() {
        "+"
    } else {
        ""
    };
    i18n::balance_mismatch(&format!("{sign}{total:.2}")).to_string()
}
