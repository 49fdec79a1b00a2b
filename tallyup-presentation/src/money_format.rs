use rust_decimal::{Decimal, RoundingStrategy};
use tallyup_domain::Money;

/// How amounts are rendered for people. Settlement itself never rounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub scale: u32,
    pub currency: String,
}

impl DisplayOptions {
    pub fn new(scale: u32, currency: impl Into<String>) -> Self {
        Self {
            scale,
            currency: currency.into(),
        }
    }

    pub fn format(&self, money: Money) -> String {
        let value = self.rounded(money);
        let magnitude = self.fixed(value.abs());
        if value.is_sign_negative() && !value.is_zero() {
            format!("-{}{magnitude}", self.currency)
        } else {
            format!("{}{magnitude}", self.currency)
        }
    }

    /// Like [`format`](Self::format) but marks gains with a leading `+`.
    pub fn format_signed(&self, money: Money) -> String {
        let value = self.rounded(money);
        if value.is_sign_positive() && !value.is_zero() {
            format!("+{}", self.format(money))
        } else {
            self.format(money)
        }
    }

    fn rounded(&self, money: Money) -> Decimal {
        money
            .as_decimal()
            .round_dp_with_strategy(self.scale, RoundingStrategy::MidpointAwayFromZero)
    }

    fn fixed(&self, value: Decimal) -> String {
        let scale = self.scale as usize;
        format!("{value:.scale$}")
    }
}
