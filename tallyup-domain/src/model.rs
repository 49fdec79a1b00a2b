use crate::error::AmountError;
use rust_decimal::Decimal;
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

/// Largest amount a single participant may bring in or take out.
///
/// Keeps roster sums far inside `Decimal`'s range, so balance and total
/// arithmetic cannot overflow.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Threshold below which a balance or transfer amount is treated as zero.
pub const TOLERANCE: Money = Money(Decimal::from_parts(1, 0, 0, false, 2));

/// Signed money value used for balances, transfers and totals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    pub fn round_dp(self, dp: u32) -> Self {
        Self(self.0.round_dp(dp))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, value| acc + value)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Non-negative amount a participant brought in or took out.
///
/// Always within `0..=MAX_AMOUNT`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn try_new(value: Decimal) -> Result<Self, AmountError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmountError::Negative(value));
        }
        if value > MAX_AMOUNT {
            return Err(AmountError::TooLarge(value));
        }
        Ok(Self(value))
    }

    pub fn from_u32(value: u32) -> Self {
        Self(Decimal::from(value))
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn to_money(self) -> Money {
        Money(self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(pub u32);

/// One roster row. Amounts are `None` while unset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub entry: Option<Amount>,
    pub exit: Option<Amount>,
}

impl Participant {
    pub fn new(
        id: ParticipantId,
        name: impl Into<String>,
        entry: Option<Amount>,
        exit: Option<Amount>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            entry,
            exit,
        }
    }

    /// Trimmed name, or `None` for rows that were left unnamed.
    pub fn display_name(&self) -> Option<&str> {
        let trimmed = self.name.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Exit minus entry, available only once both amounts are set.
    pub fn profit(&self) -> Option<Money> {
        match (self.entry, self.exit) {
            (Some(entry), Some(exit)) => Some(exit.to_money() - entry.to_money()),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetBalance {
    pub name: String,
    pub balance: Money,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    pub amount: Money,
}

impl Transfer {
    pub fn new(from: impl Into<String>, to: impl Into<String>, amount: Money) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }
}

/// Advisory raised when net balances do not sum to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BalanceMismatch {
    pub total: Money,
}

impl fmt::Display for BalanceMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.total.is_positive() { "+" } else { "" };
        write!(f, "balances do not sum to zero ({sign}{})", self.total.round_dp(2))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettlementResult {
    pub transfers: Vec<Transfer>,
    pub balance_warning: Option<BalanceMismatch>,
}

impl SettlementResult {
    pub fn is_settled(&self) -> bool {
        self.transfers.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub participant_count: usize,
    pub total_entry: Money,
    pub total_exit: Money,
    pub net: Money,
}

impl Totals {
    pub fn is_balanced(&self) -> bool {
        self.net.abs() < TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn max_amount_is_one_quadrillion() {
        assert_eq!(MAX_AMOUNT, Decimal::from(1_000_000_000_000_000_i64));
    }

    #[test]
    fn tolerance_is_one_hundredth() {
        assert_eq!(TOLERANCE, Money::new(1, 2));
    }

    #[rstest]
    #[case::zero(Decimal::ZERO, true)]
    #[case::negative_zero(Decimal::new(-0, 2), true)]
    #[case::positive(Decimal::new(1250, 2), true)]
    #[case::negative(Decimal::new(-1, 0), false)]
    #[case::at_limit(MAX_AMOUNT, true)]
    #[case::above_limit(MAX_AMOUNT + Decimal::new(1, 2), false)]
    #[case::decimal_max(Decimal::MAX, false)]
    fn amount_stays_in_range(#[case] value: Decimal, #[case] accepted: bool) {
        assert_eq!(Amount::try_new(value).is_ok(), accepted);
    }

    #[rstest]
    #[case::both_set(Some(100), Some(250), Some(150))]
    #[case::loss(Some(100), Some(0), Some(-100))]
    #[case::missing_exit(Some(100), None, None)]
    #[case::missing_entry(None, Some(100), None)]
    fn profit_requires_both_amounts(
        #[case] entry: Option<u32>,
        #[case] exit: Option<u32>,
        #[case] expected: Option<i64>,
    ) {
        let participant = Participant::new(
            ParticipantId(1),
            "Alice",
            entry.map(Amount::from_u32),
            exit.map(Amount::from_u32),
        );
        assert_eq!(participant.profit(), expected.map(Money::from_i64));
    }

    #[rstest]
    #[case::plain("Alice", Some("Alice"))]
    #[case::padded("  Bob \t", Some("Bob"))]
    #[case::blank("   ", None)]
    #[case::empty("", None)]
    fn display_name_trims_whitespace(#[case] name: &str, #[case] expected: Option<&str>) {
        let participant = Participant::new(ParticipantId(1), name, None, None);
        assert_eq!(participant.display_name(), expected);
    }

    #[test]
    fn mismatch_display_keeps_sign() {
        let surplus = BalanceMismatch {
            total: Money::from_i64(5),
        };
        let deficit = BalanceMismatch {
            total: Money::new(-1234, 2),
        };
        assert_eq!(surplus.to_string(), "balances do not sum to zero (+5)");
        assert_eq!(deficit.to_string(), "balances do not sum to zero (-12.34)");
    }
}
