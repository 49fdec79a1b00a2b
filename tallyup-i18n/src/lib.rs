#[cfg(all(feature = "he", feature = "en"))]
compile_error!("Cannot enable both 'he' and 'en' features at the same time");

#[cfg(feature = "he")]
pub mod strings {
    pub const SHARE_TITLE: &str = "סיכום ערב פוקר";
    pub const PLAYERS: &str = "שחקנים";
    pub const ENTRY: &str = "קנייה";
    pub const EXIT: &str = "יציאה";
    pub const NET: &str = "רווח/הפסד";
    pub const BALANCED_MARK: &str = "✓";
    pub const UNSET: &str = "—";
    pub const ALREADY_SETTLED: &str = "כולם מאוזנים, אין צורך בהעברות";
}

#[cfg(not(feature = "he"))]
pub mod strings {
    pub const SHARE_TITLE: &str = "Poker night summary";
    pub const PLAYERS: &str = "Players";
    pub const ENTRY: &str = "Buy-in";
    pub const EXIT: &str = "Cash-out";
    pub const NET: &str = "P/L";
    pub const BALANCED_MARK: &str = "✓";
    pub const UNSET: &str = "—";
    pub const ALREADY_SETTLED: &str = "Everyone is already settled; no transfers needed";
}

pub use strings::*;

pub struct TransferLine<'a> {
    from: &'a str,
    to: &'a str,
    amount: &'a str,
}

pub struct TransferCountMessage {
    count: usize,
}

pub struct BalanceMismatchMessage<'a> {
    total: &'a str,
}

pub fn transfer_line<'a>(from: &'a str, to: &'a str, amount: &'a str) -> TransferLine<'a> {
    TransferLine { from, to, amount }
}

pub fn transfer_count(count: usize) -> TransferCountMessage {
    TransferCountMessage { count }
}

pub fn balance_mismatch(total: &str) -> BalanceMismatchMessage<'_> {
    BalanceMismatchMessage { total }
}

#[cfg(feature = "he")]
pub fn insufficient_participants(min: usize) -> String {
    format!("נדרשים לפחות {min} שחקנים")
}

#[cfg(feature = "he")]
pub fn incomplete_amounts(name: impl std::fmt::Display) -> String {
    format!("יש למלא את כל הסכומים עבור {name}")
}

#[cfg(feature = "he")]
pub fn syntax_error(line: usize, detail: impl std::fmt::Display) -> String {
    format!("שגיאת תחביר בשורה {line}: {detail}")
}

#[cfg(feature = "he")]
pub fn invalid_amount(line: usize, detail: impl std::fmt::Display) -> String {
    format!("סכום לא תקין בשורה {line}: {detail}")
}

#[cfg(not(feature = "he"))]
pub fn insufficient_participants(min: usize) -> String {
    format!("At least {min} players are required")
}

#[cfg(not(feature = "he"))]
pub fn incomplete_amounts(name: impl std::fmt::Display) -> String {
    format!("Please fill in all amounts for {name}")
}

#[cfg(not(feature = "he"))]
pub fn syntax_error(line: usize, detail: impl std::fmt::Display) -> String {
    format!("Syntax error at line {line}: {detail}")
}

#[cfg(not(feature = "he"))]
pub fn invalid_amount(line: usize, detail: impl std::fmt::Display) -> String {
    format!("Invalid amount at line {line}: {detail}")
}

#[cfg(feature = "he")]
impl std::fmt::Display for TransferLine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} משלם ל{} {}", self.from, self.to, self.amount)
    }
}

#[cfg(feature = "he")]
impl std::fmt::Display for TransferCountMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "סה״כ {} העברות", self.count)
    }
}

#[cfg(feature = "he")]
impl std::fmt::Display for BalanceMismatchMessage<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "שימו לב: הסכומים לא מתאזנים ({})", self.total)
    }
}

#[cfg(not(feature = "he"))]
impl std::fmt::Display for TransferLine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} pays {} {}", self.from, self.to, self.amount)
    }
}

#[cfg(not(feature = "he"))]
impl std::fmt::Display for TransferCountMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Total {} transfers", self.count)
    }
}

#[cfg(not(feature = "he"))]
impl std::fmt::Display for BalanceMismatchMessage<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Note: the amounts do not balance ({})", self.total)
    }
}
