#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterParseError {
    SyntaxError { line: usize, detail: String },
    InvalidAmount { line: usize, detail: String },
}

