use crate::error::RosterParseError;
use tallyup_domain::Participant;

pub trait RosterParser: Send + Sync {
    /// Turn roster text into participants with validated amounts.
    fn parse(&self, content: &str) -> Result<Vec<Participant>, RosterParseError>;
}
