//! Ledger entry model

use serde::{Deserialize, Serialize};

use super::amount::{Amount, AmountParseError};

/// One titled amount in a user's ledger
///
/// The amount is kept as the text that was entered so the stored record
/// reads back unchanged. Use [`LedgerEntry::parsed_amount`] for arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub title: String,
    pub amount: String,
}

impl LedgerEntry {
    pub fn new(title: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            amount: amount.into(),
        }
    }

    /// Numeric reading of the amount text
    pub fn parsed_amount(&self) -> Result<Amount, AmountParseError> {
        Amount::parse(&self.amount)
    }
}

/// Sum of every entry whose amount parses; free-text amounts are skipped
///
/// `None` when the sum does not fit in an [`Amount`].
pub fn total(entries: &[LedgerEntry]) -> Option<Amount> {
    Amount::checked_sum(entries.iter().filter_map(|e| e.parsed_amount().ok()))
}
