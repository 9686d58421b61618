//! Ledger display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::services::LedgerSummary;
use crate::validation::ValidationErrors;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a user's entries as a table followed by the total
pub fn format_ledger(summary: &LedgerSummary, currency_symbol: &str) -> String {
    if summary.entries.is_empty() {
        return format!("No entries for {}.", summary.user);
    }

    let rows = summary.entries.iter().enumerate().map(|(i, e)| EntryRow {
        index: i + 1,
        title: e.title.clone(),
        amount: e.amount.clone(),
    });

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    match summary.total {
        Some(total) => output.push_str(&format!(
            "Total: {}",
            total.format_with_symbol(currency_symbol)
        )),
        None => output.push_str("Total: out of range"),
    }
    if summary.unparsed > 0 {
        output.push_str(&format!(
            " ({} non-numeric {} not counted)",
            summary.unparsed,
            if summary.unparsed == 1 { "entry" } else { "entries" }
        ));
    }
    output
}

/// One `field: message` line per failing field
pub fn format_field_errors(errors: &ValidationErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("  {}: {}", field, message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, LedgerEntry, UserName};

    fn summary(entries: Vec<LedgerEntry>, total: i64, unparsed: usize) -> LedgerSummary {
        LedgerSummary {
            user: UserName::new("jane"),
            entries,
            total: Some(Amount::from_cents(total)),
            unparsed,
        }
    }

    #[test]
    fn test_empty_ledger() {
        let text = format_ledger(&summary(vec![], 0, 0), "$");
        assert_eq!(text, "No entries for jane.");
    }

    #[test]
    fn test_table_contents() {
        let text = format_ledger(
            &summary(
                vec![
                    LedgerEntry::new("Coffee", "5"),
                    LedgerEntry::new("Gift", "a lot"),
                ],
                500,
                1,
            ),
            "$",
        );
        assert!(text.contains("Title"));
        assert!(text.contains("Coffee"));
        assert!(text.contains("Total: $5.00 (1 non-numeric entry not counted)"));
    }

    #[test]
    fn test_total_out_of_range() {
        let mut summary = summary(vec![LedgerEntry::new("Big", "90000000000000000")], 0, 0);
        summary.total = None;
        let text = format_ledger(&summary, "$");
        assert!(text.contains("Big"));
        assert!(text.ends_with("Total: out of range"));
    }

    #[test]
    fn test_field_errors() {
        let mut errors = ValidationErrors::new();
        errors.insert("title", "Title is required!");
        assert_eq!(format_field_errors(&errors), "  title: Title is required!");
    }
}
