//! Ledger store
//!
//! Keeps every user's entries in the `transactions` record as a JSON object
//! mapping user name to an array of `{title, amount}`.

use std::sync::Arc;

use crate::error::PocketbookResult;
use crate::models::{Ledger, LedgerEntry, UserName};

use super::namespace::Namespace;

/// Record holding the ledger mapping
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Repository for per-user ledgers
pub struct LedgerStore {
    namespace: Arc<Namespace>,
}

impl LedgerStore {
    pub fn new(namespace: Arc<Namespace>) -> Self {
        Self { namespace }
    }

    /// Append an entry to the end of a user's list
    ///
    /// The list is created on first use. Duplicate titles are allowed.
    pub fn add_entry(&self, user: &UserName, title: &str, amount: &str) -> PocketbookResult<()> {
        self.namespace.transact(TRANSACTIONS_KEY, |ledger: &mut Ledger| {
            ledger
                .entry(user.clone())
                .or_default()
                .push(LedgerEntry::new(title, amount));
            Ok(())
        })
    }

    /// Remove every entry of a user whose title equals `title`
    ///
    /// Returns how many entries were removed. Removing from a user with no
    /// entries, or a title that matches nothing, is not an error.
    pub fn remove_entry(&self, user: &UserName, title: &str) -> PocketbookResult<usize> {
        self.namespace.transact(TRANSACTIONS_KEY, |ledger: &mut Ledger| {
            let Some(entries) = ledger.get_mut(user) else {
                return Ok(0);
            };
            let before = entries.len();
            entries.retain(|e| e.title != title);
            Ok(before - entries.len())
        })
    }

    /// A user's entries in insertion order; empty if the user has none
    pub fn list_entries(&self, user: &UserName) -> PocketbookResult<Vec<LedgerEntry>> {
        let mut ledger: Ledger = self.namespace.get(TRANSACTIONS_KEY)?;
        Ok(ledger.remove(user).unwrap_or_default())
    }

    /// Every user name that has a list, including emptied ones
    pub fn users(&self) -> PocketbookResult<Vec<UserName>> {
        let ledger: Ledger = self.namespace.get(TRANSACTIONS_KEY)?;
        Ok(ledger.into_keys().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, LedgerStore) {
        let temp_dir = TempDir::new().unwrap();
        let namespace = Arc::new(Namespace::new(temp_dir.path().to_path_buf()));
        (temp_dir, LedgerStore::new(namespace))
    }

    #[test]
    fn test_add_then_list() {
        let (_temp_dir, store) = create_test_store();
        let user = UserName::new("jane");

        store.add_entry(&user, "Coffee", "5").unwrap();

        let entries = store.list_entries(&user).unwrap();
        assert_eq!(entries, vec![LedgerEntry::new("Coffee", "5")]);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let (_temp_dir, store) = create_test_store();
        let user = UserName::new("jane");

        store.add_entry(&user, "Coffee", "5").unwrap();
        store.add_entry(&user, "Lunch", "12").unwrap();
        store.add_entry(&user, "Bus", "3").unwrap();

        let titles: Vec<_> = store
            .list_entries(&user)
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["Coffee", "Lunch", "Bus"]);
    }

    #[test]
    fn test_users_are_stored_in_name_order() {
        let (temp_dir, store) = create_test_store();

        store.add_entry(&UserName::new("zoe"), "Coffee", "5").unwrap();
        store.add_entry(&UserName::new("amy"), "Lunch", "12").unwrap();

        assert_eq!(
            store.users().unwrap(),
            vec![UserName::new("amy"), UserName::new("zoe")]
        );
        let text = std::fs::read_to_string(temp_dir.path().join("transactions.json")).unwrap();
        assert!(text.find("\"amy\"").unwrap() < text.find("\"zoe\"").unwrap());
    }

    #[test]
    fn test_remove_deletes_all_matching_titles() {
        let (_temp_dir, store) = create_test_store();
        let user = UserName::new("jane");

        store.add_entry(&user, "Coffee", "5").unwrap();
        store.add_entry(&user, "Coffee", "6").unwrap();

        assert_eq!(store.remove_entry(&user, "Coffee").unwrap(), 2);
        assert!(store.list_entries(&user).unwrap().is_empty());
    }

    #[test]
    fn test_remove_keeps_other_titles_and_users() {
        let (_temp_dir, store) = create_test_store();
        let jane = UserName::new("jane");
        let john = UserName::new("john");

        store.add_entry(&jane, "Coffee", "5").unwrap();
        store.add_entry(&jane, "Lunch", "12").unwrap();
        store.add_entry(&john, "Coffee", "4").unwrap();

        store.remove_entry(&jane, "Coffee").unwrap();

        assert_eq!(
            store.list_entries(&jane).unwrap(),
            vec![LedgerEntry::new("Lunch", "12")]
        );
        assert_eq!(store.list_entries(&john).unwrap().len(), 1);
    }

    #[test]
    fn test_remove_for_unknown_user_is_noop() {
        let (_temp_dir, store) = create_test_store();
        let user = UserName::new("ghost");

        assert_eq!(store.remove_entry(&user, "Coffee").unwrap(), 0);
        assert!(store.list_entries(&user).unwrap().is_empty());
    }

    #[test]
    fn test_persisted_layout() {
        let (temp_dir, store) = create_test_store();
        store.add_entry(&UserName::new("jane"), "Coffee", "5").unwrap();

        let raw = std::fs::read_to_string(temp_dir.path().join("transactions.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"jane": [{"title": "Coffee", "amount": "5"}]})
        );
        assert_eq!(store.users().unwrap(), vec![UserName::new("jane")]);
    }
}
