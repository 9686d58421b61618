//! Key-value namespace
//!
//! Each key maps to one JSON document at `<dir>/<key>.json`. Every
//! read-modify-write cycle goes through [`Namespace::transact`], which holds
//! a mutex dedicated to that key for the whole cycle. Two writers on the same
//! key are serialized; writers on different keys do not block each other.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{PocketbookError, PocketbookResult};

use super::file_io::{read_json, write_json_atomic};

/// Directory-backed key-value store with per-key locking
#[derive(Debug)]
pub struct Namespace {
    dir: PathBuf,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl Namespace {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// File backing a key
    pub fn key_path(&self, key: &str) -> PocketbookResult<PathBuf> {
        let well_formed = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !well_formed {
            return Err(PocketbookError::Storage(format!("Invalid key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }

    fn key_lock(&self, key: &str) -> PocketbookResult<Arc<Mutex<()>>> {
        let mut locks = self
            .locks
            .lock()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire lock table: {}", e)))?;
        Ok(locks.entry(key.to_string()).or_default().clone())
    }

    /// Read a document, or its default when the key has never been written
    pub fn get<T>(&self, key: &str) -> PocketbookResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.key_path(key)?;
        let lock = self.key_lock(key)?;
        let _guard = lock
            .lock()
            .map_err(|e| PocketbookError::Storage(format!("Failed to lock {}: {}", key, e)))?;

        tracing::debug!(key, "reading record");
        read_json(&path)
    }

    /// Read, mutate and write back a document under the key's lock
    ///
    /// If `mutate` returns an error nothing is written and the error is
    /// passed through.
    pub fn transact<T, R, F>(&self, key: &str, mutate: F) -> PocketbookResult<R>
    where
        T: DeserializeOwned + Serialize + Default,
        F: FnOnce(&mut T) -> PocketbookResult<R>,
    {
        let path = self.key_path(key)?;
        let lock = self.key_lock(key)?;
        let _guard = lock
            .lock()
            .map_err(|e| PocketbookError::Storage(format!("Failed to lock {}: {}", key, e)))?;

        let mut value: T = read_json(&path)?;
        let result = mutate(&mut value)?;

        tracing::debug!(key, "committing record");
        write_json_atomic(&path, &value)?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use tempfile::TempDir;

    fn create_test_namespace() -> (TempDir, Namespace) {
        let temp_dir = TempDir::new().unwrap();
        let namespace = Namespace::new(temp_dir.path().to_path_buf());
        (temp_dir, namespace)
    }

    #[test]
    fn test_missing_key_reads_default() {
        let (_temp_dir, ns) = create_test_namespace();
        let value: Vec<String> = ns.get("nothing").unwrap();
        assert!(value.is_empty());
    }

    #[test]
    fn test_transact_then_get() {
        let (temp_dir, ns) = create_test_namespace();
        ns.transact("names", |v: &mut Vec<String>| {
            v.push("a".to_string());
            Ok(())
        })
        .unwrap();

        assert!(temp_dir.path().join("names.json").exists());
        let value: Vec<String> = ns.get("names").unwrap();
        assert_eq!(value, vec!["a".to_string()]);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let (_temp_dir, ns) = create_test_namespace();
        assert!(ns.key_path("../escape").is_err());
        assert!(ns.key_path("").is_err());
        assert!(ns.key_path("userDetails").is_ok());
    }

    #[test]
    fn test_failed_transaction_writes_nothing() {
        let (_temp_dir, ns) = create_test_namespace();
        ns.transact("numbers", |v: &mut Vec<u32>| {
            v.push(1);
            Ok(())
        })
        .unwrap();

        let result: PocketbookResult<()> = ns.transact("numbers", |v: &mut Vec<u32>| {
            v.push(2);
            Err(PocketbookError::Storage("boom".into()))
        });
        assert!(result.is_err());

        let value: Vec<u32> = ns.get("numbers").unwrap();
        assert_eq!(value, vec![1]);
    }

    #[test]
    fn test_concurrent_transactions_do_not_lose_updates() {
        let (_temp_dir, ns) = create_test_namespace();
        let ns = Arc::new(ns);

        let handles: Vec<_> = (0..8u32)
            .map(|i| {
                let ns = Arc::clone(&ns);
                thread::spawn(move || {
                    ns.transact("numbers", |v: &mut Vec<u32>| {
                        v.push(i);
                        Ok(())
                    })
                    .unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let mut value: Vec<u32> = ns.get("numbers").unwrap();
        value.sort_unstable();
        assert_eq!(value, (0..8).collect::<Vec<_>>());
    }
}
