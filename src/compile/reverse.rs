//! Reverse Table Builder
//!
//! Compiles the Reverse Catalog into the sorted, key-unique map that the
//! emitter serializes as a `phf` perfect-hash literal (O(1) lookups, zero
//! construction cost in the translator). A key declared twice with the same
//! value is accepted once; two different values for one key abort the run.

use std::collections::BTreeMap;

use crate::utils::error::{GenError, GenResult};

/// Compiled reverse table: targetToken → sourceToken.
#[derive(Debug, Clone)]
pub struct ReverseTable {
    entries: BTreeMap<String, String>,
}

impl ReverseTable {
    /// Build the table from catalog pairs, validating key uniqueness.
    pub fn build(pairs: &[(&str, &str)]) -> GenResult<Self> {
        let mut entries: BTreeMap<String, String> = BTreeMap::new();
        for (key, value) in pairs {
            if key.is_empty() || value.is_empty() {
                continue;
            }
            match entries.get(*key) {
                Some(existing) if existing != value => {
                    return Err(GenError::conflict(*key, existing.clone(), *value));
                }
                Some(_) => {} // idempotent re-declaration
                None => {
                    entries.insert(key.to_string(), value.to_string());
                }
            }
        }
        Ok(Self { entries })
    }

    /// Entries in lexicographic key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
