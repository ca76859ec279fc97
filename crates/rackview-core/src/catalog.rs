// Copyright 2026 the rackview authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The read-only domain catalog supplied by the surrounding CRUD shell.
//!
//! The shell loads product records over REST and hands them to this core;
//! nothing here ever mutates a record or fetches one.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// A single product record owned by the warehouse-management shell.
///
/// Field names follow the shell's JSON wire shape (`dateAdded` etc.).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Stable product identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Human-readable storage location label.
    pub location: String,
    /// Units in stock.
    pub quantity: u32,
    /// Date the record was added, as the shell formats it.
    pub date_added: String,
}

/// A shared, read-mostly store of catalog records.
///
/// One loader (the shell's REST layer) writes through [`replace`]; any number
/// of views read through [`snapshot`]. This replaces the original
/// application's bare exported mutable list with an explicit single-writer
/// store.
///
/// [`replace`]: CatalogStore::replace
/// [`snapshot`]: CatalogStore::snapshot
#[derive(Debug, Default)]
pub struct CatalogStore {
    records: RwLock<Arc<[ProductRecord]>>,
}

impl CatalogStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `records`.
    pub fn with_records(records: Vec<ProductRecord>) -> Self {
        Self {
            records: RwLock::new(records.into()),
        }
    }

    /// Replaces the entire record list. The single writer entry point.
    ///
    /// Snapshots handed out earlier keep the list they observed; a view built
    /// against an older snapshot stays internally consistent until remount.
    pub fn replace(&self, records: Vec<ProductRecord>) {
        let mut guard = self.records.write().unwrap();
        *guard = records.into();
        log::debug!("catalog replaced: {} records", guard.len());
    }

    /// Returns a cheap shared snapshot of the current record list.
    pub fn snapshot(&self) -> Arc<[ProductRecord]> {
        self.records.read().unwrap().clone()
    }

    /// Number of records currently in the store.
    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> ProductRecord {
        ProductRecord {
            id: id.to_string(),
            name: format!("Product {id}"),
            location: "A-01".to_string(),
            quantity: 3,
            date_added: "2026-01-15".to_string(),
        }
    }

    #[test]
    fn snapshot_is_stable_across_replace() {
        let store = CatalogStore::with_records(vec![record("p1"), record("p2")]);
        let before = store.snapshot();
        store.replace(vec![record("p3")]);

        assert_eq!(before.len(), 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot()[0].id, "p3");
    }

    #[test]
    fn empty_store() {
        let store = CatalogStore::new();
        assert!(store.is_empty());
        assert_eq!(store.snapshot().len(), 0);
    }

    #[test]
    fn record_parses_shell_json() {
        let json = r#"{
            "id": "SKU-0042",
            "name": "Impact Driver",
            "location": "B-07",
            "quantity": 12,
            "dateAdded": "2026-03-02"
        }"#;
        let parsed: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, "SKU-0042");
        assert_eq!(parsed.quantity, 12);
        assert_eq!(parsed.date_added, "2026-03-02");
    }
}
