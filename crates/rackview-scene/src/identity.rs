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

//! The side table associating item meshes with catalog records.

use crate::graph::MeshId;
use rackview_core::ProductRecord;
use std::collections::HashMap;

/// Maps a mesh identity to an index into the catalog snapshot.
///
/// This is a weak, lookup-only relation: the scene never owns or mutates a
/// record, and a mesh's entry is dropped with the mesh. When more items are
/// generated than records exist, records are reused cyclically
/// (`index % catalog_len`) — a known compatibility limitation carried over
/// from the original application, not a claim that several physical items
/// share one product.
#[derive(Debug, Default, Clone)]
pub struct IdentityMap {
    entries: HashMap<MeshId, usize>,
}

impl IdentityMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates a mesh with a catalog index. One entry per mesh.
    pub fn insert(&mut self, id: MeshId, record_index: usize) {
        self.entries.insert(id, record_index);
    }

    /// Resolves a mesh identity to its catalog index, if it has one.
    pub fn resolve(&self, id: MeshId) -> Option<usize> {
        self.entries.get(&id).copied()
    }

    /// Resolves a mesh identity directly to a record in `catalog`.
    ///
    /// Returns `None` both for unmapped meshes and for indices outside the
    /// given catalog (which can only happen if the caller passes a catalog
    /// other than the one the scene was built against).
    pub fn resolve_record<'a>(
        &self,
        id: MeshId,
        catalog: &'a [ProductRecord],
    ) -> Option<&'a ProductRecord> {
        self.resolve(id).and_then(|index| catalog.get(index))
    }

    /// Drops a mesh's entry.
    pub fn remove(&mut self, id: MeshId) {
        self.entries.remove(&id);
    }

    /// Drops every entry. Called at teardown so no dangling identities
    /// survive the scene.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> ProductRecord {
        ProductRecord {
            id: id.to_string(),
            name: id.to_string(),
            location: "A-01".to_string(),
            quantity: 1,
            date_added: "2026-01-01".to_string(),
        }
    }

    #[test]
    fn resolve_roundtrip() {
        let mut map = IdentityMap::new();
        let id = MeshId::new();
        map.insert(id, 2);

        let catalog = vec![record("a"), record("b"), record("c")];
        assert_eq!(map.resolve(id), Some(2));
        assert_eq!(map.resolve_record(id, &catalog).unwrap().id, "c");
    }

    #[test]
    fn unmapped_mesh_resolves_to_none() {
        let map = IdentityMap::new();
        assert_eq!(map.resolve(MeshId::new()), None);
    }

    #[test]
    fn out_of_range_index_resolves_to_none() {
        let mut map = IdentityMap::new();
        let id = MeshId::new();
        map.insert(id, 10);
        let catalog = vec![record("only")];
        assert!(map.resolve_record(id, &catalog).is_none());
    }

    #[test]
    fn clear_empties_the_map() {
        let mut map = IdentityMap::new();
        map.insert(MeshId::new(), 0);
        map.insert(MeshId::new(), 1);
        assert_eq!(map.len(), 2);
        map.clear();
        assert!(map.is_empty());
    }
}
