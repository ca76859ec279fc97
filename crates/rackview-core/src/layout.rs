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

//! Deterministic rack layout generation.
//!
//! Maps a fixed table of floor-plan slots to rack descriptors. This is a
//! fixed layout generator, not a warehouse-layout solver: same input table,
//! same output, every run.

/// Number of item slots one rack contributes to the identity-mapping stride.
///
/// An item at `(rack_index, slot_index)` resolves to catalog record
/// `(rack_index * ITEM_SLOT_STRIDE + slot_index) % catalog_len`.
pub const ITEM_SLOT_STRIDE: usize = 4;

/// One entry of the fixed floor-plan table: a rack position on the ground
/// plane and how many item meshes the rack carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RackSlot {
    /// Rack center along the X axis, in meters.
    pub x: f32,
    /// Rack center along the Z axis, in meters.
    pub z: f32,
    /// Number of item meshes generated on this rack.
    pub item_count: u32,
}

impl RackSlot {
    /// Creates a new slot entry.
    pub const fn new(x: f32, z: f32, item_count: u32) -> Self {
        Self { x, z, item_count }
    }
}

/// A generated rack: its slot data plus its position in the generated list.
///
/// Immutable for the scene's lifetime once produced by [`generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct RackDescriptor {
    /// Rack center along the X axis, in meters.
    pub x: f32,
    /// Rack center along the Z axis, in meters.
    pub z: f32,
    /// Number of item meshes generated on this rack.
    pub item_count: u32,
    /// Position of this rack in the generated list.
    pub rack_index: usize,
}

/// Maps floor-plan slots to rack descriptors.
///
/// Pure and total: any input list (including empty) produces a corresponding
/// output list, with `rack_index` equal to the input position. No randomness
/// is involved; two calls with the same table are byte-identical.
pub fn generate(slots: &[RackSlot]) -> Vec<RackDescriptor> {
    slots
        .iter()
        .enumerate()
        .map(|(rack_index, slot)| RackDescriptor {
            x: slot.x,
            z: slot.z,
            item_count: slot.item_count,
            rack_index,
        })
        .collect()
}

/// The fixed floor plan of the warehouse view: four aisles of five racks,
/// with the last bay left open for the loading dock.
pub const DEFAULT_FLOOR_PLAN: [RackSlot; 19] = [
    RackSlot::new(-9.0, -12.0, 4),
    RackSlot::new(-9.0, -6.0, 6),
    RackSlot::new(-9.0, 0.0, 3),
    RackSlot::new(-9.0, 6.0, 5),
    RackSlot::new(-9.0, 12.0, 2),
    RackSlot::new(-3.0, -12.0, 5),
    RackSlot::new(-3.0, -6.0, 2),
    RackSlot::new(-3.0, 0.0, 6),
    RackSlot::new(-3.0, 6.0, 4),
    RackSlot::new(-3.0, 12.0, 3),
    RackSlot::new(3.0, -12.0, 6),
    RackSlot::new(3.0, -6.0, 4),
    RackSlot::new(3.0, 0.0, 2),
    RackSlot::new(3.0, 6.0, 5),
    RackSlot::new(3.0, 12.0, 4),
    RackSlot::new(9.0, -12.0, 3),
    RackSlot::new(9.0, -6.0, 5),
    RackSlot::new(9.0, 0.0, 4),
    RackSlot::new(9.0, 6.0, 6),
];

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_is_deterministic() {
        let first = generate(&DEFAULT_FLOOR_PLAN);
        let second = generate(&DEFAULT_FLOOR_PLAN);
        assert_eq!(first, second);
    }

    #[test]
    fn rack_index_matches_input_position() {
        let descriptors = generate(&DEFAULT_FLOOR_PLAN);
        assert_eq!(descriptors.len(), DEFAULT_FLOOR_PLAN.len());
        for (i, desc) in descriptors.iter().enumerate() {
            assert_eq!(desc.rack_index, i);
            assert_eq!(desc.x, DEFAULT_FLOOR_PLAN[i].x);
            assert_eq!(desc.z, DEFAULT_FLOOR_PLAN[i].z);
            assert_eq!(desc.item_count, DEFAULT_FLOOR_PLAN[i].item_count);
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(generate(&[]).is_empty());
    }
}
