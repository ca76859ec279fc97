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

//! The retained scene graph: groups, meshes, and lighting.

use rackview_core::math::{Aabb, LinearRgba, Vec3};
use rackview_core::render::{GeometryId, MaterialId};
use uuid::Uuid;

/// A stable, opaque identity for one mesh in the scene.
///
/// Identities are assigned at creation and never reused; the identity map
/// keys on them instead of embedding domain data in the render object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(Uuid);

impl MeshId {
    /// Creates a new, random identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MeshId {
    fn default() -> Self {
        Self::new()
    }
}

/// What a mesh represents, which decides how picking treats it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshKind {
    /// The ground plane. Structural: never highlighted, never resolved.
    Ground,
    /// The ground grid overlay. Structural.
    Grid,
    /// A rack's frame box. Structural.
    RackFrame,
    /// One stored unit on a rack. Pickable.
    Item,
}

impl MeshKind {
    /// Whether picking may highlight and resolve this mesh.
    #[inline]
    pub fn is_item(&self) -> bool {
        matches!(self, MeshKind::Item)
    }
}

/// One renderable unit of the scene.
///
/// Owns exactly one geometry buffer and one or more materials; both are
/// released exactly once, at teardown. `bounds` is kept in world space so
/// picking needs no per-mesh transform walk.
#[derive(Debug, Clone)]
pub struct MeshNode {
    /// Stable identity, the key into the identity map.
    pub id: MeshId,
    /// The mesh's role in the scene.
    pub kind: MeshKind,
    /// World-space translation.
    pub translation: Vec3,
    /// World-space bounding box used for picking.
    pub bounds: Aabb,
    /// The geometry buffer this mesh owns.
    pub geometry: GeometryId,
    /// The material(s) this mesh owns. Rack frames carry two (frame and
    /// shelf); everything else carries one.
    pub materials: Vec<MaterialId>,
    /// The hue seed the item's material color was derived from.
    pub color_seed: f32,
}

/// One rack: a structural frame mesh plus its item meshes.
#[derive(Debug, Clone)]
pub struct RackGroup {
    /// Index of this rack in the generated layout.
    pub rack_index: usize,
    /// The structural frame mesh.
    pub frame: MeshNode,
    /// The item meshes stored on this rack.
    pub items: Vec<MeshNode>,
}

/// The scene's fixed light rig. Plain data, no GPU resources of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightRig {
    /// Ambient fill color.
    pub ambient: LinearRgba,
    /// Ambient intensity.
    pub ambient_intensity: f32,
    /// Direction of the key light, normalized.
    pub key_direction: Vec3,
    /// Key light color.
    pub key_color: LinearRgba,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            ambient: LinearRgba::WHITE,
            ambient_intensity: 0.45,
            key_direction: Vec3::new(-0.4, -1.0, -0.3).normalize(),
            key_color: LinearRgba::WHITE,
        }
    }
}

/// The retained tree of groups and meshes representing the warehouse.
#[derive(Debug, Clone)]
pub struct SceneGraph {
    /// The ground plane mesh.
    pub ground: MeshNode,
    /// The grid overlay mesh.
    pub grid: MeshNode,
    /// The light rig.
    pub lights: LightRig,
    /// One group per generated rack descriptor, in layout order.
    pub racks: Vec<RackGroup>,
}

impl SceneGraph {
    /// Visits every mesh in the graph: ground, grid, then each rack's frame
    /// and items in layout order.
    pub fn meshes(&self) -> impl Iterator<Item = &MeshNode> {
        std::iter::once(&self.ground)
            .chain(std::iter::once(&self.grid))
            .chain(self.racks.iter().flat_map(|rack| {
                std::iter::once(&rack.frame).chain(rack.items.iter())
            }))
    }

    /// Visits every item mesh in the graph.
    pub fn items(&self) -> impl Iterator<Item = &MeshNode> {
        self.racks.iter().flat_map(|rack| rack.items.iter())
    }

    /// Total number of meshes in the graph.
    pub fn mesh_count(&self) -> usize {
        self.meshes().count()
    }

    /// Looks up a mesh by identity.
    pub fn find_mesh(&self, id: MeshId) -> Option<&MeshNode> {
        self.meshes().find(|mesh| mesh.id == id)
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_ids_are_unique() {
        let a = MeshId::new();
        let b = MeshId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn only_items_are_pickable() {
        assert!(MeshKind::Item.is_item());
        assert!(!MeshKind::Ground.is_item());
        assert!(!MeshKind::Grid.is_item());
        assert!(!MeshKind::RackFrame.is_item());
    }
}
