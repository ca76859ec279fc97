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

//! Builds the retained scene from rack descriptors and the catalog snapshot,
//! and tears it down again.
//!
//! Geometry placement uses bounded jitter so the shelves read as stocked by
//! hand; the identity mapping underneath is strictly deterministic.

use crate::graph::{LightRig, MeshId, MeshKind, MeshNode, RackGroup, SceneGraph};
use crate::identity::IdentityMap;
use rackview_core::layout::{RackDescriptor, ITEM_SLOT_STRIDE};
use rackview_core::math::{Aabb, LinearRgba, Vec3};
use rackview_core::render::{
    GeometryDescriptor, GeometryShape, MaterialDescriptor, RenderDevice, ResourceError,
};
use rackview_core::ProductRecord;
use rand::Rng;
use std::borrow::Cow;

/// Side length of the square ground plane, in meters.
const GROUND_SIZE: f32 = 40.0;
/// Grid line divisions across the ground.
const GRID_DIVISIONS: u32 = 40;

/// Full rack frame extent: (x, y, z) in meters. A low deck the items sit on.
const FRAME_SIZE: Vec3 = Vec3::new(2.4, 0.3, 1.4);
/// Full item cube edge, in meters.
const ITEM_SIZE: f32 = 0.5;
/// Vertical distance between stacking tiers.
const TIER_HEIGHT: f32 = 0.55;
/// Items per stacking tier; tier = slot_index / ITEMS_PER_TIER.
const ITEMS_PER_TIER: u32 = 3;
/// Horizontal jitter bounds inside the rack footprint.
const JITTER_X: f32 = 0.9;
const JITTER_Z: f32 = 0.4;
/// Item hues are drawn from [HUE_BAND_START, HUE_BAND_START + HUE_BAND_WIDTH).
const HUE_BAND_START: f32 = 0.52;
const HUE_BAND_WIDTH: f32 = 0.10;

/// A built scene: the graph plus the identity side table.
///
/// Created once at mount, destroyed exactly once at unmount via [`dispose`].
/// There is no partial rebuild; remounting builds a fresh scene.
#[derive(Debug)]
pub struct Scene {
    /// The retained scene graph.
    pub graph: SceneGraph,
    /// The mesh-to-record side table.
    pub identity: IdentityMap,
}

/// Constructs the scene graph and identity map.
///
/// One rack group per descriptor, each with a structural frame mesh and
/// `item_count` item meshes. An empty `catalog` is not an error: items are
/// still created, they simply carry no identity-map entries and resolve to
/// no record downstream.
pub fn build(
    device: &dyn RenderDevice,
    descriptors: &[RackDescriptor],
    catalog: &[ProductRecord],
) -> Result<Scene, ResourceError> {
    let mut identity = IdentityMap::new();
    let mut rng = rand::rng();

    let ground = build_ground(device)?;
    let grid = build_grid(device)?;

    let mut racks = Vec::with_capacity(descriptors.len());
    for descriptor in descriptors {
        racks.push(build_rack(device, descriptor, catalog, &mut identity, &mut rng)?);
    }

    let graph = SceneGraph {
        ground,
        grid,
        lights: LightRig::default(),
        racks,
    };

    log::info!(
        "scene built: {} racks, {} meshes, {} identity entries",
        graph.racks.len(),
        graph.mesh_count(),
        identity.len()
    );

    Ok(Scene { graph, identity })
}

/// Releases every mesh's geometry and material buffers and drops the
/// identity map.
///
/// The walk visits single- and multi-material meshes alike and keeps going
/// past a failing handle so one bad release cannot leak the rest of the
/// scene; the first error is reported after the walk completes.
pub fn dispose(scene: Scene, device: &dyn RenderDevice) -> Result<(), ResourceError> {
    let Scene { graph, mut identity } = scene;
    let mut first_error = None;

    for mesh in graph.meshes() {
        if let Err(err) = device.destroy_geometry(mesh.geometry) {
            log::error!("failed to release geometry of {:?}: {err}", mesh.id);
            first_error.get_or_insert(err);
        }
        for material in &mesh.materials {
            if let Err(err) = device.destroy_material(*material) {
                log::error!("failed to release material of {:?}: {err}", mesh.id);
                first_error.get_or_insert(err);
            }
        }
        identity.remove(mesh.id);
    }
    identity.clear();

    match first_error {
        None => Ok(()),
        Some(err) => Err(err),
    }
}

fn build_ground(device: &dyn RenderDevice) -> Result<MeshNode, ResourceError> {
    let geometry = device.create_geometry(&GeometryDescriptor {
        label: Some(Cow::Borrowed("ground")),
        shape: GeometryShape::Plane {
            width: GROUND_SIZE,
            depth: GROUND_SIZE,
        },
    })?;
    let material = device.create_material(&MaterialDescriptor {
        label: Some(Cow::Borrowed("ground")),
        color: LinearRgba::rgb(0.23, 0.25, 0.27),
        emissive: LinearRgba::BLACK,
    })?;

    let half = GROUND_SIZE / 2.0;
    Ok(MeshNode {
        id: MeshId::new(),
        kind: MeshKind::Ground,
        translation: Vec3::ZERO,
        bounds: Aabb::from_min_max(
            Vec3::new(-half, -0.05, -half),
            Vec3::new(half, 0.0, half),
        ),
        geometry,
        materials: vec![material],
        color_seed: 0.0,
    })
}

fn build_grid(device: &dyn RenderDevice) -> Result<MeshNode, ResourceError> {
    let geometry = device.create_geometry(&GeometryDescriptor {
        label: Some(Cow::Borrowed("grid")),
        shape: GeometryShape::Grid {
            size: GROUND_SIZE,
            divisions: GRID_DIVISIONS,
        },
    })?;
    let material = device.create_material(&MaterialDescriptor {
        label: Some(Cow::Borrowed("grid")),
        color: LinearRgba::rgb(0.38, 0.4, 0.42),
        emissive: LinearRgba::BLACK,
    })?;

    let half = GROUND_SIZE / 2.0;
    Ok(MeshNode {
        id: MeshId::new(),
        kind: MeshKind::Grid,
        translation: Vec3::ZERO,
        bounds: Aabb::from_min_max(
            Vec3::new(-half, 0.0, -half),
            Vec3::new(half, 0.01, half),
        ),
        geometry,
        materials: vec![material],
        color_seed: 0.0,
    })
}

fn build_rack(
    device: &dyn RenderDevice,
    descriptor: &RackDescriptor,
    catalog: &[ProductRecord],
    identity: &mut IdentityMap,
    rng: &mut impl Rng,
) -> Result<RackGroup, ResourceError> {
    let frame = build_frame(device, descriptor)?;

    let mut items = Vec::with_capacity(descriptor.item_count as usize);
    for slot_index in 0..descriptor.item_count {
        let item = build_item(device, descriptor, slot_index, rng)?;

        // The identity mapping is the deterministic part: catalog records
        // are reused cyclically when items outnumber records.
        if !catalog.is_empty() {
            let record_index = (descriptor.rack_index * ITEM_SLOT_STRIDE
                + slot_index as usize)
                % catalog.len();
            identity.insert(item.id, record_index);
        }

        items.push(item);
    }

    Ok(RackGroup {
        rack_index: descriptor.rack_index,
        frame,
        items,
    })
}

fn build_frame(
    device: &dyn RenderDevice,
    descriptor: &RackDescriptor,
) -> Result<MeshNode, ResourceError> {
    let geometry = device.create_geometry(&GeometryDescriptor {
        label: Some(Cow::Owned(format!("rack-{}-frame", descriptor.rack_index))),
        shape: GeometryShape::Cuboid { size: FRAME_SIZE },
    })?;
    // Frames are multi-material: painted steel plus the shelf deck.
    let steel = device.create_material(&MaterialDescriptor {
        label: Some(Cow::Borrowed("rack-steel")),
        color: LinearRgba::rgb(0.75, 0.45, 0.12),
        emissive: LinearRgba::BLACK,
    })?;
    let deck = device.create_material(&MaterialDescriptor {
        label: Some(Cow::Borrowed("rack-deck")),
        color: LinearRgba::rgb(0.55, 0.42, 0.28),
        emissive: LinearRgba::BLACK,
    })?;

    let center = Vec3::new(descriptor.x, FRAME_SIZE.y / 2.0, descriptor.z);
    Ok(MeshNode {
        id: MeshId::new(),
        kind: MeshKind::RackFrame,
        translation: center,
        bounds: Aabb::from_center_half_extents(center, FRAME_SIZE * 0.5),
        geometry,
        materials: vec![steel, deck],
        color_seed: 0.0,
    })
}

fn build_item(
    device: &dyn RenderDevice,
    descriptor: &RackDescriptor,
    slot_index: u32,
    rng: &mut impl Rng,
) -> Result<MeshNode, ResourceError> {
    let color_seed: f32 = rng.random();
    let hue = HUE_BAND_START + color_seed * HUE_BAND_WIDTH;

    let geometry = device.create_geometry(&GeometryDescriptor {
        label: Some(Cow::Owned(format!(
            "rack-{}-item-{}",
            descriptor.rack_index, slot_index
        ))),
        shape: GeometryShape::Cuboid {
            size: Vec3::new(ITEM_SIZE, ITEM_SIZE, ITEM_SIZE),
        },
    })?;
    let material = device.create_material(&MaterialDescriptor {
        label: Some(Cow::Borrowed("item")),
        color: LinearRgba::from_hsl(hue, 0.65, 0.55),
        emissive: LinearRgba::BLACK,
    })?;

    // Bounded jitter inside the rack footprint; tiers stack upward every
    // ITEMS_PER_TIER slots.
    let tier = slot_index / ITEMS_PER_TIER;
    let center = Vec3::new(
        descriptor.x + rng.random_range(-JITTER_X..=JITTER_X),
        FRAME_SIZE.y + ITEM_SIZE / 2.0 + tier as f32 * TIER_HEIGHT,
        descriptor.z + rng.random_range(-JITTER_Z..=JITTER_Z),
    );

    Ok(MeshNode {
        id: MeshId::new(),
        kind: MeshKind::Item,
        translation: center,
        bounds: Aabb::from_center_half_extents(center, Vec3::ONE * (ITEM_SIZE / 2.0)),
        geometry,
        materials: vec![material],
        color_seed,
    })
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use rackview_core::layout::{generate, RackSlot};
    use rackview_core::render::RecordingDevice;

    fn catalog(n: usize) -> Vec<ProductRecord> {
        (0..n)
            .map(|i| ProductRecord {
                id: format!("SKU-{i:04}"),
                name: format!("Product {i}"),
                location: format!("A-{i:02}"),
                quantity: (i as u32) + 1,
                date_added: "2026-02-01".to_string(),
            })
            .collect()
    }

    #[test]
    fn build_creates_expected_mesh_and_resource_counts() {
        let device = RecordingDevice::new();
        let plan = [RackSlot::new(-3.0, 0.0, 2), RackSlot::new(3.0, 0.0, 3)];
        let scene = build(&device, &generate(&plan), &catalog(4)).unwrap();

        // ground + grid + 2 frames + 5 items
        assert_eq!(scene.graph.mesh_count(), 9);
        assert_eq!(device.live_geometry_count(), 9);
        // One material per mesh, except frames which carry two.
        assert_eq!(device.live_material_count(), 11);
        assert_eq!(scene.identity.len(), 5);
    }

    #[test]
    fn identity_mapping_follows_the_modulo_rule() {
        let device = RecordingDevice::new();
        let plan = [RackSlot::new(0.0, 0.0, 3), RackSlot::new(6.0, 0.0, 2)];
        let records = catalog(4);
        let scene = build(&device, &generate(&plan), &records).unwrap();

        for rack in &scene.graph.racks {
            for (slot_index, item) in rack.items.iter().enumerate() {
                let expected =
                    (rack.rack_index * ITEM_SLOT_STRIDE + slot_index) % records.len();
                assert_eq!(scene.identity.resolve(item.id), Some(expected));
            }
        }
    }

    #[test]
    fn empty_catalog_builds_geometry_only() {
        let device = RecordingDevice::new();
        let plan = [RackSlot::new(0.0, 0.0, 2)];
        let scene = build(&device, &generate(&plan), &[]).unwrap();

        assert_eq!(scene.graph.mesh_count(), 4);
        assert!(scene.identity.is_empty());
        for item in scene.graph.items() {
            assert_eq!(scene.identity.resolve(item.id), None);
        }
    }

    #[test]
    fn items_stack_in_tiers_above_the_frame() {
        let device = RecordingDevice::new();
        let plan = [RackSlot::new(0.0, 0.0, 6)];
        let scene = build(&device, &generate(&plan), &catalog(2)).unwrap();
        let items = &scene.graph.racks[0].items;

        // Slots 0..2 share the bottom tier, slots 3..5 the next one up.
        let bottom = items[0].translation.y;
        for item in &items[0..3] {
            assert_eq!(item.translation.y, bottom);
        }
        for item in &items[3..6] {
            assert_eq!(item.translation.y, bottom + TIER_HEIGHT);
        }
        assert!(bottom > FRAME_SIZE.y);
    }

    #[test]
    fn jitter_stays_inside_the_rack_footprint() {
        let device = RecordingDevice::new();
        let plan = [RackSlot::new(5.0, -7.0, 6)];
        let scene = build(&device, &generate(&plan), &catalog(3)).unwrap();

        for item in scene.graph.items() {
            assert!((item.translation.x - 5.0).abs() <= JITTER_X + 1e-6);
            assert!((item.translation.z + 7.0).abs() <= JITTER_Z + 1e-6);
            assert!(item.color_seed >= 0.0 && item.color_seed < 1.0);
        }
    }

    #[test]
    fn dispose_releases_every_resource_exactly_once() {
        let device = RecordingDevice::new();
        let plan = [RackSlot::new(-3.0, 0.0, 4), RackSlot::new(3.0, 6.0, 2)];
        let scene = build(&device, &generate(&plan), &catalog(3)).unwrap();

        let created_geometries = device.created_geometry_count();
        let created_materials = device.created_material_count();

        dispose(scene, &device).unwrap();

        assert_eq!(device.destroyed_geometry_count(), created_geometries);
        assert_eq!(device.destroyed_material_count(), created_materials);
        assert_eq!(device.live_geometry_count(), 0);
        assert_eq!(device.live_material_count(), 0);
    }
}
