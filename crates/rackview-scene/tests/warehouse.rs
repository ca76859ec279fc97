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

//! Full floor-plan coverage: the default layout built against catalogs of
//! different sizes.

use rackview_core::layout::{generate, DEFAULT_FLOOR_PLAN, ITEM_SLOT_STRIDE};
use rackview_core::render::RecordingDevice;
use rackview_core::ProductRecord;
use rackview_scene::{build, dispose};

fn catalog(n: usize) -> Vec<ProductRecord> {
    (0..n)
        .map(|i| ProductRecord {
            id: format!("SKU-{i:04}"),
            name: format!("Product {i}"),
            location: format!("D-{i:02}"),
            quantity: 10,
            date_added: "2026-06-20".to_string(),
        })
        .collect()
}

#[test]
fn default_floor_plan_builds_in_layout_order() {
    let device = RecordingDevice::new();
    let descriptors = generate(&DEFAULT_FLOOR_PLAN);
    let scene = build(&device, &descriptors, &catalog(10)).unwrap();

    assert_eq!(scene.graph.racks.len(), DEFAULT_FLOOR_PLAN.len());
    for (descriptor, rack) in descriptors.iter().zip(&scene.graph.racks) {
        assert_eq!(rack.rack_index, descriptor.rack_index);
        assert_eq!(rack.items.len(), descriptor.item_count as usize);
        assert_eq!(rack.frame.translation.x, descriptor.x);
        assert_eq!(rack.frame.translation.z, descriptor.z);
    }

    let item_total: usize = DEFAULT_FLOOR_PLAN
        .iter()
        .map(|slot| slot.item_count as usize)
        .sum();
    // ground + grid + one frame per rack + every item
    assert_eq!(
        scene.graph.mesh_count(),
        2 + DEFAULT_FLOOR_PLAN.len() + item_total
    );
    assert_eq!(scene.identity.len(), item_total);
}

/// The identity rule holds whether the catalog is smaller than, equal to,
/// or larger than the number of generated items.
#[test]
fn identity_rule_holds_across_catalog_sizes() {
    let descriptors = generate(&DEFAULT_FLOOR_PLAN);
    let item_total: usize = descriptors.iter().map(|d| d.item_count as usize).sum();

    for catalog_len in [3, item_total, item_total * 2] {
        let device = RecordingDevice::new();
        let records = catalog(catalog_len);
        let scene = build(&device, &descriptors, &records).unwrap();

        for rack in &scene.graph.racks {
            for (slot_index, item) in rack.items.iter().enumerate() {
                let expected =
                    (rack.rack_index * ITEM_SLOT_STRIDE + slot_index) % catalog_len;
                assert_eq!(scene.identity.resolve(item.id), Some(expected));
                assert_eq!(
                    scene.identity.resolve_record(item.id, &records).unwrap().id,
                    records[expected].id
                );
            }
        }
    }
}

#[test]
fn rebuilding_the_same_plan_is_structurally_identical() {
    let device = RecordingDevice::new();
    let descriptors = generate(&DEFAULT_FLOOR_PLAN);
    let first = build(&device, &descriptors, &catalog(10)).unwrap();
    let second = build(&device, &descriptors, &catalog(10)).unwrap();

    assert_eq!(first.graph.mesh_count(), second.graph.mesh_count());
    assert_eq!(first.identity.len(), second.identity.len());
    // Mesh identities are fresh per build; nothing is shared between scenes.
    for mesh in first.graph.meshes() {
        assert!(second.graph.find_mesh(mesh.id).is_none());
    }
}

#[test]
fn full_scene_disposal_leaves_nothing_live() {
    let device = RecordingDevice::new();
    let scene = build(&device, &generate(&DEFAULT_FLOOR_PLAN), &catalog(10)).unwrap();

    let created_geometries = device.created_geometry_count();
    let created_materials = device.created_material_count();
    dispose(scene, &device).unwrap();

    assert_eq!(device.destroyed_geometry_count(), created_geometries);
    assert_eq!(device.destroyed_material_count(), created_materials);
    assert_eq!(device.live_geometry_count(), 0);
    assert_eq!(device.live_material_count(), 0);
}
