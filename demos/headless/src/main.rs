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

//! Runs the whole warehouse view against the recording backends: mount,
//! a couple hundred frames with clicks and a resize in the middle, unmount.
//!
//! Useful for eyeballing the selection flow and the resource journal with
//! `RUST_LOG=debug cargo run -p rackview-headless-demo`.

use anyhow::Context;
use rackview_core::catalog::CatalogStore;
use rackview_core::math::{Extent2D, Vec2, Vec3, Vec4};
use rackview_core::render::{Camera, RecordingDevice, RecordingSurface};
use rackview_core::ProductRecord;
use rackview_runtime::{ManualFrameClock, PointerClick, SurfaceResize, WarehouseView};
use std::sync::Arc;

const CATALOG_JSON: &str = include_str!("../catalog.json");
const FRAMES: usize = 180;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let records: Vec<ProductRecord> =
        serde_json::from_str(CATALOG_JSON).context("parsing the demo catalog")?;
    let store = CatalogStore::with_records(records);
    log::info!("catalog loaded: {} records", store.len());

    let device = Arc::new(RecordingDevice::new());
    let surface = Arc::new(RecordingSurface::attached(Extent2D::new(1280, 720)));
    let (clicks, click_rx) = flume::unbounded();
    let (resizes, resize_rx) = flume::unbounded();

    let mut view = WarehouseView::mount(
        device.clone(),
        surface.clone(),
        store.snapshot(),
        click_rx,
        resize_rx,
    )
    .context("mounting the warehouse view")?;
    let selections = view.selection_events();

    let mut clock = ManualFrameClock::new();
    view.start(&mut clock);
    view.controls_mut().rotate(0.6, 0.1);

    for frame in 0..FRAMES {
        match frame {
            // By frame 40 the orbit damping has settled; project through the
            // camera as it stands now.
            40 => clicks.send(PointerClick {
                position: pixel_on_an_item(&view),
            })?,
            90 => resizes.send(SurfaceResize {
                size: Extent2D::new(1920, 1080),
            })?,
            140 => clicks.send(PointerClick {
                // Top of the screen, above every rack.
                position: Vec2::new(960.0, 0.0),
            })?,
            _ => {}
        }

        let handle = clock.fire().context("frame loop lost its request")?;
        view.on_frame(&mut clock, handle);

        while let Ok(event) = selections.try_recv() {
            match event.record {
                Some(record) => log::info!(
                    "selected {} ({}) at {}, {} in stock",
                    record.name,
                    record.id,
                    record.location,
                    record.quantity
                ),
                None => log::info!("selection cleared"),
            }
        }
    }

    log::info!(
        "presented {} frames, viewport now {}x{}",
        surface.present_count(),
        view.viewport().width,
        view.viewport().height
    );

    view.unmount(&mut clock).context("unmounting the view")?;
    log::info!(
        "unmounted: {}/{} geometries and {}/{} materials released",
        device.destroyed_geometry_count(),
        device.created_geometry_count(),
        device.destroyed_material_count(),
        device.created_material_count()
    );

    Ok(())
}

/// A pixel whose ray passes through the center of the top item on the rack
/// nearest the camera.
fn pixel_on_an_item(view: &WarehouseView) -> Vec2 {
    let target = view
        .scene()
        .graph
        .racks
        .iter()
        .flat_map(|rack| rack.items.iter())
        .map(|item| item.translation)
        .fold(Vec3::ZERO, |best, candidate| {
            if (candidate.z, candidate.y) > (best.z, best.y) {
                candidate
            } else {
                best
            }
        });
    project(view.camera(), view.viewport(), target)
}

/// Projects a world point through the camera into surface pixels.
fn project(camera: &Camera, viewport: Extent2D, world: Vec3) -> Vec2 {
    let clip = camera.projection_matrix()
        * camera.view_matrix()
        * Vec4::new(world.x, world.y, world.z, 1.0);
    Vec2::new(
        (clip.x / clip.w + 1.0) / 2.0 * viewport.width as f32,
        (1.0 - clip.y / clip.w) / 2.0 * viewport.height as f32,
    )
}
