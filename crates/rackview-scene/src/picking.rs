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

//! Click-to-selection: ray casting against the scene and the resulting
//! highlight transitions.

use crate::builder::Scene;
use crate::graph::MeshId;
use crate::highlight::{HighlightState, Highlighter};
use rackview_core::math::{Extent2D, Vec2};
use rackview_core::render::{Camera, RenderDevice, ResourceError};

/// Converts a pixel position (origin top-left, Y down) into normalized
/// device coordinates (origin center, Y up).
///
/// Returns `None` for a degenerate viewport. Positions outside the viewport
/// map to coordinates outside `[-1, 1]` and simply miss.
pub fn screen_to_ndc(position: Vec2, viewport: Extent2D) -> Option<Vec2> {
    if viewport.is_empty() {
        return None;
    }
    Some(Vec2::new(
        (position.x / viewport.width as f32) * 2.0 - 1.0,
        1.0 - (position.y / viewport.height as f32) * 2.0,
    ))
}

/// What a click resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// The ray hit nothing. The highlight was cleared.
    Miss,
    /// The nearest hit was a structural mesh (ground, grid, rack frame).
    /// The highlight was left untouched.
    Structural(MeshId),
    /// The nearest hit was an item. It is now highlighted.
    Item {
        /// The item mesh that was hit.
        mesh: MeshId,
        /// Its catalog index, if the scene was built against a non-empty
        /// catalog.
        record: Option<usize>,
    },
}

/// Resolves clicks into selections.
///
/// Hit testing is a single pass over every mesh bound, keeping the strictly
/// nearest intersection. Ties keep the first mesh in graph order, which is
/// stable across frames.
#[derive(Debug, Default)]
pub struct PickController {
    highlighter: Highlighter,
}

impl PickController {
    /// Creates a controller with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current highlight state.
    pub fn highlight_state(&self) -> HighlightState {
        self.highlighter.state()
    }

    /// Resolves a click at `position` (pixels, top-left origin) against the
    /// scene as seen through `camera`.
    ///
    /// A miss clears the highlight; an item hit moves it; a structural hit
    /// changes nothing, so a selection survives clicking the floor next to
    /// it only when a rack or the grid is in the way, and is dropped when
    /// the click lands on empty sky.
    ///
    /// ## Errors
    /// * `ResourceError::InvalidMaterial` if a highlight restyle touches a
    ///   dead handle.
    pub fn pick(
        &mut self,
        device: &dyn RenderDevice,
        scene: &Scene,
        camera: &Camera,
        position: Vec2,
        viewport: Extent2D,
    ) -> Result<PickOutcome, ResourceError> {
        let ray = screen_to_ndc(position, viewport)
            .and_then(|ndc| camera.ray_through_ndc(ndc));
        let Some(ray) = ray else {
            self.highlighter.focus(device, &scene.graph, None)?;
            return Ok(PickOutcome::Miss);
        };

        let mut nearest: Option<(&crate::graph::MeshNode, f32)> = None;
        for mesh in scene.graph.meshes() {
            if let Some(t) = ray.intersect_aabb(&mesh.bounds) {
                if nearest.map(|(_, best)| t < best).unwrap_or(true) {
                    nearest = Some((mesh, t));
                }
            }
        }

        match nearest {
            None => {
                self.highlighter.focus(device, &scene.graph, None)?;
                log::debug!("pick miss at {position:?}");
                Ok(PickOutcome::Miss)
            }
            Some((mesh, _)) if !mesh.kind.is_item() => {
                Ok(PickOutcome::Structural(mesh.id))
            }
            Some((mesh, t)) => {
                self.highlighter.focus(device, &scene.graph, Some(mesh.id))?;
                let record = scene.identity.resolve(mesh.id);
                log::debug!("picked {:?} at t={t:.3}, record {record:?}", mesh.id);
                Ok(PickOutcome::Item {
                    mesh: mesh.id,
                    record,
                })
            }
        }
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build;
    use rackview_core::layout::{generate, RackSlot};
    use rackview_core::math::Vec3;
    use rackview_core::render::RecordingDevice;
    use rackview_core::ProductRecord;

    const VIEWPORT: Extent2D = Extent2D {
        width: 800,
        height: 600,
    };

    fn record(id: &str) -> ProductRecord {
        ProductRecord {
            id: id.to_string(),
            name: id.to_string(),
            location: "C-03".to_string(),
            quantity: 8,
            date_added: "2026-04-10".to_string(),
        }
    }

    fn center_click() -> Vec2 {
        Vec2::new(400.0, 300.0)
    }

    /// A camera whose center ray points straight at `target`.
    fn camera_aimed_at(target: Vec3) -> Camera {
        let mut camera = Camera::new(std::f32::consts::FRAC_PI_4, 800.0 / 600.0);
        camera.eye = target + Vec3::new(0.0, 15.0, 10.0);
        camera.target = target;
        camera
    }

    #[test]
    fn screen_corners_map_to_ndc_corners() {
        let top_left = screen_to_ndc(Vec2::ZERO, VIEWPORT).unwrap();
        assert_eq!(top_left, Vec2::new(-1.0, 1.0));

        let center = screen_to_ndc(center_click(), VIEWPORT).unwrap();
        assert_eq!(center, Vec2::ZERO);

        let bottom_right = screen_to_ndc(Vec2::new(800.0, 600.0), VIEWPORT).unwrap();
        assert_eq!(bottom_right, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn degenerate_viewport_yields_no_ndc() {
        assert!(screen_to_ndc(center_click(), Extent2D::new(0, 600)).is_none());
        assert!(screen_to_ndc(center_click(), Extent2D::new(800, 0)).is_none());
    }

    #[test]
    fn clicking_an_item_selects_and_resolves_it() {
        let device = RecordingDevice::new();
        let plan = [RackSlot::new(0.0, 0.0, 1)];
        let catalog = vec![record("a"), record("b")];
        let scene = build(&device, &generate(&plan), &catalog).unwrap();
        let item = &scene.graph.racks[0].items[0];
        let camera = camera_aimed_at(item.translation);

        let mut controller = PickController::new();
        let outcome = controller
            .pick(&device, &scene, &camera, center_click(), VIEWPORT)
            .unwrap();

        assert_eq!(
            outcome,
            PickOutcome::Item {
                mesh: item.id,
                record: Some(0),
            }
        );
        assert_eq!(controller.highlight_state(), HighlightState::Selected(item.id));
        assert_eq!(device.lit_materials(), vec![item.materials[0]]);
    }

    #[test]
    fn clicking_the_sky_clears_the_selection() {
        let device = RecordingDevice::new();
        let plan = [RackSlot::new(0.0, 0.0, 1)];
        let scene = build(&device, &generate(&plan), &[record("a")]).unwrap();
        let item = &scene.graph.racks[0].items[0];

        let mut controller = PickController::new();
        let aimed = camera_aimed_at(item.translation);
        controller
            .pick(&device, &scene, &aimed, center_click(), VIEWPORT)
            .unwrap();
        assert_eq!(controller.highlight_state(), HighlightState::Selected(item.id));

        // Aim well above the scene so the ray clears every bound.
        let mut sky = aimed;
        sky.eye = Vec3::new(0.0, 5.0, 30.0);
        sky.target = Vec3::new(0.0, 60.0, 0.0);
        let outcome = controller
            .pick(&device, &scene, &sky, center_click(), VIEWPORT)
            .unwrap();

        assert_eq!(outcome, PickOutcome::Miss);
        assert_eq!(controller.highlight_state(), HighlightState::None);
        assert!(device.lit_materials().is_empty());
    }

    #[test]
    fn structural_hits_leave_the_selection_alone() {
        let device = RecordingDevice::new();
        let plan = [RackSlot::new(0.0, 0.0, 1)];
        let scene = build(&device, &generate(&plan), &[record("a")]).unwrap();
        let item = &scene.graph.racks[0].items[0];

        let mut controller = PickController::new();
        let aimed = camera_aimed_at(item.translation);
        controller
            .pick(&device, &scene, &aimed, center_click(), VIEWPORT)
            .unwrap();

        // The floor far from the rack is a structural hit.
        let floor = camera_aimed_at(Vec3::new(15.0, 0.0, 15.0));
        let outcome = controller
            .pick(&device, &scene, &floor, center_click(), VIEWPORT)
            .unwrap();

        assert!(matches!(outcome, PickOutcome::Structural(_)));
        assert_eq!(controller.highlight_state(), HighlightState::Selected(item.id));
        assert_eq!(device.lit_materials().len(), 1);
    }

    #[test]
    fn empty_catalog_items_pick_without_a_record() {
        let device = RecordingDevice::new();
        let plan = [RackSlot::new(0.0, 0.0, 1)];
        let scene = build(&device, &generate(&plan), &[]).unwrap();
        let item = &scene.graph.racks[0].items[0];
        let camera = camera_aimed_at(item.translation);

        let mut controller = PickController::new();
        let outcome = controller
            .pick(&device, &scene, &camera, center_click(), VIEWPORT)
            .unwrap();

        assert_eq!(
            outcome,
            PickOutcome::Item {
                mesh: item.id,
                record: None,
            }
        );
        assert_eq!(controller.highlight_state(), HighlightState::Selected(item.id));
    }

    #[test]
    fn degenerate_viewport_picks_miss() {
        let device = RecordingDevice::new();
        let plan = [RackSlot::new(0.0, 0.0, 1)];
        let scene = build(&device, &generate(&plan), &[record("a")]).unwrap();
        let camera = camera_aimed_at(Vec3::ZERO);

        let mut controller = PickController::new();
        let outcome = controller
            .pick(&device, &scene, &camera, center_click(), Extent2D::new(0, 0))
            .unwrap();
        assert_eq!(outcome, PickOutcome::Miss);
    }
}
