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

//! The warehouse view facade: one mount, many frames, one unmount.

use crate::controls::OrbitControls;
use crate::scheduler::{FrameClock, FrameHandle, RenderLoop};
use rackview_core::event::EventBus;
use rackview_core::layout::{generate, DEFAULT_FLOOR_PLAN};
use rackview_core::math::{Extent2D, Vec2, FRAC_PI_4};
use rackview_core::render::{Camera, RenderDevice, RenderSurface, ResourceError};
use rackview_core::ProductRecord;
use rackview_scene::{build, dispose, HighlightState, PickController, PickOutcome, Scene};
use std::fmt;
use std::sync::Arc;

/// A pointer click from the host shell, in surface pixels, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerClick {
    /// Click position within the surface.
    pub position: Vec2,
}

/// A size change of the host container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceResize {
    /// The new surface size in pixels.
    pub size: Extent2D,
}

/// Published whenever a click resolved to a selection change.
///
/// `record` carries the picked product, or `None` when the click cleared
/// the selection or hit an item with no catalog identity. Structural hits
/// publish nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEvent {
    /// The selected product record, if any.
    pub record: Option<ProductRecord>,
}

/// Errors surfaced by the view lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewError {
    /// The surface's host container is not attached; the view cannot mount.
    MountUnavailable,
    /// A device resource operation failed.
    Resource(ResourceError),
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::MountUnavailable => {
                write!(f, "cannot mount: surface container is not attached")
            }
            ViewError::Resource(err) => write!(f, "resource operation failed: {err}"),
        }
    }
}

impl std::error::Error for ViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewError::MountUnavailable => None,
            ViewError::Resource(err) => Some(err),
        }
    }
}

impl From<ResourceError> for ViewError {
    fn from(err: ResourceError) -> Self {
        ViewError::Resource(err)
    }
}

/// The mounted 3D warehouse view.
///
/// Owns the scene, the camera, the pick controller, and the loop state.
/// Input arrives over channels the host writes into; the selected record
/// flows back out over [`selection_events`]. Dropping the view without
/// [`unmount`] leaks device resources by design: teardown is an explicit
/// step, exactly once.
///
/// [`selection_events`]: WarehouseView::selection_events
/// [`unmount`]: WarehouseView::unmount
#[derive(Debug)]
pub struct WarehouseView {
    device: Arc<dyn RenderDevice>,
    surface: Arc<dyn RenderSurface>,
    catalog: Arc<[ProductRecord]>,
    scene: Scene,
    camera: Camera,
    controls: OrbitControls,
    picker: PickController,
    render_loop: RenderLoop,
    clicks: flume::Receiver<PointerClick>,
    resizes: flume::Receiver<SurfaceResize>,
    selection: EventBus<SelectionEvent>,
    viewport: Extent2D,
}

impl WarehouseView {
    /// Mounts the view: builds the scene for the default floor plan against
    /// the given catalog snapshot and takes the surface's current size.
    ///
    /// ## Errors
    /// * [`ViewError::MountUnavailable`] if the surface is not attached.
    /// * [`ViewError::Resource`] if scene construction fails; everything
    ///   created before the failure has already been journalled on the
    ///   device and the host decides whether to retry.
    pub fn mount(
        device: Arc<dyn RenderDevice>,
        surface: Arc<dyn RenderSurface>,
        catalog: Arc<[ProductRecord]>,
        clicks: flume::Receiver<PointerClick>,
        resizes: flume::Receiver<SurfaceResize>,
    ) -> Result<Self, ViewError> {
        if !surface.is_attached() {
            return Err(ViewError::MountUnavailable);
        }

        let viewport = surface.size();
        let mut camera = Camera::new(FRAC_PI_4, viewport.aspect_ratio().unwrap_or(1.0));
        let controls = OrbitControls::new();
        controls.apply_to(&mut camera);

        let descriptors = generate(&DEFAULT_FLOOR_PLAN);
        let scene = build(device.as_ref(), &descriptors, &catalog)?;
        log::info!(
            "view mounted: {} racks, viewport {}x{}",
            descriptors.len(),
            viewport.width,
            viewport.height
        );

        Ok(Self {
            device,
            surface,
            catalog,
            scene,
            camera,
            controls,
            picker: PickController::new(),
            render_loop: RenderLoop::new(),
            clicks,
            resizes,
            selection: EventBus::new(),
            viewport,
        })
    }

    /// A receiver of selection changes. Subscribe before starting the loop
    /// to observe every event.
    pub fn selection_events(&self) -> flume::Receiver<SelectionEvent> {
        self.selection.subscribe()
    }

    /// Current highlight state.
    pub fn highlight_state(&self) -> HighlightState {
        self.picker.highlight_state()
    }

    /// The camera as of the last frame.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The orbit controls, for the host to route drag and wheel input into.
    pub fn controls_mut(&mut self) -> &mut OrbitControls {
        &mut self.controls
    }

    /// The viewport size picking currently computes against.
    pub fn viewport(&self) -> Extent2D {
        self.viewport
    }

    /// The scene, for inspection by hosts and tests.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Starts the frame loop. A no-op while running.
    pub fn start(&mut self, clock: &mut dyn FrameClock) {
        self.render_loop.start(clock);
    }

    /// Stops the frame loop and cancels the pending frame. A no-op while
    /// stopped.
    pub fn stop(&mut self, clock: &mut dyn FrameClock) {
        self.render_loop.stop(clock);
    }

    /// Whether the frame loop is running.
    pub fn is_running(&self) -> bool {
        self.render_loop.is_running()
    }

    /// One frame: validate the tick, drain input, ease the camera, present.
    ///
    /// Stale ticks do nothing. Present failures are logged and swallowed;
    /// the loop keeps running and recovers when the surface does.
    pub fn on_frame(&mut self, clock: &mut dyn FrameClock, handle: FrameHandle) {
        if !self.render_loop.on_frame(clock, handle) {
            return;
        }

        self.pump_input();
        self.controls.step();
        self.controls.apply_to(&mut self.camera);

        if let Err(err) = self.surface.present(&self.camera.view_info()) {
            log::error!("present failed: {err}");
        }
    }

    fn pump_input(&mut self) {
        while let Ok(resize) = self.resizes.try_recv() {
            self.handle_resize(resize.size);
        }
        while let Ok(click) = self.clicks.try_recv() {
            self.handle_click(click);
        }
    }

    /// Applies a container size change: surface buffer, camera aspect, and
    /// the viewport picking maps clicks through.
    ///
    /// Empty sizes (a collapsed or hidden container) are dropped so the
    /// camera never sees a degenerate aspect ratio.
    pub fn handle_resize(&mut self, size: Extent2D) {
        let Some(aspect) = size.aspect_ratio() else {
            log::debug!("ignoring empty resize {}x{}", size.width, size.height);
            return;
        };
        self.surface.resize(size);
        self.camera.set_aspect(aspect);
        self.viewport = size;
    }

    /// Resolves one click and publishes the resulting selection change.
    ///
    /// Returns the newly selected record, `None` on a miss or an item with
    /// no catalog identity. Structural hits change nothing and publish
    /// nothing. Restyle failures are logged; the click is then dropped.
    pub fn handle_click(&mut self, click: PointerClick) -> Option<ProductRecord> {
        let outcome = match self.picker.pick(
            self.device.as_ref(),
            &self.scene,
            &self.camera,
            click.position,
            self.viewport,
        ) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::error!("pick failed: {err}");
                return None;
            }
        };

        match outcome {
            PickOutcome::Structural(_) => None,
            PickOutcome::Miss => {
                self.selection.publish(SelectionEvent { record: None });
                None
            }
            PickOutcome::Item { record, .. } => {
                let record = record.and_then(|index| self.catalog.get(index)).cloned();
                self.selection.publish(SelectionEvent {
                    record: record.clone(),
                });
                record
            }
        }
    }

    /// Unmounts the view and releases everything it owns, in a fixed order:
    /// input listeners first, then the loop, then the surface, then every
    /// scene resource.
    ///
    /// Consumes the view; there is no partial teardown and no remount of
    /// the same instance.
    ///
    /// ## Errors
    /// * [`ViewError::Resource`] if a release touched a dead handle. The
    ///   walk still visited every resource before returning.
    pub fn unmount(self, clock: &mut dyn FrameClock) -> Result<(), ViewError> {
        let Self {
            device,
            surface,
            scene,
            mut render_loop,
            clicks,
            resizes,
            ..
        } = self;

        drop(resizes);
        drop(clicks);
        render_loop.stop(clock);
        surface.detach();
        dispose(scene, device.as_ref())?;
        log::info!("view unmounted");
        Ok(())
    }
}
