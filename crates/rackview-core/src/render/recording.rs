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

//! Headless device and surface implementations that journal every call.
//!
//! Used by the test suites to prove resource-lifetime invariants (release
//! exactly once, nothing live after teardown) and by the demo binary to run
//! the whole core without a GPU.

use super::camera::ViewInfo;
use super::device::{
    GeometryDescriptor, GeometryId, MaterialDescriptor, MaterialId, RenderDevice,
};
use super::error::{RenderError, ResourceError};
use super::surface::RenderSurface;
use crate::math::{Extent2D, LinearRgba};
use std::collections::HashMap;
use std::sync::Mutex;

/// One recorded device operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    /// A geometry buffer was created.
    CreateGeometry(GeometryId),
    /// A geometry buffer was released.
    DestroyGeometry(GeometryId),
    /// A material was created.
    CreateMaterial(MaterialId),
    /// A material was released.
    DestroyMaterial(MaterialId),
    /// A material's emissive color changed.
    SetEmissive(MaterialId, LinearRgba),
}

#[derive(Debug, Default)]
struct RecordingState {
    next_id: usize,
    live_geometries: HashMap<usize, ()>,
    live_materials: HashMap<usize, LinearRgba>,
    journal: Vec<DeviceCall>,
}

/// A [`RenderDevice`] that allocates nothing and remembers everything.
#[derive(Debug, Default)]
pub struct RecordingDevice {
    state: Mutex<RecordingState>,
}

impl RecordingDevice {
    /// Creates an empty recording device.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every call made so far, in order.
    pub fn journal(&self) -> Vec<DeviceCall> {
        self.state.lock().unwrap().journal.clone()
    }

    /// Number of geometry buffers currently live.
    pub fn live_geometry_count(&self) -> usize {
        self.state.lock().unwrap().live_geometries.len()
    }

    /// Number of materials currently live.
    pub fn live_material_count(&self) -> usize {
        self.state.lock().unwrap().live_materials.len()
    }

    /// Total geometries ever created.
    pub fn created_geometry_count(&self) -> usize {
        self.count(|c| matches!(c, DeviceCall::CreateGeometry(_)))
    }

    /// Total geometries ever destroyed.
    pub fn destroyed_geometry_count(&self) -> usize {
        self.count(|c| matches!(c, DeviceCall::DestroyGeometry(_)))
    }

    /// Total materials ever created.
    pub fn created_material_count(&self) -> usize {
        self.count(|c| matches!(c, DeviceCall::CreateMaterial(_)))
    }

    /// Total materials ever destroyed.
    pub fn destroyed_material_count(&self) -> usize {
        self.count(|c| matches!(c, DeviceCall::DestroyMaterial(_)))
    }

    /// The current emissive color of a live material, if any.
    pub fn emissive_of(&self, id: MaterialId) -> Option<LinearRgba> {
        self.state.lock().unwrap().live_materials.get(&id.0).copied()
    }

    /// Handles of live materials whose emissive is not [`LinearRgba::BLACK`].
    pub fn lit_materials(&self) -> Vec<MaterialId> {
        let state = self.state.lock().unwrap();
        let mut lit: Vec<MaterialId> = state
            .live_materials
            .iter()
            .filter(|(_, emissive)| **emissive != LinearRgba::BLACK)
            .map(|(id, _)| MaterialId(*id))
            .collect();
        lit.sort_by_key(|id| id.0);
        lit
    }

    fn count(&self, pred: impl Fn(&DeviceCall) -> bool) -> usize {
        self.state.lock().unwrap().journal.iter().filter(|c| pred(c)).count()
    }
}

impl RenderDevice for RecordingDevice {
    fn create_geometry(
        &self,
        descriptor: &GeometryDescriptor<'_>,
    ) -> Result<GeometryId, ResourceError> {
        let mut state = self.state.lock().unwrap();
        let id = GeometryId(state.next_id);
        state.next_id += 1;
        state.live_geometries.insert(id.0, ());
        state.journal.push(DeviceCall::CreateGeometry(id));
        log::trace!("create_geometry {:?} ({:?})", id, descriptor.shape);
        Ok(id)
    }

    fn destroy_geometry(&self, id: GeometryId) -> Result<(), ResourceError> {
        let mut state = self.state.lock().unwrap();
        if state.live_geometries.remove(&id.0).is_none() {
            return Err(ResourceError::InvalidGeometry { id });
        }
        state.journal.push(DeviceCall::DestroyGeometry(id));
        Ok(())
    }

    fn create_material(
        &self,
        descriptor: &MaterialDescriptor<'_>,
    ) -> Result<MaterialId, ResourceError> {
        let mut state = self.state.lock().unwrap();
        let id = MaterialId(state.next_id);
        state.next_id += 1;
        state.live_materials.insert(id.0, descriptor.emissive);
        state.journal.push(DeviceCall::CreateMaterial(id));
        Ok(id)
    }

    fn destroy_material(&self, id: MaterialId) -> Result<(), ResourceError> {
        let mut state = self.state.lock().unwrap();
        if state.live_materials.remove(&id.0).is_none() {
            return Err(ResourceError::InvalidMaterial { id });
        }
        state.journal.push(DeviceCall::DestroyMaterial(id));
        Ok(())
    }

    fn set_material_emissive(
        &self,
        id: MaterialId,
        emissive: LinearRgba,
    ) -> Result<(), ResourceError> {
        let mut state = self.state.lock().unwrap();
        match state.live_materials.get_mut(&id.0) {
            Some(slot) => {
                *slot = emissive;
                state.journal.push(DeviceCall::SetEmissive(id, emissive));
                Ok(())
            }
            None => Err(ResourceError::InvalidMaterial { id }),
        }
    }
}

/// One recorded surface operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    /// The backing buffer was resized.
    Resize(Extent2D),
    /// A frame was presented.
    Present,
    /// The output element was detached.
    Detach,
}

#[derive(Debug)]
struct SurfaceState {
    attached: bool,
    size: Extent2D,
    journal: Vec<SurfaceCall>,
}

/// A [`RenderSurface`] that draws nothing and remembers everything.
#[derive(Debug)]
pub struct RecordingSurface {
    state: Mutex<SurfaceState>,
}

impl RecordingSurface {
    /// Creates a surface already attached to a mount point.
    pub fn attached(size: Extent2D) -> Self {
        Self {
            state: Mutex::new(SurfaceState {
                attached: true,
                size,
                journal: Vec::new(),
            }),
        }
    }

    /// Creates a surface whose container has not mounted yet.
    pub fn detached() -> Self {
        Self {
            state: Mutex::new(SurfaceState {
                attached: false,
                size: Extent2D::default(),
                journal: Vec::new(),
            }),
        }
    }

    /// Returns a copy of every call made so far, in order.
    pub fn journal(&self) -> Vec<SurfaceCall> {
        self.state.lock().unwrap().journal.clone()
    }

    /// Number of frames presented so far.
    pub fn present_count(&self) -> usize {
        self.state
            .lock()
            .unwrap()
            .journal
            .iter()
            .filter(|c| **c == SurfaceCall::Present)
            .count()
    }
}

impl RenderSurface for RecordingSurface {
    fn is_attached(&self) -> bool {
        self.state.lock().unwrap().attached
    }

    fn size(&self) -> Extent2D {
        self.state.lock().unwrap().size
    }

    fn resize(&self, size: Extent2D) {
        let mut state = self.state.lock().unwrap();
        state.size = size;
        state.journal.push(SurfaceCall::Resize(size));
    }

    fn present(&self, _view: &ViewInfo) -> Result<(), RenderError> {
        let mut state = self.state.lock().unwrap();
        if !state.attached {
            return Err(RenderError::SurfaceDetached);
        }
        state.journal.push(SurfaceCall::Present);
        Ok(())
    }

    fn detach(&self) {
        let mut state = self.state.lock().unwrap();
        state.attached = false;
        state.journal.push(SurfaceCall::Detach);
    }
}

// --- Tests ---
