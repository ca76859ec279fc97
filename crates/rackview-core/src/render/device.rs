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

//! The graphics device seam: resource creation and release by opaque handle.

use super::error::ResourceError;
use crate::math::{LinearRgba, Vec3};
use std::borrow::Cow;
use std::fmt::Debug;

/// An opaque handle to a GPU-backed geometry buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryId(pub usize);

/// An opaque handle to a GPU-backed material (uniforms, pipeline state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub usize);

/// The procedural shapes the warehouse scene is assembled from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryShape {
    /// A flat plane on the XZ axes, centered at the origin.
    Plane {
        /// Extent along X, in meters.
        width: f32,
        /// Extent along Z, in meters.
        depth: f32,
    },
    /// A line grid on the XZ axes, centered at the origin.
    Grid {
        /// Total side length, in meters.
        size: f32,
        /// Number of divisions per side.
        divisions: u32,
    },
    /// A box centered at the origin.
    Cuboid {
        /// Full extent on each axis, in meters.
        size: Vec3,
    },
}

/// A descriptor used to create a geometry buffer.
#[derive(Debug, Clone)]
pub struct GeometryDescriptor<'a> {
    /// An optional debug label.
    pub label: Option<Cow<'a, str>>,
    /// The shape to tessellate.
    pub shape: GeometryShape,
}

/// A descriptor used to create a material.
#[derive(Debug, Clone)]
pub struct MaterialDescriptor<'a> {
    /// An optional debug label.
    pub label: Option<Cow<'a, str>>,
    /// Base color.
    pub color: LinearRgba,
    /// Emissive color; [`LinearRgba::BLACK`] means none.
    pub emissive: LinearRgba,
}

/// The device behind which the host supplies its graphics backend.
///
/// Every `create_*` hands out a handle the caller owns and must release with
/// the matching `destroy_*` exactly once, at teardown. Implementations use
/// interior mutability; all methods take `&self`.
pub trait RenderDevice: Debug + Send + Sync {
    /// Creates a geometry buffer for a procedural shape.
    ///
    /// ## Errors
    /// * `ResourceError::CreationFailed` if the backend cannot allocate.
    fn create_geometry(&self, descriptor: &GeometryDescriptor<'_>)
        -> Result<GeometryId, ResourceError>;

    /// Releases a geometry buffer.
    ///
    /// ## Errors
    /// * `ResourceError::InvalidGeometry` if the handle is not live
    ///   (double-release or a foreign handle).
    fn destroy_geometry(&self, id: GeometryId) -> Result<(), ResourceError>;

    /// Creates a material.
    ///
    /// ## Errors
    /// * `ResourceError::CreationFailed` if the backend cannot allocate.
    fn create_material(&self, descriptor: &MaterialDescriptor<'_>)
        -> Result<MaterialId, ResourceError>;

    /// Releases a material.
    ///
    /// ## Errors
    /// * `ResourceError::InvalidMaterial` if the handle is not live.
    fn destroy_material(&self, id: MaterialId) -> Result<(), ResourceError>;

    /// Updates a live material's emissive color. Drives highlight styling.
    ///
    /// ## Errors
    /// * `ResourceError::InvalidMaterial` if the handle is not live.
    fn set_material_emissive(
        &self,
        id: MaterialId,
        emissive: LinearRgba,
    ) -> Result<(), ResourceError>;
}
