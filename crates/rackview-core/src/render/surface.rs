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

//! The drawable surface seam.

use super::camera::ViewInfo;
use super::error::RenderError;
use crate::math::Extent2D;
use std::fmt::Debug;

/// A drawable surface sized to its host container.
///
/// The view owns attaching and detaching this surface's output element from
/// the mount point the host provides; the host owns the windowing system
/// behind it.
pub trait RenderSurface: Debug + Send + Sync {
    /// Whether the surface's output element is currently attached to a
    /// mount point. Building a view against a detached surface is refused.
    fn is_attached(&self) -> bool;

    /// The current physical size of the surface.
    fn size(&self) -> Extent2D;

    /// Resizes the surface's backing buffer.
    ///
    /// Callers are expected to have filtered out empty extents; a degenerate
    /// resize must never reach the backend.
    fn resize(&self, size: Extent2D);

    /// Presents one frame with the given camera state.
    ///
    /// ## Errors
    /// * `RenderError::SurfaceDetached` if the output element has been
    ///   detached.
    fn present(&self, view: &ViewInfo) -> Result<(), RenderError>;

    /// Detaches the surface's output element from its mount point.
    ///
    /// Called once during teardown, after the render loop has stopped.
    fn detach(&self);
}
