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

//! Error types for the rendering seams.

use super::device::{GeometryId, MaterialId};
use std::fmt;

/// An error related to the creation or release of a graphics resource.
///
/// Both leak and double-release are defects; a device must return
/// `InvalidGeometry`/`InvalidMaterial` when asked to destroy a handle it no
/// longer tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// The backend failed to allocate a resource.
    CreationFailed {
        /// Label of the resource that failed, if one was supplied.
        label: Option<String>,
        /// Backend-specific detail.
        details: String,
    },
    /// The geometry handle does not refer to a live resource.
    InvalidGeometry {
        /// The offending handle.
        id: GeometryId,
    },
    /// The material handle does not refer to a live resource.
    InvalidMaterial {
        /// The offending handle.
        id: MaterialId,
    },
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::CreationFailed { label, details } => {
                write!(
                    f,
                    "Failed to create resource '{}': {details}",
                    label.as_deref().unwrap_or("<unlabeled>")
                )
            }
            ResourceError::InvalidGeometry { id } => {
                write!(f, "Geometry handle is not live: {id:?}")
            }
            ResourceError::InvalidMaterial { id } => {
                write!(f, "Material handle is not live: {id:?}")
            }
        }
    }
}

impl std::error::Error for ResourceError {}

/// An error raised while presenting a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The output surface has been detached from its host container.
    SurfaceDetached,
    /// A resource operation failed during the frame.
    Resource(ResourceError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SurfaceDetached => {
                write!(f, "Render surface is detached from its container")
            }
            RenderError::Resource(err) => write!(f, "Resource error during frame: {err}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Resource(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ResourceError> for RenderError {
    fn from(err: ResourceError) -> Self {
        RenderError::Resource(err)
    }
}

// --- Tests ---
