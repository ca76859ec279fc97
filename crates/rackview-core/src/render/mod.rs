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

//! Trait seams for the host's graphics backend.
//!
//! The warehouse view never talks to a GPU API directly. It allocates and
//! releases resources through [`RenderDevice`] and draws into a
//! [`RenderSurface`]; the host binds whatever backend it has behind those
//! traits. [`RecordingDevice`] and [`RecordingSurface`] are the headless
//! implementations used by tests and the demo binary.

pub mod camera;
pub mod device;
pub mod error;
pub mod recording;
pub mod surface;

pub use camera::{Camera, ViewInfo};
pub use device::{
    GeometryDescriptor, GeometryId, GeometryShape, MaterialDescriptor, MaterialId, RenderDevice,
};
pub use error::{RenderError, ResourceError};
pub use recording::{DeviceCall, RecordingDevice, RecordingSurface, SurfaceCall};
pub use surface::RenderSurface;
