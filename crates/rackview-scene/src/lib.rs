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

//! # rackview-scene
//!
//! The retained warehouse scene: procedural geometry per rack, the identity
//! map tying item meshes to catalog records, the highlight state machine,
//! and the ray-pick controller.

#![warn(missing_docs)]

pub mod builder;
pub mod graph;
pub mod highlight;
pub mod identity;
pub mod picking;

pub use builder::{build, dispose, Scene};
pub use graph::{MeshId, MeshKind, MeshNode, RackGroup, SceneGraph};
pub use highlight::{HighlightState, Highlighter};
pub use identity::IdentityMap;
pub use picking::{PickController, PickOutcome};
