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

//! # rackview-runtime
//!
//! The running half of the warehouse view: the frame-loop state machine over
//! a host-supplied clock, damped orbit controls, and the [`WarehouseView`]
//! facade that owns mount, per-frame work, input routing, and teardown.

#![warn(missing_docs)]

pub mod controls;
pub mod scheduler;
pub mod view;

pub use controls::OrbitControls;
pub use scheduler::{FrameClock, FrameHandle, ManualFrameClock, RenderLoop};
pub use view::{PointerClick, SelectionEvent, SurfaceResize, ViewError, WarehouseView};
