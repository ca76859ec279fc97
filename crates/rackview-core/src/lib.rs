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

//! # rackview-core
//!
//! Foundational crate for the warehouse 3D visualization: math primitives,
//! the read-only product catalog, the deterministic rack layout generator,
//! and the trait seams behind which a host supplies its graphics backend.

#![warn(missing_docs)]

pub mod catalog;
pub mod event;
pub mod layout;
pub mod math;
pub mod render;

pub use catalog::{CatalogStore, ProductRecord};
pub use layout::{RackDescriptor, RackSlot};
