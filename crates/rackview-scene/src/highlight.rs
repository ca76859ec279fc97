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

//! Emissive highlight styling for the selected item.

use crate::graph::{MeshId, SceneGraph};
use rackview_core::math::LinearRgba;
use rackview_core::render::{RenderDevice, ResourceError};

/// Which item, if any, currently carries the accent emissive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightState {
    /// No item is highlighted.
    #[default]
    None,
    /// Exactly this item is highlighted.
    Selected(MeshId),
}

/// Applies the single-selection highlight invariant.
///
/// Every focus change is a full reset-then-apply pass: the emissive of every
/// item material is cleared first, then the accent is written to the target.
/// That keeps at most one item lit even if state drifted out of sync with
/// the device (a remount, a failed earlier pass).
#[derive(Debug)]
pub struct Highlighter {
    state: HighlightState,
    accent: LinearRgba,
}

impl Highlighter {
    /// Emissive accent color for the selected item.
    pub const DEFAULT_ACCENT: LinearRgba = LinearRgba::new(0.1, 0.45, 0.85, 1.0);

    /// Creates a highlighter with the default accent and nothing selected.
    pub fn new() -> Self {
        Self::with_accent(Self::DEFAULT_ACCENT)
    }

    /// Creates a highlighter with a custom accent color.
    pub fn with_accent(accent: LinearRgba) -> Self {
        Self {
            state: HighlightState::None,
            accent,
        }
    }

    /// Current highlight state.
    pub fn state(&self) -> HighlightState {
        self.state
    }

    /// Moves the highlight to `target`, or clears it when `target` is `None`.
    ///
    /// Targets that are not item meshes clear the highlight; structural
    /// meshes never carry the accent. Fails if any touched material handle
    /// is no longer live, in which case the state still reflects the
    /// requested target so the next pass converges.
    pub fn focus(
        &mut self,
        device: &dyn RenderDevice,
        graph: &SceneGraph,
        target: Option<MeshId>,
    ) -> Result<(), ResourceError> {
        let target = target.filter(|id| {
            graph
                .find_mesh(*id)
                .map(|mesh| mesh.kind.is_item())
                .unwrap_or(false)
        });

        self.state = match target {
            Some(id) => HighlightState::Selected(id),
            None => HighlightState::None,
        };

        let mut first_error = None;
        for item in graph.items() {
            let emissive = if Some(item.id) == target {
                self.accent
            } else {
                LinearRgba::BLACK
            };
            for material in &item.materials {
                if let Err(err) = device.set_material_emissive(*material, emissive) {
                    log::error!("failed to restyle {:?}: {err}", item.id);
                    first_error.get_or_insert(err);
                }
            }
        }

        match first_error {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

// --- Tests ---
