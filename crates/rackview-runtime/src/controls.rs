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

//! Damped orbit controls around a fixed look-at target.

use rackview_core::math::{Vec3, FRAC_PI_2};
use rackview_core::render::Camera;

/// Fraction of the remaining delta applied per frame.
const DAMPING: f32 = 0.15;
/// Pitch stays off the poles so the view matrix never degenerates.
const MIN_PITCH: f32 = 0.05;
const MAX_PITCH: f32 = FRAC_PI_2 - 0.05;
const MIN_DISTANCE: f32 = 4.0;
const MAX_DISTANCE: f32 = 80.0;

/// Spherical orbit around a target point with per-frame damping.
///
/// Input nudges the goal angles; [`step`] eases the live angles toward them
/// each frame so camera motion coasts to a stop instead of snapping.
///
/// [`step`]: OrbitControls::step
#[derive(Debug, Clone, Copy)]
pub struct OrbitControls {
    /// The point the camera orbits and looks at.
    pub target: Vec3,
    yaw: f32,
    pitch: f32,
    distance: f32,
    goal_yaw: f32,
    goal_pitch: f32,
    goal_distance: f32,
}

impl OrbitControls {
    /// Creates controls matching the default camera pose: above and in
    /// front of the floor, looking at its center.
    pub fn new() -> Self {
        // eye (0, 12, 24) relative to the origin target
        let distance = Vec3::new(0.0, 12.0, 24.0).length();
        let pitch = (12.0 / distance).asin();
        Self {
            target: Vec3::ZERO,
            yaw: 0.0,
            pitch,
            distance,
            goal_yaw: 0.0,
            goal_pitch: pitch,
            goal_distance: distance,
        }
    }

    /// Current yaw angle, in radians.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch angle above the horizon, in radians.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current orbit radius, in meters.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Nudges the goal orbit angles. Pitch is clamped away from the poles.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.goal_yaw += delta_yaw;
        self.goal_pitch = (self.goal_pitch + delta_pitch).clamp(MIN_PITCH, MAX_PITCH);
    }

    /// Nudges the goal orbit radius, clamped to the working range.
    pub fn zoom(&mut self, delta_distance: f32) {
        self.goal_distance =
            (self.goal_distance + delta_distance).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Eases the live pose toward the goals. Call once per frame.
    pub fn step(&mut self) {
        self.yaw += (self.goal_yaw - self.yaw) * DAMPING;
        self.pitch += (self.goal_pitch - self.pitch) * DAMPING;
        self.distance += (self.goal_distance - self.distance) * DAMPING;
    }

    /// Writes the current pose into `camera`.
    pub fn apply_to(&self, camera: &mut Camera) {
        let horizontal = self.distance * self.pitch.cos();
        camera.eye = self.target
            + Vec3::new(
                horizontal * self.yaw.sin(),
                self.distance * self.pitch.sin(),
                horizontal * self.yaw.cos(),
            );
        camera.target = self.target;
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new()
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_pose_matches_the_default_camera() {
        let controls = OrbitControls::new();
        let mut camera = Camera::new(1.0, 1.0);
        controls.apply_to(&mut camera);

        assert_relative_eq!(camera.eye.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(camera.eye.y, 12.0, epsilon = 1e-3);
        assert_relative_eq!(camera.eye.z, 24.0, epsilon = 1e-3);
    }

    #[test]
    fn rotation_converges_to_the_goal() {
        let mut controls = OrbitControls::new();
        controls.rotate(1.0, 0.0);
        for _ in 0..200 {
            controls.step();
        }
        assert_relative_eq!(controls.yaw(), 1.0, epsilon = 1e-3);
    }

    #[test]
    fn pitch_stays_off_the_poles() {
        let mut controls = OrbitControls::new();
        controls.rotate(0.0, 10.0);
        for _ in 0..200 {
            controls.step();
        }
        assert!(controls.pitch() <= MAX_PITCH + 1e-4);

        controls.rotate(0.0, -20.0);
        for _ in 0..200 {
            controls.step();
        }
        assert!(controls.pitch() >= MIN_PITCH - 1e-4);
    }

    #[test]
    fn zoom_is_clamped_to_the_working_range() {
        let mut controls = OrbitControls::new();
        controls.zoom(500.0);
        for _ in 0..200 {
            controls.step();
        }
        assert_relative_eq!(controls.distance(), MAX_DISTANCE, epsilon = 1e-2);

        controls.zoom(-500.0);
        for _ in 0..400 {
            controls.step();
        }
        assert_relative_eq!(controls.distance(), MIN_DISTANCE, epsilon = 1e-2);
    }

    #[test]
    fn orbit_preserves_the_radius() {
        let mut controls = OrbitControls::new();
        controls.rotate(2.0, 0.1);
        for _ in 0..300 {
            controls.step();
        }
        let mut camera = Camera::new(1.0, 1.0);
        controls.apply_to(&mut camera);
        assert_relative_eq!(
            (camera.eye - controls.target).length(),
            controls.distance(),
            epsilon = 1e-3
        );
    }
}
