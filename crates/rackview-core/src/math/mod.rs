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

//! Mathematics primitives for the 3D warehouse view.
//!
//! Vectors, a column-major 4x4 matrix, axis-aligned bounding boxes and rays.
//! All angular functions operate in **radians**.

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

// Re-export the standard constants callers actually reach for.
pub use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

pub mod color;
pub mod geometry;
pub mod matrix;
pub mod vector;

pub use self::color::LinearRgba;
pub use self::geometry::{Aabb, Ray};
pub use self::matrix::Mat4;
pub use self::vector::{Vec2, Vec3, Vec4};

/// The physical size of a drawable surface or viewport, in pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Extent2D {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Extent2D {
    /// Creates a new extent.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either dimension is zero.
    ///
    /// A detached or collapsed host container reports an empty extent; such
    /// sizes must never reach the camera's aspect-ratio computation.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width divided by height, or `None` for an empty extent.
    #[inline]
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.is_empty() {
            None
        } else {
            Some(self.width as f32 / self.height as f32)
        }
    }
}

/// Performs an approximate equality comparison between two floats with a custom tolerance.
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Performs an approximate equality comparison using the module's default [`EPSILON`].
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_emptiness() {
        assert!(Extent2D::new(0, 600).is_empty());
        assert!(Extent2D::new(800, 0).is_empty());
        assert!(!Extent2D::new(800, 600).is_empty());
    }

    #[test]
    fn extent_aspect_ratio() {
        assert_eq!(Extent2D::new(800, 600).aspect_ratio(), Some(800.0 / 600.0));
        assert_eq!(Extent2D::new(0, 600).aspect_ratio(), None);
    }

    #[test]
    fn approx_helpers() {
        assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
        assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
        assert!(approx_eq_eps(0.001, 0.002, 1e-2));
    }
}
