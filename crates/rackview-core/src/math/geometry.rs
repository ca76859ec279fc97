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

//! Geometric primitives for spatial queries: bounding boxes and rays.
//!
//! Ray/box intersection is the basis of the pick controller; the returned
//! ray parameter is the exact tie-breaker between overlapping meshes.

use super::vector::Vec3;
use super::EPSILON;

/// Represents an Axis-Aligned Bounding Box (AABB).
///
/// Defined by its minimum and maximum corner points, axis-aligned in world
/// space. All scene meshes carry one for picking.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Aabb {
    /// The corner of the box with the smallest coordinates on all axes.
    pub min: Vec3,
    /// The corner of the box with the largest coordinates on all axes.
    pub max: Vec3,
}

impl Aabb {
    /// Creates a new `Aabb` from two corner points.
    ///
    /// The `min` field always receives the component-wise minimum regardless
    /// of argument order.
    #[inline]
    pub fn from_min_max(a: Vec3, b: Vec3) -> Self {
        Self {
            min: Vec3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Vec3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Creates a new `Aabb` from a center point and its half-extents.
    #[inline]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let he = Vec3::new(half_extents.x.abs(), half_extents.y.abs(), half_extents.z.abs());
        Self {
            min: center - he,
            max: center + he,
        }
    }

    /// Calculates the center point of the `Aabb`.
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Calculates the half-extents (half the size on each axis) of the `Aabb`.
    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Returns a copy of this box shifted by `offset`.
    #[inline]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Checks if a point is contained within or on the boundary of the `Aabb`.
    #[inline]
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

/// A half-line in world space, defined by an origin and a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// The starting point of the ray.
    pub origin: Vec3,
    /// The (normalized) direction of the ray.
    pub direction: Vec3,
}

impl Ray {
    /// Creates a new ray. The direction is normalized.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Returns the point at parameter `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Intersects the ray against an `Aabb` using the slab method.
    ///
    /// Returns the smallest non-negative ray parameter at which the ray
    /// enters the box, or `None` if the box is missed entirely or lies
    /// behind the origin. An origin inside the box yields `Some(0.0)`.
    pub fn intersect_aabb(&self, aabb: &Aabb) -> Option<f32> {
        let origin = [self.origin.x, self.origin.y, self.origin.z];
        let dir = [self.direction.x, self.direction.y, self.direction.z];
        let min = [aabb.min.x, aabb.min.y, aabb.min.z];
        let max = [aabb.max.x, aabb.max.y, aabb.max.z];

        let mut t_min = 0.0_f32;
        let mut t_max = f32::INFINITY;

        for axis in 0..3 {
            if dir[axis].abs() < EPSILON {
                // Ray parallel to this slab; miss unless the origin lies inside it.
                if origin[axis] < min[axis] || origin[axis] > max[axis] {
                    return None;
                }
            } else {
                let inv = 1.0 / dir[axis];
                let mut t0 = (min[axis] - origin[axis]) * inv;
                let mut t1 = (max[axis] - origin[axis]) * inv;
                if t0 > t1 {
                    std::mem::swap(&mut t0, &mut t1);
                }
                t_min = t_min.max(t0);
                t_max = t_max.min(t1);
                if t_min > t_max {
                    return None;
                }
            }
        }

        Some(t_min)
    }
}

// --- Tests ---
