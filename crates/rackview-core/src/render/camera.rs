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

//! The perspective camera and its screen-to-world unprojection.

use crate::math::{Mat4, Ray, Vec2, Vec3, Vec4, EPSILON};

/// A right-handed perspective camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Vertical field of view, in radians.
    pub fov_y: f32,
    /// Viewport width divided by height.
    pub aspect: f32,
    /// Near clipping plane distance.
    pub z_near: f32,
    /// Far clipping plane distance.
    pub z_far: f32,
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
}

/// The per-frame camera matrices handed to the surface at present time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewInfo {
    /// World-to-view matrix.
    pub view_matrix: Mat4,
    /// View-to-clip matrix.
    pub projection_matrix: Mat4,
    /// Camera position in world space.
    pub eye: Vec3,
}

impl Camera {
    /// Creates a camera with the view's default frustum.
    pub fn new(fov_y: f32, aspect: f32) -> Self {
        Self {
            fov_y,
            aspect,
            z_near: 0.1,
            z_far: 1000.0,
            eye: Vec3::new(0.0, 12.0, 24.0),
            target: Vec3::ZERO,
        }
    }

    /// Recomputes the aspect ratio. The caller guarantees `aspect` is finite
    /// and positive (degenerate viewport sizes are filtered upstream).
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// The world-to-view matrix. Falls back to identity for a degenerate
    /// eye/target pair rather than producing NaNs.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y).unwrap_or(Mat4::IDENTITY)
    }

    /// The view-to-clip matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_zo(self.fov_y, self.aspect, self.z_near, self.z_far)
    }

    /// Bundles the current matrices for presentation.
    pub fn view_info(&self) -> ViewInfo {
        ViewInfo {
            view_matrix: self.view_matrix(),
            projection_matrix: self.projection_matrix(),
            eye: self.eye,
        }
    }

    /// Casts a world-space ray through a normalized device coordinate.
    ///
    /// `ndc` is in `[-1, 1]` on both axes, Y up. The ray origin sits on the
    /// near plane, the direction points toward the far plane. Returns `None`
    /// only if the combined view-projection matrix is not invertible.
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Option<Ray> {
        let view_proj = self.projection_matrix() * self.view_matrix();
        let inverse = view_proj.inverse()?;

        // Zero-to-one depth: 0.0 is the near plane, 1.0 the far plane.
        let near = inverse * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let far = inverse * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        if near.w.abs() < EPSILON || far.w.abs() < EPSILON {
            return None;
        }

        let near = near.truncate() / near.w;
        let far = far.truncate() / far.w;
        Some(Ray::new(near, far - near))
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_camera() -> Camera {
        let mut camera = Camera::new(std::f32::consts::FRAC_PI_3, 16.0 / 9.0);
        camera.eye = Vec3::new(0.0, 0.0, 10.0);
        camera.target = Vec3::ZERO;
        camera
    }

    #[test]
    fn center_ray_points_at_target() {
        let camera = test_camera();
        let ray = camera.ray_through_ndc(Vec2::ZERO).unwrap();

        // The ray through NDC (0,0) runs straight down the view axis.
        assert_relative_eq!(ray.direction.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(ray.direction.y, 0.0, epsilon = 1e-4);
        assert_relative_eq!(ray.direction.z, -1.0, epsilon = 1e-4);
        // And its origin sits on the near plane in front of the eye.
        assert_relative_eq!(ray.origin.z, 10.0 - camera.z_near, epsilon = 1e-3);
    }

    #[test]
    fn off_center_rays_diverge() {
        let camera = test_camera();
        let left = camera.ray_through_ndc(Vec2::new(-1.0, 0.0)).unwrap();
        let right = camera.ray_through_ndc(Vec2::new(1.0, 0.0)).unwrap();
        assert!(left.direction.x < 0.0);
        assert!(right.direction.x > 0.0);
    }

    #[test]
    fn degenerate_view_falls_back_to_identity() {
        let mut camera = test_camera();
        camera.target = camera.eye;
        assert_eq!(camera.view_matrix(), Mat4::IDENTITY);
    }
}
