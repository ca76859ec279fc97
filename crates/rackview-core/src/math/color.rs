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

//! Linear RGBA color used by materials and the highlight accent.

use serde::{Deserialize, Serialize};

/// An RGBA color in linear color space, components in `[0.0, 1.0]`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct LinearRgba {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl LinearRgba {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque black. Also the "no emissive" material state.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Creates a new color from all four components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color from RGB components.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates an opaque color from hue, saturation, and lightness.
    ///
    /// `hue` is in turns (`[0.0, 1.0)` wraps), `saturation` and `lightness`
    /// in `[0.0, 1.0]`. Item materials draw their hue from a restricted band
    /// so racks read as a family rather than confetti.
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(1.0);
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        if s == 0.0 {
            return Self::rgb(l, l, l);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        let hue_to_channel = |t: f32| -> f32 {
            let t = t.rem_euclid(1.0);
            if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 0.5 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            }
        };

        Self::rgb(
            hue_to_channel(h + 1.0 / 3.0),
            hue_to_channel(h),
            hue_to_channel(h - 1.0 / 3.0),
        )
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;

    #[test]
    fn hsl_grayscale_when_unsaturated() {
        let c = LinearRgba::from_hsl(0.3, 0.0, 0.5);
        assert!(approx_eq(c.r, 0.5));
        assert!(approx_eq(c.g, 0.5));
        assert!(approx_eq(c.b, 0.5));
    }

    #[test]
    fn hsl_primary_hues() {
        let red = LinearRgba::from_hsl(0.0, 1.0, 0.5);
        assert!(approx_eq(red.r, 1.0) && approx_eq(red.g, 0.0) && approx_eq(red.b, 0.0));

        let green = LinearRgba::from_hsl(1.0 / 3.0, 1.0, 0.5);
        assert!(approx_eq(green.r, 0.0) && approx_eq(green.g, 1.0) && approx_eq(green.b, 0.0));

        let blue = LinearRgba::from_hsl(2.0 / 3.0, 1.0, 0.5);
        assert!(approx_eq(blue.r, 0.0) && approx_eq(blue.g, 0.0) && approx_eq(blue.b, 1.0));
    }

    #[test]
    fn hsl_hue_wraps() {
        let a = LinearRgba::from_hsl(0.25, 0.8, 0.6);
        let b = LinearRgba::from_hsl(1.25, 0.8, 0.6);
        assert_eq!(a, b);
    }
}
