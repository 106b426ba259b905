// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! tutgl-math: transform math for the GL tutorials.
//!
//! Two value types cover the whole surface:
//!
//! * [`Vec3`]: three `f32` components with norm, dot/cross products and
//!   the usual arithmetic operators.
//! * [`Mat4`]: a 4×4 transform stored column-major, built from translation,
//!   scale, axis-angle rotation, perspective/orthographic projection and
//!   look-at parameters, composed with [`Mat4::left_multiply`] and flattened
//!   with [`Mat4::to_column_major`] for GPU upload.
//!
//! # Preconditions, not errors
//! No operation here returns a `Result` or panics on bad numeric input.
//! Normalizing a zero vector, rotating about a non-unit axis, or building a
//! look-at view with `eye == target` yields NaN/Inf (or a skewed matrix) that
//! propagates through later composition. Callers own those preconditions.
//!
//! Everything is `f32` to match the precision of GL uniform uploads.
#![forbid(unsafe_code)]

use std::f32::consts::TAU;

mod mat4;
mod vec3;

pub use mat4::Mat4;
pub use vec3::Vec3;

/// Tolerance used by callers comparing results of these routines.
///
/// Single-precision rounding across a handful of multiplies stays well below
/// this; it is not used to guard any computation inside the crate.
pub const EPSILON: f32 = 1e-6;

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}

/// Linear blend `x * (1 - a) + y * a`.
///
/// `a` is not clamped; values outside `[0, 1]` extrapolate.
pub fn mix(x: f32, y: f32, a: f32) -> f32 {
    x * (1.0 - a) + y * a
}
