// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixture-driven validation of the vector and matrix constructors.
//!
//! Expected values were computed in double precision and rounded to seven
//! decimals; comparisons use a mixed absolute/relative tolerance.

#![allow(missing_docs)]
use once_cell::sync::Lazy;
use serde::Deserialize;

use tutgl_math::{Mat4, Vec3};

static RAW_FIXTURES: &str = include_str!("fixtures/math-fixtures.json");

static FIXTURES: Lazy<MathFixtures> = Lazy::new(|| {
    let fixtures: MathFixtures =
        serde_json::from_str(RAW_FIXTURES).expect("failed to parse math fixtures");
    fixtures.validate();
    fixtures
});

#[derive(Debug, Deserialize)]
struct MathFixtures {
    #[serde(default)]
    tolerance: Tolerance,
    vec3: Vec3Fixtures,
    mat4: Mat4Fixtures,
}

impl MathFixtures {
    fn validate(&self) {
        fn ensure<T>(name: &str, slice: &[T]) {
            assert!(!slice.is_empty(), "math fixtures set '{name}' must not be empty");
        }

        ensure("vec3.cross", &self.vec3.cross);
        ensure("vec3.dot", &self.vec3.dot);
        ensure("vec3.length", &self.vec3.length);
        ensure("vec3.normalize", &self.vec3.normalize);
        ensure("mat4.rotation", &self.mat4.rotation);
        ensure("mat4.perspective", &self.mat4.perspective);
        ensure("mat4.fov_perspective", &self.mat4.fov_perspective);
        ensure("mat4.ortho", &self.mat4.ortho);
        ensure("mat4.look_at", &self.mat4.look_at);
        ensure("mat4.multiply", &self.mat4.multiply);
    }
}

#[derive(Debug, Clone, Deserialize)]
struct Tolerance {
    #[serde(default = "Tolerance::default_absolute")]
    absolute: f32,
    #[serde(default = "Tolerance::default_relative")]
    relative: f32,
}

impl Tolerance {
    const fn default_absolute() -> f32 {
        1e-5
    }

    const fn default_relative() -> f32 {
        1e-5
    }

    fn check(&self, context: &str, actual: f32, expected: f32) {
        let diff = (actual - expected).abs();
        let scale = actual.abs().max(expected.abs());
        let tol = self.absolute.max(self.relative * scale);
        assert!(
            diff <= tol,
            "{context}: expected {expected}, got {actual} (diff {diff}, tol {tol})"
        );
    }

    fn check_slice(&self, context: &str, actual: &[f32], expected: &[f32]) {
        assert_eq!(actual.len(), expected.len(), "{context}: length mismatch");
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            self.check(&format!("{context}[{i}]"), *a, *e);
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: Self::default_absolute(),
            relative: Self::default_relative(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Vec3Fixtures {
    cross: Vec<BinaryVecFixture>,
    dot: Vec<DotFixture>,
    length: Vec<LengthFixture>,
    normalize: Vec<UnaryVecFixture>,
}

#[derive(Debug, Deserialize)]
struct BinaryVecFixture {
    a: [f32; 3],
    b: [f32; 3],
    expected: [f32; 3],
}

#[derive(Debug, Deserialize)]
struct DotFixture {
    a: [f32; 3],
    b: [f32; 3],
    expected: f32,
}

#[derive(Debug, Deserialize)]
struct LengthFixture {
    v: [f32; 3],
    expected: f32,
}

#[derive(Debug, Deserialize)]
struct UnaryVecFixture {
    v: [f32; 3],
    expected: [f32; 3],
}

#[derive(Debug, Deserialize)]
struct Mat4Fixtures {
    rotation: Vec<RotationFixture>,
    perspective: Vec<PerspectiveFixture>,
    fov_perspective: Vec<FovFixture>,
    ortho: Vec<OrthoFixture>,
    look_at: Vec<LookAtFixture>,
    multiply: Vec<MultiplyFixture>,
}

#[derive(Debug, Deserialize)]
struct RotationFixture {
    axis: [f32; 3],
    angle: f32,
    expected: [f32; 16],
}

#[derive(Debug, Deserialize)]
struct PerspectiveFixture {
    right: f32,
    top: f32,
    near: f32,
    far: f32,
    expected: [f32; 16],
}

#[derive(Debug, Deserialize)]
struct FovFixture {
    fov_degrees: f32,
    aspect: f32,
    near: f32,
    far: f32,
    expected: [f32; 16],
}

#[derive(Debug, Deserialize)]
struct OrthoFixture {
    width: f32,
    height: f32,
    near: f32,
    far: f32,
    expected: [f32; 16],
}

#[derive(Debug, Deserialize)]
struct LookAtFixture {
    eye: [f32; 3],
    target: [f32; 3],
    up: [f32; 3],
    expected: [f32; 16],
}

#[derive(Debug, Deserialize)]
struct MultiplyFixture {
    a: [f32; 16],
    b: [f32; 16],
    expected: [f32; 16],
}

#[test]
fn vec3_fixtures_match() {
    let fx = &*FIXTURES;
    let tol = &fx.tolerance;
    for (i, case) in fx.vec3.cross.iter().enumerate() {
        let got = Vec3::from(case.a).cross(&Vec3::from(case.b));
        tol.check_slice(&format!("cross#{i}"), &got.to_array(), &case.expected);
    }
    for (i, case) in fx.vec3.dot.iter().enumerate() {
        let got = Vec3::from(case.a).dot(&Vec3::from(case.b));
        tol.check(&format!("dot#{i}"), got, case.expected);
    }
    for (i, case) in fx.vec3.length.iter().enumerate() {
        tol.check(&format!("length#{i}"), Vec3::from(case.v).length(), case.expected);
    }
    for (i, case) in fx.vec3.normalize.iter().enumerate() {
        let got = Vec3::from(case.v).normalize();
        tol.check_slice(&format!("normalize#{i}"), &got.to_array(), &case.expected);
    }
}

#[test]
fn rotation_fixtures_match() {
    let fx = &*FIXTURES;
    for (i, case) in fx.mat4.rotation.iter().enumerate() {
        let got = Mat4::rotation(&Vec3::from(case.axis), case.angle);
        fx.tolerance.check_slice(
            &format!("rotation#{i}"),
            &got.to_column_major(),
            &case.expected,
        );
    }
}

#[test]
fn projection_fixtures_match() {
    let fx = &*FIXTURES;
    let tol = &fx.tolerance;
    for (i, case) in fx.mat4.perspective.iter().enumerate() {
        let got = Mat4::perspective(case.right, case.top, case.near, case.far);
        tol.check_slice(&format!("perspective#{i}"), &got.to_column_major(), &case.expected);
    }
    for (i, case) in fx.mat4.fov_perspective.iter().enumerate() {
        let got = Mat4::fov_perspective(case.fov_degrees, case.aspect, case.near, case.far);
        tol.check_slice(&format!("fov#{i}"), &got.to_column_major(), &case.expected);
    }
    for (i, case) in fx.mat4.ortho.iter().enumerate() {
        let got = Mat4::ortho(case.width, case.height, case.near, case.far);
        tol.check_slice(&format!("ortho#{i}"), &got.to_column_major(), &case.expected);
    }
}

#[test]
fn look_at_fixtures_match() {
    let fx = &*FIXTURES;
    for (i, case) in fx.mat4.look_at.iter().enumerate() {
        let got = Mat4::look_at(
            &Vec3::from(case.eye),
            &Vec3::from(case.target),
            &Vec3::from(case.up),
        );
        fx.tolerance.check_slice(
            &format!("look_at#{i}"),
            &got.to_column_major(),
            &case.expected,
        );
    }
}

#[test]
fn multiply_fixtures_match() {
    let fx = &*FIXTURES;
    for (i, case) in fx.mat4.multiply.iter().enumerate() {
        let mut got = Mat4::from(case.a);
        got.left_multiply(Mat4::from(case.b));
        fx.tolerance.check_slice(
            &format!("multiply#{i}"),
            &got.to_column_major(),
            &case.expected,
        );
    }
}
