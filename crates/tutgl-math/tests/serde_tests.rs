// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![cfg(feature = "serde")]
#![allow(missing_docs)]
use tutgl_math::{Mat4, Vec3};

#[test]
fn mat4_serializes_as_flat_column_major_array() {
    let m = Mat4::translation(1.0, 2.0, 3.0);
    let json = serde_json::to_string(&m).expect("serialize");
    assert_eq!(
        json,
        "[1.0,0.0,0.0,0.0,0.0,1.0,0.0,0.0,0.0,0.0,1.0,0.0,1.0,2.0,3.0,1.0]"
    );
    let back: Mat4 = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, m);
}

#[test]
fn vec3_serializes_as_triple() {
    let v = Vec3::new(0.5, -1.0, 2.0);
    assert_eq!(serde_json::to_string(&v).expect("serialize"), "[0.5,-1.0,2.0]");
    let short: Result<Vec3, _> = serde_json::from_str("[1.0,2.0]");
    assert!(short.is_err());
}
