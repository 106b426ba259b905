// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use tutgl_math::{Mat4, Vec3};

fn approx_eq3(a: Vec3, b: [f32; 3]) {
    let a = a.to_array();
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() <= 1e-5, "index {i}: {a:?} vs {b:?}");
    }
}

fn approx_eq16(a: [f32; 16], b: [f32; 16]) {
    for i in 0..16 {
        assert!((a[i] - b[i]).abs() <= 1e-5, "index {i}: {a:?} vs {b:?}");
    }
}

#[test]
fn perspective_layout() {
    let p = Mat4::perspective(1.0, 1.0, 0.5, 5.0);
    assert_eq!(p.get(0, 0), 0.5);
    assert_eq!(p.get(1, 1), 0.5);
    assert_eq!(p.get(3, 2), -1.0);
    assert_eq!(p.get(3, 3), 0.0);
    let flat = p.to_column_major();
    // m43 = -1 is the last entry of the third column.
    assert_eq!(flat[11], -1.0);
    assert!((flat[10] - 5.5 / -4.5).abs() < 1e-6);
    assert!((flat[14] - 5.0 / -4.5).abs() < 1e-6);
    assert_eq!(flat[15], 0.0);
}

#[test]
fn perspective_maps_frustum_corners_to_ndc() {
    let p = Mat4::perspective(1.0, 1.0, 0.5, 5.0);
    approx_eq3(p.project_point(&Vec3::new(1.0, 1.0, -0.5)), [1.0, 1.0, -1.0]);
    approx_eq3(p.project_point(&Vec3::new(-1.0, -1.0, -0.5)), [-1.0, -1.0, -1.0]);
    approx_eq3(p.project_point(&Vec3::new(0.0, 0.0, -5.0)), [0.0, 0.0, 1.0]);
    // Far-plane corner scales with distance.
    approx_eq3(p.project_point(&Vec3::new(10.0, -10.0, -5.0)), [1.0, -1.0, 1.0]);
}

#[test]
fn perspective_size_halves_extents() {
    assert_eq!(
        Mat4::perspective_size(2.0, 2.0, 0.5, 5.0),
        Mat4::perspective(1.0, 1.0, 0.5, 5.0)
    );
    assert_eq!(
        Mat4::perspective_size(4.0, 3.0, 1.0, 10.0),
        Mat4::perspective(2.0, 1.5, 1.0, 10.0)
    );
}

#[test]
fn fov_perspective_ninety_degrees() {
    let p = Mat4::fov_perspective(90.0, 1.0, 1.0, 10.0);
    assert!((p.get(0, 0) - 1.0).abs() < 1e-6);
    assert!((p.get(1, 1) - 1.0).abs() < 1e-6);
    approx_eq16(
        p.to_column_major(),
        Mat4::perspective(1.0, 1.0, 1.0, 10.0).to_column_major(),
    );
}

#[test]
fn fov_perspective_aspect_widens_horizontal_extent() {
    let p = Mat4::fov_perspective(60.0, 2.0, 1.0, 45.0);
    // m11 = near / (top * aspect) = m22 / aspect.
    assert!((p.get(0, 0) * 2.0 - p.get(1, 1)).abs() < 1e-6);
    assert!((p.get(1, 1) - 1.0 / (30.0_f32).to_radians().tan()).abs() < 1e-5);
}

#[test]
fn ortho_layout_and_depth_mapping() {
    let o = Mat4::ortho(4.0, 2.0, 0.5, 10.0);
    assert_eq!(o.get(0, 0), 0.5);
    assert_eq!(o.get(1, 1), 1.0);
    assert_eq!(o.get(3, 3), 1.0);
    assert_eq!(o.get(3, 2), 0.0);
    approx_eq3(o.project_point(&Vec3::new(2.0, 1.0, -0.5)), [1.0, 1.0, -1.0]);
    approx_eq3(o.project_point(&Vec3::new(-2.0, -1.0, -10.0)), [-1.0, -1.0, 1.0]);
    // Parallel projection: x does not shrink with depth.
    approx_eq3(o.project_point(&Vec3::new(1.0, 0.0, -7.0)), [0.5, 0.0, 0.36842105]);
}

#[test]
fn projection_setters_overwrite_previous_content() {
    let mut m = Mat4::translation(3.0, 3.0, 3.0);
    m.set_perspective(1.0, 1.0, 0.5, 5.0);
    assert_eq!(m, Mat4::perspective(1.0, 1.0, 0.5, 5.0));
    m.set_ortho(4.0, 2.0, 0.5, 10.0);
    assert_eq!(m, Mat4::ortho(4.0, 2.0, 0.5, 10.0));
    m.set_perspective_size(2.0, 2.0, 0.5, 5.0);
    assert_eq!(m, Mat4::perspective(1.0, 1.0, 0.5, 5.0));
    m.set_fov_perspective(90.0, 1.0, 1.0, 10.0);
    assert_eq!(m, Mat4::fov_perspective(90.0, 1.0, 1.0, 10.0));
}

#[test]
fn look_at_down_negative_z_is_a_translation() {
    let v = Mat4::look_at(&Vec3::new(0.0, 0.0, 3.0), &Vec3::ZERO, &Vec3::UNIT_Y);
    approx_eq16(
        v.to_column_major(),
        Mat4::translation(0.0, 0.0, -3.0).to_column_major(),
    );
}

#[test]
fn look_at_maps_eye_to_origin_and_target_onto_negative_z() {
    let eye = Vec3::new(2.0, 3.0, 4.0);
    let target = Vec3::new(-1.0, 0.5, -2.0);
    let v = Mat4::look_at(&eye, &target, &Vec3::UNIT_Y);
    approx_eq3(v.transform_point(&eye), [0.0, 0.0, 0.0]);
    let dist = eye.distance(&target);
    approx_eq3(v.transform_point(&target), [0.0, 0.0, -dist]);
}

#[test]
fn look_at_orthogonalizes_up_and_ignores_its_length() {
    let eye = Vec3::new(0.0, 0.0, 3.0);
    let target = Vec3::new(-3.0, 0.0, -1.0);
    let tilted = Mat4::look_at(&eye, &target, &Vec3::new(0.0, 5.0, 1.0));
    // Upper 3x3 is orthonormal.
    let rtr = tilted.transpose() * tilted;
    for r in 0..3 {
        for c in 0..3 {
            let want = if r == c { 1.0 } else { 0.0 };
            assert!((rtr.get(r, c) - want).abs() < 1e-5, "({r},{c})");
        }
    }
    let long_up = Mat4::look_at(&eye, &target, &Vec3::new(0.0, 50.0, 10.0));
    approx_eq16(tilted.to_column_major(), long_up.to_column_major());
}

#[test]
fn look_at_right_handed_basis() {
    // Looking down +X with +Y up: right is +Z (forward × up).
    let v = Mat4::look_at(&Vec3::ZERO, &Vec3::UNIT_X, &Vec3::UNIT_Y);
    approx_eq3(v.transform_direction(&Vec3::UNIT_Z), [1.0, 0.0, 0.0]);
    approx_eq3(v.transform_direction(&Vec3::UNIT_Y), [0.0, 1.0, 0.0]);
    approx_eq3(v.transform_direction(&Vec3::UNIT_X), [0.0, 0.0, -1.0]);
}

#[test]
fn look_at_degenerate_inputs_produce_nan() {
    let same = Vec3::new(1.0, 2.0, 3.0);
    let v = Mat4::look_at(&same, &same, &Vec3::UNIT_Y);
    assert!(v.to_column_major().iter().any(|c| c.is_nan()));

    let parallel = Mat4::look_at(&Vec3::ZERO, &Vec3::UNIT_Y, &Vec3::UNIT_Y);
    assert!(parallel.to_column_major().iter().any(|c| c.is_nan()));
}

#[test]
fn view_projection_chain_places_target_at_screen_centre() {
    let eye = Vec3::new(0.0, 0.0, 3.0);
    let target = Vec3::new(1.5, 0.0, -1.0);
    let mut vp = Mat4::perspective_size(2.0, 2.0, 0.5, 5.0);
    vp.left_multiply(Mat4::look_at(&eye, &target, &Vec3::UNIT_Y));
    let ndc = vp.project_point(&target);
    assert!(ndc.x().abs() < 1e-5 && ndc.y().abs() < 1e-5, "{ndc:?}");
    assert!(ndc.z() > -1.0 && ndc.z() < 1.0);
}
