// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::debug;
use tutgl_math::{mix, Mat4, Vec3};

use super::{Scene, SceneError, Viewport};
use crate::clock::{lerp_factor, loop_angle};
use crate::uniforms::UniformSink;

const FOV_DEGREES: f32 = 45.0;
const Z_NEAR: f32 = 1.0;
const Z_FAR: f32 = 45.0;

/// Builds one instance's model-to-camera matrix from elapsed seconds.
pub type InstanceTransform = fn(f32) -> Mat4;

/// Several copies of one mesh, each placed by its own [`InstanceTransform`].
///
/// Setup uploads `u_cameraToClipMatrix` (45° vertical FOV, near 1, far 45,
/// viewport aspect). Each frame uploads `u_modelToCameraMatrix` and draws
/// once per instance, in table order.
#[derive(Debug, Clone)]
pub struct InstancedScene {
    name: &'static str,
    instances: &'static [InstanceTransform],
}

impl InstancedScene {
    /// Null, X, Y, Z and diagonal-axis rotations.
    pub fn rotations() -> Self {
        Self {
            name: "rotations",
            instances: &ROTATION_INSTANCES,
        }
    }

    /// Stationary, oval and bottom-circle offsets.
    pub fn translation() -> Self {
        Self {
            name: "translation",
            instances: &TRANSLATION_INSTANCES,
        }
    }

    /// Null, static and dynamic scales.
    pub fn scale() -> Self {
        Self {
            name: "scale",
            instances: &SCALE_INSTANCES,
        }
    }

    /// Number of instances drawn per frame.
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Model-to-camera matrices for every instance at `elapsed_s`.
    pub fn instance_matrices(&self, elapsed_s: f32) -> Vec<Mat4> {
        self.instances.iter().map(|f| f(elapsed_s)).collect()
    }
}

impl Scene for InstancedScene {
    fn name(&self) -> &'static str {
        self.name
    }

    fn setup(&mut self, viewport: Viewport, sink: &mut dyn UniformSink) -> Result<(), SceneError> {
        viewport.validate()?;
        let camera_to_clip = Mat4::fov_perspective(FOV_DEGREES, viewport.aspect(), Z_NEAR, Z_FAR);
        sink.upload("u_cameraToClipMatrix", &camera_to_clip.to_column_major());
        debug!(scene = self.name, %viewport, instances = self.instances.len(), "instanced scene ready");
        Ok(())
    }

    fn draw(&mut self, time_ms: f64, sink: &mut dyn UniformSink) {
        #[allow(clippy::cast_possible_truncation)]
        let elapsed_s = (time_ms / 1000.0) as f32;
        for transform in self.instances {
            let model_to_camera = transform(elapsed_s);
            sink.upload("u_modelToCameraMatrix", &model_to_camera.to_column_major());
            sink.draw();
        }
    }
}

fn rotated(axis: &Vec3, angle: f32, x: f32, y: f32, z: f32) -> Mat4 {
    let mut m = Mat4::rotation(axis, angle);
    m.set_translation(x, y, z);
    m
}

static ROTATION_INSTANCES: [InstanceTransform; 5] = [
    |_| Mat4::translation(0.0, 0.0, -25.0),
    |t| rotated(&Vec3::UNIT_X, loop_angle(t, 3.0), -5.0, -5.0, -25.0),
    |t| rotated(&Vec3::UNIT_Y, loop_angle(t, 2.0), -5.0, 5.0, -25.0),
    |t| rotated(&Vec3::UNIT_Z, loop_angle(t, 2.0), 5.0, 5.0, -25.0),
    |t| {
        let axis = Vec3::new(1.0, 1.0, 1.0).normalize();
        rotated(&axis, loop_angle(t, 2.0), 5.0, -5.0, -25.0)
    },
];

static TRANSLATION_INSTANCES: [InstanceTransform; 3] = [
    |_| Mat4::translation(0.0, 0.0, -20.0),
    |t| {
        let (s, c) = loop_angle(t, 3.0).sin_cos();
        Mat4::translation(c * 4.0, s * 6.0, -20.0)
    },
    |t| {
        let (s, c) = loop_angle(t, 12.0).sin_cos();
        Mat4::translation(c * 5.0, -3.5, s * 5.0 - 20.0)
    },
];

fn scaled(sx: f32, sy: f32, sz: f32, x: f32, y: f32) -> Mat4 {
    let mut m = Mat4::scale_xyz(sx, sy, sz);
    m.set_translation(x, y, -45.0);
    m
}

static SCALE_INSTANCES: [InstanceTransform; 5] = [
    |_| Mat4::translation(0.0, 0.0, -45.0),
    |_| scaled(4.0, 4.0, 4.0, -10.0, -10.0),
    |_| scaled(0.5, 1.0, 10.0, -10.0, 10.0),
    |t| {
        let s = mix(1.0, 4.0, lerp_factor(t, 3.0));
        scaled(s, s, s, 10.0, 10.0)
    },
    |t| {
        let sx = mix(1.0, 0.5, lerp_factor(t, 3.0));
        let sz = mix(1.0, 0.5, lerp_factor(t, 5.0));
        scaled(sx, 1.0, sz, 10.0, -10.0)
    },
];
