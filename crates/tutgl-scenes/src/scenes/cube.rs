// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::f32::consts::TAU;

use tracing::debug;
use tutgl_math::{Mat4, Vec3};

use super::{Scene, SceneError, Viewport};
use crate::clock::{CycleTick, ResetCycle};
use crate::uniforms::UniformSink;

const ROTATION_PERIOD_MS: f64 = 5000.0;
const NEAR_PLANE_WIDTH: f32 = 2.0;
const NEAR_PLANE_HEIGHT: f32 = 2.0;
const Z_NEAR: f32 = 0.5;
const Z_FAR: f32 = 5.0;

/// Spin axis of the cube scenes; advances at every cycle wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinAxis {
    /// +X.
    #[default]
    X,
    /// +Y.
    Y,
    /// Normalized (1, 1, 1).
    Diagonal,
}

impl SpinAxis {
    /// X → Y → Diagonal → X.
    pub const fn next(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::Diagonal,
            Self::Diagonal => Self::X,
        }
    }

    /// Unit axis vector.
    pub fn vector(self) -> Vec3 {
        match self {
            Self::X => Vec3::UNIT_X,
            Self::Y => Vec3::UNIT_Y,
            Self::Diagonal => Vec3::new(1.0, 1.0, 1.0).normalize(),
        }
    }
}

/// Spinning cube state shared by both perspective scenes.
#[derive(Debug, Clone)]
struct CubeSpin {
    cycle: ResetCycle,
    axis: SpinAxis,
    depth: f32,
}

impl CubeSpin {
    const fn new(depth: f32) -> Self {
        Self {
            cycle: ResetCycle::new(ROTATION_PERIOD_MS),
            axis: SpinAxis::X,
            depth,
        }
    }

    /// Advances the cycle, uploads projection and model, and returns the
    /// tick so callers can drive extra state off the same wrap.
    fn upload(&mut self, time_ms: f64, sink: &mut dyn UniformSink) -> CycleTick {
        let projection =
            Mat4::perspective_size(NEAR_PLANE_WIDTH, NEAR_PLANE_HEIGHT, Z_NEAR, Z_FAR);
        sink.upload("u_projection", &projection.to_column_major());

        let tick = self.cycle.tick(time_ms);
        if tick.wrapped {
            self.axis = self.axis.next();
            debug!(axis = ?self.axis, "spin axis switched");
        }

        let mut rotation = Mat4::rotation(&self.axis.vector(), TAU * tick.fraction);
        let scale = Mat4::identity();
        let mut model = Mat4::translation(0.0, 0.0, self.depth);
        model.left_multiply(*rotation.left_multiply(scale));
        sink.upload("u_modelTransform", &model.to_column_major());
        tick
    }
}

/// Cube three units in front of the camera under a 2×2 near-plane
/// perspective projection.
///
/// Uploads `u_projection` then `u_modelTransform` every frame. The spin axis
/// advances X → Y → diagonal at each 5 s wrap.
#[derive(Debug, Clone)]
pub struct PerspectiveCube {
    spin: CubeSpin,
}

impl PerspectiveCube {
    /// Fresh scene spinning about X.
    pub const fn new() -> Self {
        Self {
            spin: CubeSpin::new(-3.0),
        }
    }

    /// Current spin axis.
    pub const fn axis(&self) -> SpinAxis {
        self.spin.axis
    }
}

impl Default for PerspectiveCube {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for PerspectiveCube {
    fn name(&self) -> &'static str {
        "perspective-cube"
    }

    fn setup(&mut self, viewport: Viewport, _sink: &mut dyn UniformSink) -> Result<(), SceneError> {
        viewport.validate()?;
        debug!(scene = self.name(), "perspective cube ready");
        Ok(())
    }

    fn draw(&mut self, time_ms: f64, sink: &mut dyn UniformSink) {
        self.spin.upload(time_ms, sink);
        sink.draw();
    }
}

/// Eye position of the look-at camera.
const EYE: Vec3 = Vec3::new(0.0, 0.0, 3.0);
/// Plane the camera target slides along.
const TARGET_Z: f32 = -1.0;
/// Initial x of the target sweep.
const PAN_START: f32 = -3.0;
/// Initial width of the target sweep.
const PAN_OFFSET: f32 = 9.0;

/// [`PerspectiveCube`] two units out, seen through a look-at camera whose
/// target slides along x.
///
/// Uploads `u_projection`, `u_modelTransform` and `u_view` every frame. The
/// target is `(start + fraction * pan, 0, -1)`; both `start` and `pan` flip
/// sign at every wrap, so the camera sweeps back and forth.
#[derive(Debug, Clone)]
pub struct LookAtCube {
    spin: CubeSpin,
    pan_start: f32,
    pan_offset: f32,
}

impl LookAtCube {
    /// Fresh scene spinning about X with the pan at its initial end.
    pub const fn new() -> Self {
        Self {
            spin: CubeSpin::new(-2.0),
            pan_start: PAN_START,
            pan_offset: PAN_OFFSET,
        }
    }

    /// Current spin axis.
    pub const fn axis(&self) -> SpinAxis {
        self.spin.axis
    }

    /// Current look-at target for the given cycle fraction.
    pub fn target(&self, fraction: f32) -> Vec3 {
        Vec3::new(self.pan_start + fraction * self.pan_offset, 0.0, TARGET_Z)
    }
}

impl Default for LookAtCube {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for LookAtCube {
    fn name(&self) -> &'static str {
        "lookat-cube"
    }

    fn setup(&mut self, viewport: Viewport, _sink: &mut dyn UniformSink) -> Result<(), SceneError> {
        viewport.validate()?;
        debug!(scene = self.name(), eye = ?EYE, "look-at cube ready");
        Ok(())
    }

    fn draw(&mut self, time_ms: f64, sink: &mut dyn UniformSink) {
        // A wrapping frame already uses the flipped pan.
        let tick = self.spin.upload(time_ms, sink);
        if tick.wrapped {
            self.pan_start = -self.pan_start;
            self.pan_offset = -self.pan_offset;
            debug!(start = self.pan_start, pan = self.pan_offset, "camera pan flipped");
        }

        let view = Mat4::look_at(&EYE, &self.target(tick.fraction), &Vec3::UNIT_Y);
        sink.upload("u_view", &view.to_column_major());
        sink.draw();
    }
}
