// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::f32::consts::TAU;

use tracing::debug;
use tutgl_math::{Mat4, Vec3};

use super::{Scene, SceneError, Viewport};
use crate::clock::ResetCycle;
use crate::uniforms::UniformSink;

/// Milliseconds per full turn.
const ROTATION_PERIOD_MS: f64 = 5000.0;

/// Single mesh spinning about a fixed axis; uploads `u_rotation` each frame.
///
/// The angle is `2π * fraction` of a 5 s [`ResetCycle`], so the mesh turns
/// backwards through one revolution per period.
#[derive(Debug, Clone)]
pub struct SpinningScene {
    name: &'static str,
    axis: Vec3,
    cycle: ResetCycle,
}

impl SpinningScene {
    /// Triangle about +Y.
    pub fn triangle() -> Self {
        Self {
            name: "rotating-triangle",
            axis: Vec3::UNIT_Y,
            cycle: ResetCycle::new(ROTATION_PERIOD_MS),
        }
    }

    /// Cube about the normalized (1, 1, 1) diagonal.
    pub fn cube() -> Self {
        Self {
            name: "rotating-cube",
            axis: Vec3::new(1.0, 1.0, 1.0).normalize(),
            cycle: ResetCycle::new(ROTATION_PERIOD_MS),
        }
    }

    /// Spin axis.
    pub fn axis(&self) -> Vec3 {
        self.axis
    }
}

impl Scene for SpinningScene {
    fn name(&self) -> &'static str {
        self.name
    }

    fn setup(&mut self, viewport: Viewport, _sink: &mut dyn UniformSink) -> Result<(), SceneError> {
        viewport.validate()?;
        debug!(scene = self.name, axis = ?self.axis, "spinning scene ready");
        Ok(())
    }

    fn draw(&mut self, time_ms: f64, sink: &mut dyn UniformSink) {
        let tick = self.cycle.tick(time_ms);
        let rotation = Mat4::rotation(&self.axis, TAU * tick.fraction);
        sink.upload("u_rotation", &rotation.to_column_major());
        sink.draw();
    }
}
