// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scene trait, scene registry and the headless frame runner.

mod cube;
mod instanced;
mod spinning;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::uniforms::{RecordingSink, SinkEvent, UniformSink};

pub use cube::{LookAtCube, PerspectiveCube, SpinAxis};
pub use instanced::{InstanceTransform, InstancedScene};
pub use spinning::SpinningScene;

/// Errors raised while selecting, configuring or running a scene.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    /// No scene is registered under the given name.
    #[error("unknown scene '{0}' (run `tutgl scenes` for the list)")]
    UnknownScene(String),
    /// Viewport dimensions are zero or unparsable.
    #[error("invalid viewport '{0}': expected WIDTHxHEIGHT with both > 0")]
    InvalidViewport(String),
    /// Frame rate is not a positive finite number.
    #[error("invalid frame rate {0}: must be positive and finite")]
    InvalidFrameRate(f64),
}

/// Drawing surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Validated constructor; both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> Result<Self, SceneError> {
        let viewport = Self { width, height };
        viewport.validate()?;
        Ok(viewport)
    }

    /// Checks that both dimensions are non-zero.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::InvalidViewport(self.to_string()));
        }
        Ok(())
    }

    /// Width divided by height.
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Viewport {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SceneError::InvalidViewport(s.to_owned());
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(invalid)?;
        let width = w.trim().parse().map_err(|_| invalid())?;
        let height = h.trim().parse().map_err(|_| invalid())?;
        Self::new(width, height)
    }
}

/// A tutorial's per-frame transform logic.
pub trait Scene {
    /// Registry name (kebab-case).
    fn name(&self) -> &'static str;

    /// Upload uniforms that stay fixed for the whole run.
    ///
    /// Called once before the first `draw` and again whenever the viewport
    /// changes.
    fn setup(&mut self, viewport: Viewport, sink: &mut dyn UniformSink) -> Result<(), SceneError>;

    /// Upload this frame's uniforms and issue its draw calls.
    ///
    /// `time_ms` is the absolute frame timestamp in milliseconds, as handed
    /// to an animation-frame callback.
    fn draw(&mut self, time_ms: f64, sink: &mut dyn UniformSink);
}

/// Every scene known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    /// Triangle spinning about +Y.
    RotatingTriangle,
    /// Cube spinning about the (1, 1, 1) diagonal.
    RotatingCube,
    /// Cube under a perspective projection, cycling its spin axis.
    PerspectiveCube,
    /// Perspective cube watched by a panning look-at camera.
    LookAtCube,
    /// Five instances, one per rotation style.
    Rotations,
    /// Three instances moving along fixed paths.
    Translation,
    /// Five instances with static and animated scales.
    Scale,
}

impl SceneKind {
    /// Registry order.
    pub const ALL: [Self; 7] = [
        Self::RotatingTriangle,
        Self::RotatingCube,
        Self::PerspectiveCube,
        Self::LookAtCube,
        Self::Rotations,
        Self::Translation,
        Self::Scale,
    ];

    /// Registry name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RotatingTriangle => "rotating-triangle",
            Self::RotatingCube => "rotating-cube",
            Self::PerspectiveCube => "perspective-cube",
            Self::LookAtCube => "lookat-cube",
            Self::Rotations => "rotations",
            Self::Translation => "translation",
            Self::Scale => "scale",
        }
    }

    /// One-line description for listings.
    pub const fn summary(self) -> &'static str {
        match self {
            Self::RotatingTriangle => "triangle spinning about +Y on a 5 s reset cycle",
            Self::RotatingCube => "cube spinning about the (1,1,1) diagonal",
            Self::PerspectiveCube => "perspective cube cycling X, Y and diagonal spin axes",
            Self::LookAtCube => "perspective cube with a panning look-at camera",
            Self::Rotations => "null, X, Y, Z and axis-angle rotation instances",
            Self::Translation => "stationary, oval and bottom-circle offsets",
            Self::Scale => "static and animated uniform/non-uniform scales",
        }
    }

    /// Fresh scene instance with its clocks unarmed.
    pub fn build(self) -> Box<dyn Scene> {
        match self {
            Self::RotatingTriangle => Box::new(SpinningScene::triangle()),
            Self::RotatingCube => Box::new(SpinningScene::cube()),
            Self::PerspectiveCube => Box::new(PerspectiveCube::new()),
            Self::LookAtCube => Box::new(LookAtCube::new()),
            Self::Rotations => Box::new(InstancedScene::rotations()),
            Self::Translation => Box::new(InstancedScene::translation()),
            Self::Scale => Box::new(InstancedScene::scale()),
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneKind {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| SceneError::UnknownScene(s.to_owned()))
    }
}

/// Frame timing for a headless run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSchedule {
    /// Number of frames to draw.
    pub frames: u32,
    /// Simulated frames per second.
    pub fps: f64,
    /// Timestamp of the first frame in milliseconds.
    pub start_ms: f64,
}

impl FrameSchedule {
    /// Timestamp of frame `index` in milliseconds.
    pub fn time_of(&self, index: u32) -> f64 {
        self.start_ms + f64::from(index) * 1000.0 / self.fps
    }
}

/// Uploads and draws captured for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Zero-based frame index.
    pub index: u32,
    /// Frame timestamp in milliseconds.
    pub time_ms: f64,
    /// Sink calls made while drawing the frame.
    pub events: Vec<SinkEvent>,
}

/// Captured output of a headless run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneRun {
    /// Scene name.
    pub scene: String,
    /// Viewport used for setup.
    pub viewport: Viewport,
    /// Sink calls made during setup.
    pub setup: Vec<SinkEvent>,
    /// Per-frame captures.
    pub frames: Vec<FrameRecord>,
}

/// Runs `kind` headlessly for `schedule.frames` frames and records every
/// upload and draw.
pub fn run_frames(
    kind: SceneKind,
    viewport: Viewport,
    schedule: FrameSchedule,
) -> Result<SceneRun, SceneError> {
    if !(schedule.fps.is_finite() && schedule.fps > 0.0) {
        return Err(SceneError::InvalidFrameRate(schedule.fps));
    }
    let mut scene = kind.build();
    let mut sink = RecordingSink::new();
    debug!(scene = kind.name(), %viewport, frames = schedule.frames, "running scene");

    scene.setup(viewport, &mut sink)?;
    let setup = sink.take();

    let frames = (0..schedule.frames)
        .map(|index| {
            let time_ms = schedule.time_of(index);
            scene.draw(time_ms, &mut sink);
            FrameRecord {
                index,
                time_ms,
                events: sink.take(),
            }
        })
        .collect();

    Ok(SceneRun {
        scene: kind.name().to_owned(),
        viewport,
        setup,
        frames,
    })
}
