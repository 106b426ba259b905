// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Headless tutorial scenes for tutgl.
//!
//! Each scene owns the per-frame transform logic of one tutorial: which
//! matrices to build from the frame time, in which order to compose them, and
//! under which uniform name to hand them to the renderer. The renderer itself
//! is a port ([`UniformSink`]); [`RecordingSink`] captures uploads for
//! headless runs and tests.
//!
//! Also hosts the run preferences and the config service used by the CLI.
#![forbid(unsafe_code)]

pub mod clock;
pub mod config;
pub mod prefs;
pub mod scenes;
pub mod uniforms;

pub use clock::{lerp_factor, loop_angle, CycleTick, ResetCycle};
pub use config::{ConfigError, ConfigService, ConfigStore, MemoryConfigStore};
pub use prefs::{RunPrefs, RUN_PREFS_KEY};
pub use scenes::{
    run_frames, FrameRecord, FrameSchedule, InstancedScene, LookAtCube, PerspectiveCube, Scene,
    SceneError, SceneKind, SceneRun, SpinAxis, SpinningScene, Viewport,
};
pub use uniforms::{RecordingSink, SinkEvent, UniformSink};
