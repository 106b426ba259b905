// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tutgl_scenes::Viewport;

/// Run the tutorial transform scenes headlessly and inspect their matrices.
#[derive(Parser, Debug)]
#[command(name = "tutgl", author, version, about)]
pub struct Cli {
    /// Skip loading and saving run preferences.
    #[arg(long, global = true)]
    pub no_config: bool,
    /// Config directory (defaults to the platform config dir).
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
    /// Persist the effective run preferences after the command succeeds.
    #[arg(long, global = true)]
    pub save_prefs: bool,
    #[command(subcommand)]
    pub command: Command,
}

/// Output encoding.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Human-readable table.
    #[default]
    Table,
    /// JSON on stdout.
    Json,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the available scenes.
    Scenes {
        /// Output format.
        #[arg(long, value_enum, default_value_t)]
        format: Format,
    },
    /// Run a scene for a number of frames and print every upload and draw.
    Frames {
        /// Scene name (defaults to the saved preference).
        scene: Option<String>,
        /// Number of frames to run.
        #[arg(long, default_value_t = 3)]
        frames: u32,
        /// Simulated frame rate (defaults to the saved preference).
        #[arg(long)]
        fps: Option<f64>,
        /// Timestamp of the first frame in milliseconds.
        #[arg(long, default_value_t = 0.0)]
        start_ms: f64,
        /// Viewport as WIDTHxHEIGHT (defaults to the saved preference).
        #[arg(long)]
        viewport: Option<Viewport>,
        /// Output format.
        #[arg(long, value_enum, default_value_t)]
        format: Format,
    },
    /// Build a single matrix and print it.
    Matrix {
        #[command(subcommand)]
        kind: MatrixKind,
        /// Output format.
        #[arg(long, value_enum, default_value_t, global = true)]
        format: Format,
    },
}

/// Matrix constructors reachable from the CLI.
#[derive(Subcommand, Debug)]
pub enum MatrixKind {
    /// Translation by (x, y, z).
    #[command(allow_negative_numbers = true)]
    Translation {
        /// X offset.
        x: f32,
        /// Y offset.
        y: f32,
        /// Z offset.
        z: f32,
    },
    /// Uniform scale (one factor) or per-axis scale (three factors).
    #[command(allow_negative_numbers = true)]
    Scale {
        /// One or three factors.
        #[arg(num_args = 1..=3, required = true)]
        factors: Vec<f32>,
    },
    /// Rotation about an axis; the axis is used as given.
    #[command(allow_negative_numbers = true)]
    Rotation {
        /// Axis X.
        ax: f32,
        /// Axis Y.
        ay: f32,
        /// Axis Z.
        az: f32,
        /// Angle (radians unless --degrees).
        angle: f32,
        /// Interpret the angle in degrees.
        #[arg(long)]
        degrees: bool,
    },
    /// Symmetric perspective from the near-plane half extents.
    #[command(allow_negative_numbers = true)]
    Perspective {
        /// Right extent (full width with --size).
        right: f32,
        /// Top extent (full height with --size).
        top: f32,
        /// Near plane distance.
        near: f32,
        /// Far plane distance.
        far: f32,
        /// Treat the first two values as near-plane width and height.
        #[arg(long)]
        size: bool,
    },
    /// Perspective from a vertical field of view in degrees.
    #[command(allow_negative_numbers = true)]
    Fov {
        /// Vertical field of view in degrees.
        fov_degrees: f32,
        /// Width / height.
        aspect: f32,
        /// Near plane distance.
        near: f32,
        /// Far plane distance.
        far: f32,
    },
    /// Orthographic projection of a centred box.
    #[command(allow_negative_numbers = true)]
    Ortho {
        /// Box width.
        width: f32,
        /// Box height.
        height: f32,
        /// Near plane distance.
        near: f32,
        /// Far plane distance.
        far: f32,
    },
    /// View matrix from eye and target.
    #[command(name = "look-at", allow_negative_numbers = true)]
    LookAt {
        /// Eye X.
        ex: f32,
        /// Eye Y.
        ey: f32,
        /// Eye Z.
        ez: f32,
        /// Target X.
        tx: f32,
        /// Target Y.
        ty: f32,
        /// Target Z.
        tz: f32,
        /// Up vector as X,Y,Z.
        #[arg(long, value_delimiter = ',', default_values_t = [0.0, 1.0, 0.0])]
        up: Vec<f32>,
    },
}
