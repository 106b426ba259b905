// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! tutgl CLI entrypoint.
//!
//! Developer-facing commands for the tutorial transform math:
//! `tutgl scenes` lists the scenes, `tutgl frames <scene>` runs one headlessly
//! and prints every matrix it would upload, and `tutgl matrix <kind> ...`
//! builds a single matrix.
//!
//! # Usage
//! ```text
//! tutgl [--no-config] [--config-dir DIR] [--save-prefs] <command> [options]
//! ```
//!
//! Run preferences (viewport, frame rate, default scene) are loaded
//! best-effort from `run_prefs.json` in the platform config directory.
//! The CLI exits with code `0` on success and non-zero on error. Logs go to
//! stderr and honour `RUST_LOG`.

// The CLI is expected to print to stdout.
#![allow(clippy::print_stdout)]

mod cli;
mod config_fs;
mod output;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use tutgl_math::{deg_to_rad, Mat4, Vec3};
use tutgl_scenes::{
    run_frames, ConfigService, FrameSchedule, RunPrefs, SceneKind, Viewport, RUN_PREFS_KEY,
};

use crate::cli::{Cli, Command, Format, MatrixKind};
use crate::config_fs::FsConfigStore;

fn main() -> Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Config (best-effort)
    let config = open_config(&args);
    let mut prefs: RunPrefs = config
        .as_ref()
        .and_then(|c| match c.load::<RunPrefs>(RUN_PREFS_KEY) {
            Ok(prefs) => prefs,
            Err(err) => {
                warn!(%err, "ignoring unreadable run prefs");
                None
            }
        })
        .unwrap_or_default();

    let rendered = match args.command {
        Command::Scenes { format } => match format {
            Format::Table => output::scenes_table(),
            Format::Json => output::scenes_json()?,
        },
        Command::Frames {
            scene,
            frames,
            fps,
            start_ms,
            viewport,
            format,
        } => {
            let name = scene.unwrap_or_else(|| prefs.default_scene.clone());
            let kind: SceneKind = name.parse()?;
            let viewport: Viewport = viewport.unwrap_or(prefs.viewport);
            let fps = fps.unwrap_or(prefs.fps);
            let schedule = FrameSchedule {
                frames,
                fps,
                start_ms,
            };
            let run = run_frames(kind, viewport, schedule)
                .with_context(|| format!("running scene '{kind}'"))?;
            info!(scene = %kind, frames, %viewport, "scene run complete");

            prefs = RunPrefs {
                viewport,
                fps,
                default_scene: kind.name().to_owned(),
            };
            match format {
                Format::Table => output::run_table(&run),
                Format::Json => output::run_json(&run)?,
            }
        }
        Command::Matrix { kind, format } => {
            let m = build_matrix(kind)?;
            match format {
                Format::Table => output::matrix_table(&m),
                Format::Json => output::matrix_json(&m)?,
            }
        }
    };

    println!("{rendered}");

    if args.save_prefs {
        let Some(cfg) = &config else {
            bail!("--save-prefs needs a config store (drop --no-config)");
        };
        cfg.save(RUN_PREFS_KEY, &prefs)
            .context("saving run prefs")?;
        info!(dir = %cfg.store().base().display(), "run prefs saved");
    }
    Ok(())
}

fn open_config(args: &Cli) -> Option<ConfigService<FsConfigStore>> {
    if args.no_config {
        debug!("config disabled");
        return None;
    }
    let store = match &args.config_dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::new(),
    };
    match store {
        Ok(store) => Some(ConfigService::new(store)),
        Err(err) => {
            warn!(%err, "config store unavailable; using defaults");
            None
        }
    }
}

fn build_matrix(kind: MatrixKind) -> Result<Mat4> {
    let m = match kind {
        MatrixKind::Translation { x, y, z } => Mat4::translation(x, y, z),
        MatrixKind::Scale { factors } => match factors.as_slice() {
            [f] => Mat4::scale(*f),
            [sx, sy, sz] => Mat4::scale_xyz(*sx, *sy, *sz),
            other => bail!("scale takes one or three factors, got {}", other.len()),
        },
        MatrixKind::Rotation {
            ax,
            ay,
            az,
            angle,
            degrees,
        } => {
            let axis = Vec3::new(ax, ay, az);
            if (axis.length() - 1.0).abs() > 1e-3 {
                warn!(length = axis.length(), "rotation axis is not unit length; result will scale/shear");
            }
            let radians = if degrees { deg_to_rad(angle) } else { angle };
            Mat4::rotation(&axis, radians)
        }
        MatrixKind::Perspective {
            right,
            top,
            near,
            far,
            size,
        } => {
            if size {
                Mat4::perspective_size(right, top, near, far)
            } else {
                Mat4::perspective(right, top, near, far)
            }
        }
        MatrixKind::Fov {
            fov_degrees,
            aspect,
            near,
            far,
        } => Mat4::fov_perspective(fov_degrees, aspect, near, far),
        MatrixKind::Ortho {
            width,
            height,
            near,
            far,
        } => Mat4::ortho(width, height, near, far),
        MatrixKind::LookAt {
            ex,
            ey,
            ez,
            tx,
            ty,
            tz,
            up,
        } => {
            let [ux, uy, uz] = up.as_slice() else {
                bail!("--up takes three comma-separated values, got {}", up.len());
            };
            let eye = Vec3::new(ex, ey, ez);
            let target = Vec3::new(tx, ty, tz);
            if eye == target {
                bail!("look-at needs distinct eye and target");
            }
            Mat4::look_at(&eye, &target, &Vec3::new(*ux, *uy, *uz))
        }
    };
    Ok(m)
}
