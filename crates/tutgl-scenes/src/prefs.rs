// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Saved run preferences for headless scene runs.

use serde::{Deserialize, Serialize};

use crate::scenes::Viewport;

/// Config key under which [`RunPrefs`] are stored.
pub const RUN_PREFS_KEY: &str = "run_prefs";

/// Defaults applied when the CLI flags leave a value unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunPrefs {
    /// Drawing surface size.
    pub viewport: Viewport,
    /// Simulated frames per second.
    pub fps: f64,
    /// Scene run when none is named.
    pub default_scene: String,
}

impl Default for RunPrefs {
    fn default() -> Self {
        Self {
            viewport: Viewport {
                width: 640,
                height: 480,
            },
            fps: 60.0,
            default_scene: "lookat-cube".to_owned(),
        }
    }
}
