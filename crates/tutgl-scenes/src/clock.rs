// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Frame-time helpers shared by the scenes.
//!
//! Two styles of animation timing appear in the tutorials:
//! - a countdown [`ResetCycle`] driven by an absolute millisecond timestamp,
//! - free-running loops ([`loop_angle`], [`lerp_factor`]) driven by elapsed
//!   seconds.

use std::f32::consts::TAU;

/// Countdown timer that re-arms every `period_ms`.
///
/// The first tick arms the cycle at the current time, so it reports a
/// fraction of 0 without wrapping. Any later tick past the armed deadline
/// re-arms it at `now + period_ms` and reports a wrap. In between, the
/// fraction counts down from 1 towards 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResetCycle {
    period_ms: f64,
    next_reset: Option<f64>,
}

/// Result of advancing a [`ResetCycle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleTick {
    /// Remaining share of the period, `(next_reset - now) / period`.
    pub fraction: f32,
    /// True when this tick re-armed the cycle.
    pub wrapped: bool,
}

impl ResetCycle {
    /// Create an unarmed cycle with the given period in milliseconds.
    pub const fn new(period_ms: f64) -> Self {
        Self {
            period_ms,
            next_reset: None,
        }
    }

    /// Period in milliseconds.
    pub const fn period_ms(&self) -> f64 {
        self.period_ms
    }

    /// Advance to `now_ms` (absolute timestamp in milliseconds).
    pub fn tick(&mut self, now_ms: f64) -> CycleTick {
        let mut next = *self.next_reset.get_or_insert(now_ms);
        let wrapped = now_ms > next;
        if wrapped {
            next = now_ms + self.period_ms;
            self.next_reset = Some(next);
        }
        #[allow(clippy::cast_possible_truncation)]
        let fraction = ((next - now_ms) / self.period_ms) as f32;
        CycleTick { fraction, wrapped }
    }
}

/// Angle in radians covered after `elapsed_s` seconds of a loop that turns
/// once every `loop_duration_s` seconds. Restarts at 0 each loop.
pub fn loop_angle(elapsed_s: f32, loop_duration_s: f32) -> f32 {
    (elapsed_s % loop_duration_s) * (TAU / loop_duration_s)
}

/// Triangle wave over one loop: 0 at the start, 1 halfway, back to 0.
pub fn lerp_factor(elapsed_s: f32, loop_duration_s: f32) -> f32 {
    let mut value = (elapsed_s % loop_duration_s) / loop_duration_s;
    if value > 0.5 {
        value = 1.0 - value;
    }
    value * 2.0
}
