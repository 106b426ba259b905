// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Port trait for handing transform uniforms to a renderer without depending
//! on a specific GL binding.

use serde::{Deserialize, Serialize};

/// Renderer-facing port.
///
/// Implementations forward to `uniformMatrix4fv(location, false, data)` and
/// a draw call on the bound mesh. Scenes call `upload` zero or more times
/// before each `draw`; an upload stays in effect for every later draw until
/// the same name is uploaded again.
pub trait UniformSink {
    /// Upload a column-major 4×4 matrix to the uniform called `name`.
    fn upload(&mut self, name: &str, column_major: &[f32; 16]);
    /// Draw the bound mesh with the uniforms uploaded so far.
    fn draw(&mut self);
}

/// One call observed by a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SinkEvent {
    /// A matrix upload.
    Upload {
        /// Uniform name.
        name: String,
        /// Column-major matrix data.
        data: [f32; 16],
    },
    /// A draw call.
    Draw,
}

/// In-memory sink that records every call in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Vec<SinkEvent>,
}

impl RecordingSink {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events in call order.
    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Drain the recorded events, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<SinkEvent> {
        std::mem::take(&mut self.events)
    }

    /// Most recent upload for `name`, if any.
    pub fn last_upload(&self, name: &str) -> Option<&[f32; 16]> {
        self.events.iter().rev().find_map(|event| match event {
            SinkEvent::Upload { name: n, data } if n == name => Some(data),
            _ => None,
        })
    }

    /// Number of draw calls recorded.
    pub fn draw_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SinkEvent::Draw))
            .count()
    }
}

impl UniformSink for RecordingSink {
    fn upload(&mut self, name: &str, column_major: &[f32; 16]) {
        self.events.push(SinkEvent::Upload {
            name: name.to_owned(),
            data: *column_major,
        });
    }

    fn draw(&mut self) {
        self.events.push(SinkEvent::Draw);
    }
}
