// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Table and JSON rendering.

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};
use serde::Serialize;
use tutgl_math::Mat4;
use tutgl_scenes::{SceneKind, SceneRun, SinkEvent};

#[derive(Serialize)]
struct SceneEntry {
    name: &'static str,
    summary: &'static str,
}

fn fmt_num(v: f32) -> String {
    format!("{v:.4}")
}

/// Logical rows of `m`, one line per row.
fn matrix_rows(m: &Mat4) -> String {
    (0..4)
        .map(|row| {
            (0..4)
                .map(|col| format!("{:>9}", fmt_num(m.get(row, col))))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// 4×4 table in logical row/column order.
pub fn matrix_table(m: &Mat4) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["", "c1", "c2", "c3", "c4"]);
    for row in 0..4 {
        let mut cells = vec![Cell::new(format!("r{}", row + 1))];
        cells.extend((0..4).map(|col| {
            Cell::new(fmt_num(m.get(row, col))).set_alignment(CellAlignment::Right)
        }));
        table.add_row(cells);
    }
    table.to_string()
}

/// Column-major array as a single JSON line.
pub fn matrix_json(m: &Mat4) -> Result<String> {
    serde_json::to_string(m).context("serialize matrix")
}

/// Registered scenes as a table.
pub fn scenes_table() -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["scene", "summary"]);
    for kind in SceneKind::ALL {
        table.add_row(vec![kind.name(), kind.summary()]);
    }
    table.to_string()
}

/// Registered scenes as a JSON array.
pub fn scenes_json() -> Result<String> {
    let entries: Vec<SceneEntry> = SceneKind::ALL
        .into_iter()
        .map(|kind| SceneEntry {
            name: kind.name(),
            summary: kind.summary(),
        })
        .collect();
    serde_json::to_string_pretty(&entries).context("serialize scene list")
}

fn push_events(table: &mut Table, frame: &str, time: &str, events: &[SinkEvent]) {
    for event in events {
        let (kind, name, matrix) = match event {
            SinkEvent::Upload { name, data } => (
                "upload",
                name.as_str(),
                matrix_rows(&Mat4::from_column_major(*data)),
            ),
            SinkEvent::Draw => ("draw", "", String::new()),
        };
        table.add_row(vec![
            Cell::new(frame),
            Cell::new(time).set_alignment(CellAlignment::Right),
            Cell::new(kind),
            Cell::new(name),
            Cell::new(matrix),
        ]);
    }
}

/// Every setup and frame event of a run, matrices shown by logical rows.
pub fn run_table(run: &SceneRun) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["frame", "t (ms)", "event", "uniform", "matrix (rows)"]);
    push_events(&mut table, "setup", "", &run.setup);
    for frame in &run.frames {
        push_events(
            &mut table,
            &frame.index.to_string(),
            &format!("{:.3}", frame.time_ms),
            &frame.events,
        );
    }
    format!("scene {} @ {}\n{table}", run.scene, run.viewport)
}

/// Whole run as pretty JSON.
pub fn run_json(run: &SceneRun) -> Result<String> {
    serde_json::to_string_pretty(run).context("serialize scene run")
}
