// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use tutgl_scenes::{run_frames, FrameSchedule, SceneKind, Viewport};

fn bench_scene_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_frames");
    let viewport = Viewport {
        width: 640,
        height: 480,
    };
    let frames = 120u32;
    group.throughput(Throughput::Elements(u64::from(frames)));
    for kind in SceneKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(kind.name()), &kind, |b, &kind| {
            b.iter_batched(
                || FrameSchedule {
                    frames,
                    fps: 60.0,
                    start_ms: 0.0,
                },
                |schedule| {
                    let run = run_frames(kind, viewport, schedule).expect("scene run");
                    assert_eq!(run.frames.len(), frames as usize);
                    run
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scene_frames);
criterion_main!(benches);
