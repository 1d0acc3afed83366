use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use progressive_tracer::core::{FrameOrchestrator, FrameSnapshot};
use progressive_tracer::error::RenderResult;
use progressive_tracer::scenes::{build_scene, ScenePreset, LIGHTS};
use progressive_tracer::settings::FrameSettings;
use progressive_tracer::traits::{Presentation, RenderBackend};
use progressive_tracer::types::{LightData, SceneBlock, SceneObjectData};

/// Backend that does no GPU work, leaving only the per-tick CPU cost
struct NullBackend;

impl RenderBackend for NullBackend {
    type Surface = ();

    fn allocate_surface(&mut self, _width: u32, _height: u32) -> RenderResult<()> {
        Ok(())
    }

    fn trace(&mut self, snapshot: &FrameSnapshot, _previous: &(), _next: &()) -> RenderResult<()> {
        black_box(snapshot.header(0));
        black_box(snapshot.scene_block());
        Ok(())
    }

    fn composite(&mut self, _snapshot: &FrameSnapshot, _next: &()) -> RenderResult<Presentation> {
        Ok(Presentation::Presented)
    }

    fn resize_display(&mut self, _width: u32, _height: u32) {}
}

fn bench_build_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_scene");
    for preset in ScenePreset::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(preset.name()), &preset, |b, preset| {
            let mut t = 0.0f32;
            b.iter(|| {
                t += 1.0 / 60.0;
                black_box(build_scene(preset.id(), black_box(t)))
            })
        });
    }
    group.finish();
}

fn bench_pack_scene(c: &mut Criterion) {
    let objects = build_scene(ScenePreset::Pedestal.id(), 1.5);
    c.bench_function("pack_scene_block", |b| {
        b.iter(|| {
            black_box(SceneBlock {
                lights: LIGHTS.each_ref().map(LightData::from),
                objects: black_box(&objects).each_ref().map(SceneObjectData::from),
            })
        })
    });
}

fn bench_tick(c: &mut Criterion) {
    let mut orchestrator = FrameOrchestrator::new(NullBackend, FrameSettings::default(), 800, 600, 60);
    c.bench_function("orchestrator_tick", |b| {
        b.iter(|| black_box(orchestrator.tick()))
    });
}

criterion_group!(benches, bench_build_scene, bench_pack_scene, bench_tick);
criterion_main!(benches);
