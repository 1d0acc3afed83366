use std::cell::Cell;

use progressive_tracer::core::{AccumulationController, AccumulationPhase, Invalidation};

/// Apply the kernel's blend rule on the CPU with one-value surfaces
fn run_pass(acc: &mut AccumulationController<Cell<f32>>, sample: f32) -> f32 {
    let pass = acc
        .begin_pass(1, 1, |_, _| Ok::<_, ()>(Cell::new(f32::NAN)))
        .unwrap()
        .unwrap();
    let (previous, next) = acc.surfaces().unwrap();
    let blended = if pass.first_pass {
        sample
    } else {
        previous.get() + (sample - previous.get()) * pass.blend_weight()
    };
    next.set(blended);
    acc.end_pass();
    blended
}

#[test]
fn test_blending_yields_running_mean() {
    let mut acc = AccumulationController::new();
    let samples = [0.2, 0.9, 0.4, 0.7, 0.1, 0.5];
    let mut total = 0.0;
    for (i, &sample) in samples.iter().enumerate() {
        total += sample;
        let value = run_pass(&mut acc, sample);
        assert!((value - total / (i + 1) as f32).abs() < 1e-5);
    }
}

#[test]
fn test_first_pass_ignores_stale_contents() {
    let mut acc = AccumulationController::new();
    run_pass(&mut acc, 1.0);
    run_pass(&mut acc, 1.0);
    acc.invalidate(Invalidation::Settings);
    assert_eq!(run_pass(&mut acc, 0.25), 0.25);
    assert_eq!(run_pass(&mut acc, 0.75), 0.5);
}

#[test]
fn test_invalidation_before_first_pass_is_harmless() {
    let mut acc: AccumulationController<Cell<f32>> = AccumulationController::new();
    acc.invalidate(Invalidation::Resize);
    assert_eq!(acc.phase(), AccumulationPhase::Uninitialized);
    assert_eq!(run_pass(&mut acc, 0.3), 0.3);
}
