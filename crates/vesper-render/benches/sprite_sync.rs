//! Benchmarks for the sprite mutate → sync hot path.
//!
//! Measures the per-frame cost of the three attribute families and of a
//! clean (no-op) sync, which is what most sprites pay most frames.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vesper_render::{Color, SpriteQuad, TextureRegion};

fn test_region() -> TextureRegion {
    TextureRegion::from_pixels(32, 64, 64, 48, 512, 512)
}

fn bench_resize(c: &mut Criterion) {
    let mut quad = SpriteQuad::with_region_size(test_region(), Color::WHITE);
    let mut width = 1.0f32;

    c.bench_function("sprite_sync/resize", |b| {
        b.iter(|| {
            width += 1.0;
            quad.set_size(black_box(width), black_box(width * 0.75));
            black_box(quad.sync_if_dirty())
        });
    });
}

fn bench_flip_toggle(c: &mut Criterion) {
    let mut quad = SpriteQuad::with_region_size(test_region().rotated(true), Color::WHITE);
    let mut flip = false;

    c.bench_function("sprite_sync/flip_toggle", |b| {
        b.iter(|| {
            flip = !flip;
            quad.set_flip_horizontal(black_box(flip));
            black_box(quad.sync_if_dirty())
        });
    });
}

fn bench_recolor(c: &mut Criterion) {
    let mut quad = SpriteQuad::with_region_size(test_region(), Color::WHITE);
    let mut t = 0.0f32;

    c.bench_function("sprite_sync/recolor", |b| {
        b.iter(|| {
            t += 0.01;
            quad.set_color(black_box(Color::rgba(t.fract(), 0.5, 0.25, 1.0)));
            black_box(quad.sync_if_dirty())
        });
    });
}

fn bench_clean_sync(c: &mut Criterion) {
    let mut quad = SpriteQuad::with_region_size(test_region(), Color::WHITE);
    quad.sync_if_dirty();

    c.bench_function("sprite_sync/clean", |b| {
        b.iter(|| black_box(quad.sync_if_dirty()));
    });
}

criterion_group!(
    benches,
    bench_resize,
    bench_flip_toggle,
    bench_recolor,
    bench_clean_sync
);
criterion_main!(benches);
