#[macro_use]
extern crate criterion;
extern crate mandelbrot;
extern crate num;

use criterion::Criterion;
use mandelbrot::{escape, ImageSpec, Renderer, Viewport};
use num::Complex;

fn bench_escape(c: &mut Criterion) {
    c.bench_function("escape interior point", |b| {
        b.iter(|| escape(Complex::new(-0.1, 0.1), 256))
    });
    c.bench_function("escape boundary point", |b| {
        b.iter(|| escape(Complex::new(-1.20, 0.35), 256))
    });
}

fn bench_render(c: &mut Criterion) {
    let image = ImageSpec::new(192, 108).unwrap();
    let viewport = Viewport::new(Complex::new(-0.2, 0.9), 0.5).unwrap();
    let renderer = Renderer::new(image, viewport, 64).unwrap();
    c.bench_function("render 192x108 single", move |b| {
        b.iter(|| renderer.render_single())
    });
    let renderer = Renderer::new(image, viewport, 64).unwrap();
    c.bench_function("render 192x108 threaded", move |b| {
        b.iter(|| renderer.render(4).unwrap())
    });
}

criterion_group!(benches, bench_escape, bench_render);
criterion_main!(benches);
