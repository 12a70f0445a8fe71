use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spherecast::{Encoding, RenderConfig};

fn criterion_benchmark(c: &mut Criterion) {
    let mut config = RenderConfig::default();
    config.width = 120;
    config.height = 120;
    let tracer = config.tracer();

    c.bench_function("render reference 120x120", |b| {
        b.iter(|| black_box(tracer.render()))
    });
    c.bench_function("render serial reference 120x120", |b| {
        b.iter(|| black_box(tracer.render_serial()))
    });

    let canvas = tracer.render();
    c.bench_function("encode xpm2 120x120", |b| {
        b.iter(|| black_box(Encoding::Xpm2.encode(&canvas)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
