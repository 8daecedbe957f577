use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use igcurve::curves::build_curves;
use igcurve::event::document::{decode_document, parse_document};
use igcurve::event::resolver::resolve;

/// Legacy-dialect event with `n` tracks, each linked to its own extras row.
fn legacy_event(n: usize) -> String {
    let tracks = (0..n)
        .map(|i| format!("({i}, 0, {}.5, 0.1, nan, 1, 2.0, 5)", i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    let extras = (0..n)
        .map(|i| {
            let z = i as f64;
            format!("((0, 0, {z}), (1, 0, 0), (40, 3, {z}), (0.8, 0.6, 0))")
        })
        .collect::<Vec<_>>()
        .join(", ");
    let links = (0..n)
        .map(|i| format!("((1, {i}), (2, {i}))"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{{'Types': {{}}, 'Collections': {{'Tracks_V1': [{tracks}], 'Extras_V1': [{extras}]}}, \
         'Associations': {{'TrackExtras_V1': [{links}]}}}}"
    )
}

fn bench_decode(c: &mut Criterion) {
    let text = legacy_event(500);
    c.bench_function("decode_document_500_tracks", |b| {
        b.iter(|| decode_document(black_box(&text)).unwrap())
    });
}

fn bench_build(c: &mut Criterion) {
    let normalized = igcurve::normalize(&legacy_event(500)).into_owned();
    let doc = parse_document(&normalized).unwrap();

    c.bench_function("build_curves_500_tracks", |b| {
        b.iter_batched(
            || resolve(&doc).unwrap(),
            |event| build_curves(black_box(&event)).unwrap(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_decode, bench_build);
criterion_main!(benches);
