use criterion::{Criterion, criterion_group, criterion_main};
use roof_area::outline::OutlineResponse;

fn outline_benchmark(c: &mut Criterion) {
    let json = std::fs::read_to_string("tests/fixtures/building_outline.json").unwrap();

    c.bench_function("building_outline", |b| {
        b.iter(|| {
            let response = OutlineResponse::from_json(&json).unwrap();
            response.building_outline(&mut Vec::new()).unwrap()
        });
    });
}

criterion_group!(benches, outline_benchmark);
criterion_main!(benches);
