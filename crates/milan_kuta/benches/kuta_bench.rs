use std::collections::BTreeMap;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use milan_base::{BodyKey, Chart, Gender, RawBody};
use milan_kuta::{KeySpec, KutaEngine, KutaType};

const SAMPLE_CONFIG: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../data/kuta_protocols.json"
));

fn chart(gender: Gender, longitudes: [f64; 8]) -> Chart {
    let keys = [
        BodyKey::Su,
        BodyKey::Mo,
        BodyKey::Ma,
        BodyKey::Me,
        BodyKey::Ju,
        BodyKey::Ve,
        BodyKey::Sa,
        BodyKey::As,
    ];
    let bodies: BTreeMap<BodyKey, RawBody> = keys
        .into_iter()
        .zip(longitudes)
        .map(|(k, lng)| {
            (
                k,
                RawBody {
                    lng,
                    lat: 0.0,
                    spd: 1.0,
                },
            )
        })
        .collect();
    Chart::new(gender, 23.85, 1, &bodies)
}

fn load_bench(c: &mut Criterion) {
    c.bench_function("load_sample_configuration", |b| {
        b.iter(|| KutaEngine::from_json_str(black_box(SAMPLE_CONFIG), &BTreeMap::new()))
    });
}

fn scoring_bench(c: &mut Criterion) {
    let Ok(engine) = KutaEngine::from_json_str(SAMPLE_CONFIG, &BTreeMap::new()) else {
        return;
    };
    let female = chart(
        Gender::Female,
        [280.5, 95.2, 12.7, 265.1, 45.9, 301.3, 333.0, 150.4],
    );
    let male = chart(
        Gender::Male,
        [40.1, 211.8, 170.2, 30.6, 250.0, 77.7, 120.3, 5.5],
    );
    let specs = [KeySpec::parse("tara/scale/6")];

    let mut group = c.benchmark_group("scoring");
    group.bench_function("single_key", |b| {
        b.iter(|| engine.compute_specs(&female, &male, BodyKey::Mo, BodyKey::Mo, black_box(&specs)))
    });
    group.bench_function("single_all_keys", |b| {
        b.iter(|| {
            engine.compute_single(&female, &male, BodyKey::Mo, BodyKey::Mo, black_box(KutaType::All))
        })
    });
    group.bench_function("all_pairs_ashta", |b| {
        b.iter(|| engine.compute_all_pairs(&female, &male, &[], true, black_box(KutaType::Ashta)))
    });
    group.finish();
}

criterion_group!(benches, load_bench, scoring_bench);
criterion_main!(benches);
