//! Benchmarks for greedy 3D packing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;
use u_loading_d3::{pack, Classifier, Config, Fleet, LoadMode, Package, Vehicle};

fn mixed_packages(n: usize) -> Vec<Arc<Package>> {
    (0..n)
        .map(|i| {
            let w = 1.0 + (i % 3) as f64;
            let d = 1.0 + (i % 2) as f64;
            let h = 1.0 + (i % 4) as f64;
            Arc::new(Package::new(format!("P{}", i), w, d, h, 1.0))
        })
        .collect()
}

fn packer_benchmark(c: &mut Criterion) {
    let uniform: Vec<Arc<Package>> = (0..200)
        .map(|i| Arc::new(Package::new(format!("B{}", i), 1.0, 1.0, 1.0, 1.0)))
        .collect();

    c.bench_function("pack_200_unit_cubes", |b| {
        b.iter(|| {
            let mut vehicle = Vehicle::new("P", "V", 10.0, 10.0, 10.0, 1000.0);
            black_box(pack(&mut vehicle, black_box(&uniform)))
        })
    });

    let mixed = mixed_packages(150);
    c.bench_function("pack_150_mixed_boxes", |b| {
        b.iter(|| {
            let mut vehicle = Vehicle::new("P", "V", 12.0, 10.0, 8.0, 1000.0);
            black_box(pack(&mut vehicle, black_box(&mixed)))
        })
    });
}

fn classifier_benchmark(c: &mut Criterion) {
    let packages = mixed_packages(80);
    let vehicles = vec![
        Vehicle::new("Road", "Van", 6.0, 4.0, 4.0, 200.0),
        Vehicle::new("Road", "Truck", 10.0, 6.0, 6.0, 500.0),
        Vehicle::new("Road", "Trailer", 14.0, 6.0, 6.0, 900.0),
    ];

    for mode in [LoadMode::BestSingle, LoadMode::Distribute] {
        let classifier = Classifier::new(Config::new().with_mode(mode));
        c.bench_function(&format!("classify_80_{}", mode.name()), |b| {
            b.iter(|| {
                let mut fleet: Fleet = vehicles.clone().into_iter().collect();
                black_box(classifier.classify(&mut fleet, black_box(&packages)))
            })
        });
    }
}

criterion_group!(benches, packer_benchmark, classifier_benchmark);
criterion_main!(benches);
