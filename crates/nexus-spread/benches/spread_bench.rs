use std::collections::HashSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nexus_graph::{Catalog, NodeId};
use nexus_spread::{compute_spread, Adjacency};

fn bench_spread(c: &mut Criterion) {
    let catalog = Catalog::meridian();
    let source = NodeId::from("p-alex");
    let empty = HashSet::new();
    let excluded: HashSet<_> = [
        NodeId::from("p-sophie"),
        NodeId::from("p-omar"),
        NodeId::from("p-wei"),
    ]
    .into();

    c.bench_function("adjacency_build", |b| {
        b.iter(|| Adjacency::build(black_box(&catalog)))
    });

    c.bench_function("spread_full", |b| {
        b.iter(|| compute_spread(black_box(&catalog), &source, &empty))
    });

    c.bench_function("spread_with_exclusions", |b| {
        b.iter(|| compute_spread(black_box(&catalog), &source, &excluded))
    });
}

criterion_group!(benches, bench_spread);
criterion_main!(benches);
