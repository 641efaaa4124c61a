// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use modcov::format::definition::{convert, flatten};
use modcov::format::parse_definition;
use modcov::ops::build_collection;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `format.flatten`, `format.parse_definition`,
//   `ops.build_collection`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time.
fn benches_parse(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("format.flatten");

        for case in fixtures::Case::ALL {
            let definition = fixtures::fixture(case);
            group.throughput(Throughput::Bytes(definition.len() as u64));
            group.bench_function(case.id(), move |b| {
                b.iter(|| {
                    let flattened = flatten(black_box(&definition)).expect("flatten");
                    black_box(flattened.blocks().len())
                })
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("format.parse_definition");

        for case in fixtures::Case::ALL {
            let definition = fixtures::fixture(case);
            let flattened = flatten(&definition).expect("flatten");
            let nodes = convert(&flattened).expect("convert").len() as u64;
            group.throughput(Throughput::Elements(nodes));
            group.bench_function(case.id(), move |b| {
                b.iter(|| {
                    let graph = parse_definition(black_box(&definition)).expect("parse");
                    black_box(fixtures::checksum_graph(black_box(&graph)))
                })
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("ops.build_collection");

        for (case_id, modules) in [("modules_100", 100usize), ("modules_1000", 1000)] {
            let table = fixtures::module_table(modules);
            group.throughput(Throughput::Elements(modules as u64));
            group.bench_function(case_id, move |b| {
                b.iter(|| {
                    let collection =
                        build_collection(black_box(table.clone())).expect("build_collection");
                    black_box(collection.len())
                })
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_parse
}
criterion_main!(benches);
