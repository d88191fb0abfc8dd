// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use futures::stream::{self, StreamExt};
use ripple_core::StreamItem;
use ripple_stream::PairWithPreviousExt;
use std::hint::black_box;
use tokio::runtime::Runtime;

fn make_stream(
    size: usize,
    payload_size: usize,
) -> impl futures::Stream<Item = StreamItem<Vec<u8>>> {
    let items: Vec<StreamItem<Vec<u8>>> = (0..size)
        .map(|_| StreamItem::Value(vec![0u8; payload_size]))
        .collect();
    stream::iter(items)
}

pub fn bench_pair_with_previous(c: &mut Criterion) {
    let mut group = c.benchmark_group("pair_with_previous");
    let sizes = [100usize, 1000usize, 10_000usize];
    let payload_sizes = [0usize, 128usize];

    for &size in &sizes {
        for &payload_size in &payload_sizes {
            let id = BenchmarkId::from_parameter(format!("m{}_p{}", size, payload_size));
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(
                id,
                &(size, payload_size),
                |bencher, &(size, payload_size)| {
                    bencher.iter(|| {
                        let stream = make_stream(size, payload_size);
                        let paired = stream.pair_with_previous(|current, previous| {
                            current.len() + previous.map_or(0, Vec::len)
                        });

                        let rt = Runtime::new().unwrap();
                        rt.block_on(async move {
                            let mut s = Box::pin(paired);
                            while let Some(v) = s.next().await {
                                black_box(v);
                            }
                        });
                    })
                },
            );
        }
    }

    group.finish();
}

pub fn bench_combine_with_previous(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine_with_previous");
    let sizes = [100usize, 1000usize, 10_000usize];
    let payload_sizes = [0usize, 128usize];

    for &size in &sizes {
        for &payload_size in &payload_sizes {
            let id = BenchmarkId::from_parameter(format!("m{}_p{}", size, payload_size));
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(
                id,
                &(size, payload_size),
                |bencher, &(size, payload_size)| {
                    bencher.iter(|| {
                        let stream = make_stream(size, payload_size);
                        let combined = stream.combine_with_previous();

                        let rt = Runtime::new().unwrap();
                        rt.block_on(async move {
                            let mut s = Box::pin(combined);
                            while let Some(v) = s.next().await {
                                black_box(v);
                            }
                        });
                    })
                },
            );
        }
    }

    group.finish();
}
