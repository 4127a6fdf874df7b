//! Binary Trie Benchmarks
//!
//! Benchmarks for trie insertion and queries and for the bit codec, using the
//! Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use binary_trie::data_structures::bit_codec::{bits_to_varint, varint_to_bits};
use binary_trie::data_structures::{BitString, PatriciaTrie, PatriciaTrieConfig};

/// Deterministic pseudo-random 160-bit ids.
fn node_ids(count: usize) -> Vec<BitString> {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    (0..count)
        .map(|_| {
            let mut id = [0u8; 20];
            for byte in id.iter_mut() {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                *byte = state as u8;
            }
            BitString::from_bytes(&id)
        })
        .collect()
}

fn populated(ids: &[BitString]) -> PatriciaTrie<usize> {
    let mut trie = PatriciaTrie::with_config(PatriciaTrieConfig::new().with_key_bits(160));
    for (i, id) in ids.iter().enumerate() {
        let _ = trie.add(id.clone(), Some(i));
    }
    trie
}

/// Benchmark the PATRICIA trie
fn bench_patricia_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("patricia_trie");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [100usize, 1_000, 10_000] {
        let ids = node_ids(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("insert", size), &ids, |b, ids| {
            b.iter(|| populated(black_box(ids)));
        });

        let trie = populated(&ids);
        let targets = node_ids(size + 64);
        let targets = &targets[size..];

        group.throughput(Throughput::Elements(targets.len() as u64));
        group.bench_with_input(BenchmarkId::new("n_closest_20", size), &trie, |b, trie| {
            b.iter(|| {
                for target in targets {
                    black_box(trie.n_closest(black_box(target), 20, None));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("find", size), &trie, |b, trie| {
            b.iter(|| {
                for id in ids.iter().take(64) {
                    black_box(trie.find(black_box(id)));
                }
            });
        });
    }

    group.finish();
}

/// Benchmark the bit codec
fn bench_bit_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit_codec");

    for bytes in [4usize, 20, 32] {
        let id = BitString::from_bytes(&vec![0xA5; bytes]);
        let wire = bits_to_varint(&id);

        group.bench_with_input(BenchmarkId::new("to_varint", bytes * 8), &id, |b, id| {
            b.iter(|| bits_to_varint(black_box(id)));
        });
        group.bench_with_input(BenchmarkId::new("from_varint", bytes * 8), &wire, |b, wire| {
            b.iter(|| varint_to_bits(black_box(wire)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_patricia_trie, bench_bit_codec);
criterion_main!(benches);
