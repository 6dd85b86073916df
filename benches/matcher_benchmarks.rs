use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use strmine::queries::{
    find_most_common_suffixes, find_suffix_matches_for_prefix, find_suffix_matches_for_prefix_with_mismatches,
};
use strmine::SuffixTree;

const SIZES: [usize; 3] = [50, 200, 800];

fn reads_with_shared_adapter(seed: u64, count: usize, read_len: usize, adapter: &str) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let body_len = read_len.saturating_sub(adapter.len());
            let body: String = (&mut rng).sample_iter(&Alphanumeric).take(body_len).map(char::from).collect();
            format!("{body}{adapter}")
        })
        .collect()
}

fn benchmark_exact_matcher(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_suffix_prefix_match");
    group.sample_size(10);

    for &size in &SIZES {
        let bench_name = format!("find_suffix_matches_for_prefix_{size}_reads");
        group.bench_function(&bench_name, |b| {
            b.iter_batched(
                || {
                    let mut reads = reads_with_shared_adapter(1, size, 40, "AGATCGGAAGAGC");
                    reads.push("AGATCGGAAGAGC".to_string());
                    let tree = SuffixTree::from_strings(&reads, false).unwrap();
                    let prefix = tree.strings().len() - 1;
                    (tree, prefix)
                },
                |(tree, prefix)| find_suffix_matches_for_prefix(&tree, prefix).unwrap(),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn benchmark_mismatch_tolerant_matcher(c: &mut Criterion) {
    let mut group = c.benchmark_group("mismatch_tolerant_match");
    group.sample_size(10);

    group.bench_function("find_suffix_matches_for_prefix_with_mismatches_200_reads", |b| {
        b.iter_batched(
            || {
                let mut reads = reads_with_shared_adapter(2, 200, 40, "AGATCGGAAGAGC");
                reads.push("AGATCGGAAGAGC".to_string());
                let tree = SuffixTree::from_strings(&reads, false).unwrap();
                let prefix = tree.strings().len() - 1;
                (tree, prefix)
            },
            |(tree, prefix)| find_suffix_matches_for_prefix_with_mismatches(&tree, prefix, 0.1).unwrap(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn benchmark_adapter_ranker(c: &mut Criterion) {
    let mut group = c.benchmark_group("most_common_suffix_ranker");
    group.sample_size(10);

    for &size in &SIZES {
        let bench_name = format!("find_most_common_suffixes_{size}_reads");
        group.bench_function(&bench_name, |b| {
            b.iter_batched(
                || {
                    let reads = reads_with_shared_adapter(3, size, 40, "AGATCGGAAGAGC");
                    SuffixTree::from_strings(reads, true).unwrap()
                },
                |tree| find_most_common_suffixes(&tree).unwrap(),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_exact_matcher,
    benchmark_mismatch_tolerant_matcher,
    benchmark_adapter_ranker
);
criterion_main!(benches);
