//! Performance benchmarks for suffix array construction and alignment
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use textsearch::align::align;
use textsearch::suffix_array::{
    build_query_target, build_suffix_array, close_matches, SuffixArrayBuilder, SuffixArrayConfig,
};
use textsearch::symbols::Sequence;

/// Transcript-like text of roughly `len` characters
fn sample_text(len: usize, seed: usize) -> String {
    const WORDS: &[&str] = &[
        "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "and", "then", "runs",
        "away", "into", "forest", "where", "nobody", "can", "find", "it",
    ];
    let mut text = String::with_capacity(len + 16);
    let mut i = seed;
    while text.len() < len {
        text.push_str(WORDS[i % WORDS.len()]);
        text.push(' ');
        i = i.wrapping_mul(31).wrapping_add(7);
    }
    text.truncate(len);
    text
}

fn bench_suffix_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("suffix_array");
    for len in [1_000, 10_000, 100_000] {
        let seq = Sequence::from_chars(&sample_text(len, 1));
        group.bench_with_input(BenchmarkId::new("sequential", len), &seq, |b, seq| {
            b.iter(|| build_suffix_array(black_box(seq)))
        });

        let parallel = SuffixArrayBuilder::new(SuffixArrayConfig {
            parallel_threshold: 0,
        });
        group.bench_with_input(BenchmarkId::new("parallel", len), &seq, |b, seq| {
            b.iter(|| parallel.build(black_box(seq)))
        });
    }
    group.finish();
}

fn bench_close_matches(c: &mut Criterion) {
    let query = Sequence::from_chars(&sample_text(500, 3));
    let target = Sequence::from_chars(&sample_text(20_000, 5));
    let (sa, query_len) = build_query_target(&query, &target).expect("Failed to build index");

    c.bench_function("close_matches_500_in_20k", |b| {
        b.iter(|| close_matches(black_box(&sa), query_len))
    });
}

fn bench_align(c: &mut Criterion) {
    let mut group = c.benchmark_group("align");
    for len in [100, 500, 2_000] {
        let source = Sequence::from_chars(&sample_text(len, 2));
        let target = Sequence::from_chars(&sample_text(len, 4));
        group.bench_with_input(
            BenchmarkId::from_parameter(len),
            &(source, target),
            |b, (s, t)| b.iter(|| align(black_box(s), black_box(t))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_suffix_array, bench_close_matches, bench_align);
criterion_main!(benches);
