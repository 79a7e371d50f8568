//! Benchmarks for outline extraction performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks scan synthetic documents mixing headlines and body text.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use treemark::{extract, MarkerSyntax};

/// Creates a synthetic document with the given number of sections.
/// Each section is a headline (depth cycling 1..=4) followed by body text,
/// including some near-miss lines that pass the prefilter but fail the
/// grammar.
fn create_test_document(section_count: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(section_count * 5);

    for i in 0..section_count {
        let depth = i % 4 + 1;
        lines.push(format!("#R{} Section {}", "!".repeat(depth), i + 1));
        lines.push(String::new());
        lines.push(format!("Body paragraph for section {}.", i + 1));
        lines.push("#R!not-a-headline".to_string());
        lines.push("More body text with some filler content here.".to_string());
    }

    lines
}

fn bench_extract(c: &mut Criterion) {
    let syntax = MarkerSyntax::default();

    let small = create_test_document(100);
    c.bench_function("extract_100_sections", |b| {
        b.iter(|| extract(black_box(&small), &syntax))
    });

    let large = create_test_document(10_000);
    c.bench_function("extract_10k_sections", |b| {
        b.iter(|| extract(black_box(&large), &syntax))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
