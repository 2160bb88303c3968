use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use textsim::{build_matrix, kmp, lcs, rabin_karp, span, Match};

fn sample_text(len: usize) -> String {
    // Repeating prose gives the exact matchers realistic partial overlaps.
    let base = "the quick brown fox jumps over the lazy dog and the dog sleeps ";
    base.chars().cycle().take(len).collect()
}

fn bench_exact_matchers(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_match");
    for len in [1_000usize, 10_000, 100_000] {
        let text = sample_text(len);
        let pattern = "the lazy dog";
        group.throughput(Throughput::Bytes(len as u64));

        group.bench_function(format!("kmp/{len}"), |b| {
            b.iter(|| kmp::find_all(black_box(&text), black_box(pattern)).expect("search"))
        });
        group.bench_function(format!("rabin_karp/{len}"), |b| {
            b.iter(|| rabin_karp::find_all(black_box(&text), black_box(pattern)).expect("search"))
        });
    }
    group.finish();
}

fn bench_auto_chunk(c: &mut Criterion) {
    let text_a = sample_text(2_000);
    let text_b = sample_text(2_000);
    c.bench_function("auto_chunk/2000x2000", |b| {
        b.iter(|| {
            let mut hits = Vec::new();
            for candidate in rabin_karp::chunk_candidates(black_box(&text_a), 20) {
                hits.extend(rabin_karp::find_all(&text_b, candidate).expect("search"));
            }
            hits
        })
    });
}

fn bench_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs");
    for len in [100usize, 500, 2_000] {
        let a = sample_text(len);
        let b_text = sample_text(len + 13);
        group.bench_function(format!("similarity/{len}"), |b| {
            b.iter(|| lcs::similarity(black_box(&a), black_box(&b_text)))
        });
    }
    group.finish();
}

fn bench_matrix(c: &mut Criterion) {
    let documents: Vec<(String, String)> = (0..12)
        .map(|i| (format!("doc-{i}"), sample_text(400 + i * 17)))
        .collect();
    c.bench_function("matrix/12x400", |b| {
        b.iter(|| build_matrix(black_box(&documents)))
    });
}

fn bench_span_merge(c: &mut Criterion) {
    let matches: Vec<Match> = (0..10_000)
        .map(|i| Match::new(i * 3, if i % 4 == 0 { 8 } else { 2 }))
        .collect();
    c.bench_function("span_merge/10000", |b| {
        b.iter(|| span::merge(black_box(&matches)))
    });
}

criterion_group!(
    benches,
    bench_exact_matchers,
    bench_auto_chunk,
    bench_similarity,
    bench_matrix,
    bench_span_merge
);
criterion_main!(benches);
