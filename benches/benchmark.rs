//! Benchmarks for ngram_textrank

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ngram_textrank::*;

/// Sample text for benchmarking. Every window of six or more tokens
/// contains "machine" or "learning", also across repetitions.
const SAMPLE_TEXT: &str = r#"
Machine learning is a field of study. Machine learning systems improve with
experience. Deep learning is a subset of machine learning. Machine learning
uses data to learn. Machine learning models need training data, and machine
learning research keeps producing better learning algorithms.
"#;

fn benchmark_normalization(c: &mut Criterion) {
    let normalizer = Normalizer::new();

    c.bench_function("normalize_sample", |b| {
        b.iter(|| normalizer.tokenize(black_box(SAMPLE_TEXT)))
    });

    let mut group = c.benchmark_group("normalize_by_size");
    for size in [1, 5, 10, 20].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| normalizer.tokenize(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_graph_building(c: &mut Criterion) {
    let stopwords = StopwordFilter::new("en");
    let mut group = c.benchmark_group("similarity_graph");

    for size in [1, 5, 10].iter() {
        let tokens = Normalizer::new().tokenize(&SAMPLE_TEXT.repeat(*size));
        let vocab = Vocabulary::build(&tokens, &stopwords);
        let Ok(candidates) = PhraseGenerator::new(8).generate(&tokens) else {
            continue;
        };
        let vectors = PhraseEncoder::new(&vocab).encode_all(&candidates);

        group.throughput(Throughput::Elements(vectors.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &vectors, |b, vectors| {
            b.iter(|| SimilarityGraph::build(black_box(vectors)))
        });
    }
    group.finish();
}

fn benchmark_power_iteration(c: &mut Criterion) {
    let stopwords = StopwordFilter::new("en");
    let mut group = c.benchmark_group("power_iteration");

    for size in [1, 5, 10].iter() {
        let tokens = Normalizer::new().tokenize(&SAMPLE_TEXT.repeat(*size));
        let vocab = Vocabulary::build(&tokens, &stopwords);
        let Ok(candidates) = PhraseGenerator::new(8).generate(&tokens) else {
            continue;
        };
        let vectors = PhraseEncoder::new(&vocab).encode_all(&candidates);
        let Ok(transition) = TransitionMatrix::from_similarity(&SimilarityGraph::build(&vectors))
        else {
            continue;
        };

        let pr = PowerIteration::new();
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &transition,
            |b, transition| b.iter(|| pr.run_seeded(black_box(transition), Some(42))),
        );
    }
    group.finish();
}

fn benchmark_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");

    for size in [1, 5, 10].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));

        for ngram_length in [6, 8] {
            let extractor = KeyPhraseExtractor::with_config(
                TextRankConfig::default()
                    .with_ngram_length(ngram_length)
                    .with_seed(42),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("ngram_{ngram_length}"), size),
                &text,
                |b, text| b.iter(|| extractor.extract(black_box(text))),
            );
        }
    }
    group.finish();
}

fn benchmark_stopwords(c: &mut Criterion) {
    let filter = StopwordFilter::new("en");
    let tokens = Normalizer::new().tokenize(SAMPLE_TEXT);

    c.bench_function("remove_stopwords", |b| {
        b.iter(|| filter.remove_stopwords(black_box(&tokens)))
    });
}

criterion_group!(
    benches,
    benchmark_normalization,
    benchmark_graph_building,
    benchmark_power_iteration,
    benchmark_full_pipeline,
    benchmark_stopwords,
);

criterion_main!(benches);
