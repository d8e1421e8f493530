use std::time::Duration;

use rand::{Rng, SeedableRng};

use criterion::{
    criterion_group, criterion_main, measurement::WallTime, BenchmarkGroup, Criterion, SamplingMode,
};

use sentence_lsh::{Sentence, SentenceLsh};

const SAMPLE_SIZE: usize = 10;
const WARM_UP_TIME: Duration = Duration::from_secs(5);
const MEASURE_TIME: Duration = Duration::from_secs(10);

const SEED: u64 = 334;
const VOCABULARY_SIZE: usize = 5000;
const MIN_TOKENS: usize = 5;
const MAX_TOKENS: usize = 30;
const NUM_SENTENCES: usize = 100_000;
const NUM_QUERIES: usize = 100;
const BANDS: [usize; 5] = [2, 4, 8, 16, 32];
const KS: [usize; 2] = [1, 10];
const RADII: [f64; 2] = [4., 8.];

fn random_sentences(rng: &mut rand_xoshiro::Xoshiro256PlusPlus, num: usize) -> Vec<Sentence> {
    (0..num)
        .map(|i| {
            let len = rng.gen_range(MIN_TOKENS..=MAX_TOKENS);
            let tokens: Vec<_> = (0..len)
                .map(|_| format!("w{}", rng.gen_range(0..VOCABULARY_SIZE)))
                .collect();
            Sentence::new(format!("s{i}"), tokens)
        })
        .collect()
}

fn criterion_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP_TIME);
    group.measurement_time(MEASURE_TIME);
    group.sampling_mode(SamplingMode::Flat);

    let mut rng = rand_xoshiro::Xoshiro256PlusPlus::seed_from_u64(SEED);
    let sentences = random_sentences(&mut rng, NUM_SENTENCES);
    let queries = random_sentences(&mut rng, NUM_QUERIES);

    add_put_benches(&mut group, &sentences);
    add_search_benches(&mut group, &sentences, &queries);
}

fn add_put_benches(group: &mut BenchmarkGroup<WallTime>, sentences: &[Sentence]) {
    for num_bands in BANDS {
        group.bench_function(format!("put/{num_bands}"), |b| {
            b.iter(|| {
                let mut searcher = SentenceLsh::new(num_bands).unwrap();
                for (i, s) in sentences.iter().enumerate() {
                    searcher.put(s.clone(), i);
                }
                searcher
            });
        });
        group.bench_function(format!("put_all_in_parallel/{num_bands}"), |b| {
            b.iter(|| {
                let mut searcher = SentenceLsh::new(num_bands).unwrap();
                searcher.put_all_in_parallel(sentences.iter().cloned().enumerate().map(|(i, s)| (s, i)));
                searcher
            });
        });
    }
}

fn add_search_benches(
    group: &mut BenchmarkGroup<WallTime>,
    sentences: &[Sentence],
    queries: &[Sentence],
) {
    for num_bands in BANDS {
        let mut searcher = SentenceLsh::new(num_bands).unwrap();
        searcher.put_all_in_parallel(sentences.iter().cloned().enumerate().map(|(i, s)| (s, i)));
        for k in KS {
            group.bench_function(format!("knn/{num_bands}/{k}"), |b| {
                b.iter(|| {
                    let mut num_results = 0;
                    for query in queries {
                        num_results += searcher.knn(query, k).unwrap().len();
                    }
                    num_results
                });
            });
        }
        for radius in RADII {
            group.bench_function(format!("range/{num_bands}/{radius}"), |b| {
                b.iter(|| {
                    let mut neighbors = vec![];
                    for query in queries {
                        searcher.range(query, radius, &mut neighbors).unwrap();
                    }
                    neighbors.len()
                });
            });
        }
    }
}

criterion_group!(benches, criterion_uniform);
criterion_main!(benches);
