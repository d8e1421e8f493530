use hamming_bands::sketch::Sketch;
use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sentence_lsh::errors::SentenceLshError;
use sentence_lsh::{Sentence, SentenceLsh, ShingleTokenizer};

const VOCABULARY: [&str; 24] = [
    "books", "curry", "town", "city", "jimbocho", "welcome", "harbor", "dawn", "quiet", "ships",
    "leave", "the", "of", "and", "to", "at", "river", "bridge", "market", "coffee", "rain", "train",
    "station", "night",
];

fn random_corpus(seed: u64, num_sentences: usize) -> Vec<Sentence> {
    let mut rng = rand_xoshiro::Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..num_sentences)
        .map(|i| {
            let len = rng.gen_range(1..8);
            let tokens: Vec<_> = (0..len)
                .map(|_| *VOCABULARY.choose(&mut rng).unwrap())
                .collect();
            Sentence::new(format!("{i}: {}", tokens.join(" ")), tokens)
        })
        .collect()
}

fn build(num_bands: usize, corpus: &[Sentence]) -> SentenceLsh<usize> {
    let mut searcher = SentenceLsh::new(num_bands).unwrap();
    for (i, s) in corpus.iter().enumerate() {
        searcher.put(s.clone(), i);
    }
    searcher
}

#[test]
fn test_disjoint_vocabularies() {
    let tokenizer = ShingleTokenizer::new(1, Some(' ')).unwrap();
    let mut searcher = SentenceLsh::new(4).unwrap();
    for line in [
        "books curry town jimbocho",
        "harbor dawn ships quiet",
        "river bridge market coffee",
    ] {
        searcher.put(Sentence::from_line(line, &tokenizer), line.to_string());
    }
    let query = Sentence::from_line("rain train station night", &tokenizer);
    let q = lsh::simhash64(query.tokens());

    // Candidates are exactly the items sharing one of the four 16-bit windows.
    let windows = |x: u64| -> Vec<u64> { (0..4).map(|b| (x >> (16 * b)) & 0xFFFF).collect() };
    let expected_candidates: Vec<_> = (0..3)
        .filter(|&i| {
            let x = searcher.fingerprint(i).unwrap();
            windows(x).iter().zip(windows(q)).any(|(a, b)| *a == b)
        })
        .collect();
    assert_eq!(searcher.candidates(&query), expected_candidates);

    let mut expected: Vec<_> = expected_candidates
        .iter()
        .map(|&i| (q.hamdist(searcher.fingerprint(i).unwrap()), i))
        .collect();
    expected.sort_unstable();
    expected.truncate(2);

    let results = searcher.knn(&query, 2).unwrap();
    assert!(results.len() <= 2);
    let results: Vec<_> = results.iter().map(|n| (n.distance, n.index)).collect();
    assert_eq!(results, expected);
}

#[test]
fn test_construction_errors() {
    for num_bands in [1, 33] {
        assert!(matches!(
            SentenceLsh::<()>::new(num_bands),
            Err(SentenceLshError::InvalidConfiguration(_))
        ));
    }
}

#[test]
fn test_query_errors_make_no_mutation() {
    let corpus = random_corpus(7, 100);
    let searcher = build(8, &corpus);
    let query = corpus[3].clone();
    let before = searcher.candidates(&query);

    assert!(matches!(
        searcher.knn(&query, 0),
        Err(SentenceLshError::InvalidArgument(_))
    ));
    let mut neighbors = vec![];
    for radius in [0., -1.] {
        assert!(matches!(
            searcher.range(&query, radius, &mut neighbors),
            Err(SentenceLshError::InvalidArgument(_))
        ));
    }
    assert!(neighbors.is_empty());
    assert_eq!(searcher.len(), 100);
    assert_eq!(searcher.candidates(&query), before);
}

#[test]
fn test_self_similarity_over_corpus() {
    let corpus = random_corpus(42, 500);
    let searcher = build(16, &corpus);
    for s in corpus.iter().step_by(25) {
        let query = Sentence::new("another line", s.tokens().to_vec());
        let nearest = searcher.nearest(&query).unwrap();
        assert_eq!(nearest.distance, 0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn knn_is_bounded_and_sorted(
        seed in any::<u64>(),
        num_bands in prop::sample::select(vec![2usize, 4, 8, 16, 32]),
        k in 1usize..30,
        query_id in 0usize..200,
    ) {
        let corpus = random_corpus(seed, 200);
        let searcher = build(num_bands, &corpus);
        let query = &corpus[query_id];
        let results = searcher.knn(query, k).unwrap();

        prop_assert!(results.len() <= k);
        prop_assert!(results.windows(2).all(|w| w[0].distance <= w[1].distance));
        prop_assert!(results.iter().all(|n| n.key.line() != query.line()));

        let eligible = searcher
            .candidates(query)
            .into_iter()
            .filter(|&i| searcher.get(i).unwrap().key().line() != query.line())
            .count();
        prop_assert_eq!(results.len(), eligible.min(k));
    }

    #[test]
    fn range_splits_candidates_by_radius(
        seed in any::<u64>(),
        num_bands in prop::sample::select(vec![2usize, 4, 8, 16, 32]),
        radius in 1u32..40,
        query_id in 0usize..200,
    ) {
        let corpus = random_corpus(seed, 200);
        let searcher = build(num_bands, &corpus);
        let query = &corpus[query_id];
        let q = lsh::simhash64(query.tokens());

        let mut neighbors = vec![];
        searcher.range(query, f64::from(radius), &mut neighbors).unwrap();
        prop_assert!(neighbors.iter().all(|n| n.distance <= radius));

        let returned: Vec<_> = neighbors.iter().map(|n| n.index).collect();
        for i in searcher.candidates(query) {
            let record = searcher.get(i).unwrap();
            if returned.contains(&i) || record.key().line() == query.line() {
                continue;
            }
            prop_assert!(q.hamdist(record.sketch()) > radius);
        }
    }
}
