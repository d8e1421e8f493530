use sentence_lsh::{Sentence, SentenceLsh, ShingleTokenizer};

fn main() {
    let documents = vec![
        "Welcome to Jimbocho, the town of books and curry!",
        "Welcome to Jimbocho, the city of books and curry!",
        "We welcome you to Jimbocho, the town of books and curry.",
        "Welcome to the town of books and curry, Jimbocho!",
    ];

    // Creates a tokenizer for character trigrams.
    let tokenizer = ShingleTokenizer::new(3, None).unwrap();
    // Creates a searcher splitting fingerprints into 16 bands of 4 bits.
    let mut searcher = SentenceLsh::new(16).unwrap();
    for (i, doc) in documents.iter().enumerate() {
        searcher.put(Sentence::from_line(*doc, &tokenizer), i);
    }

    // Identical lines are excluded, so the first document finds the others.
    let query = Sentence::from_line(documents[0], &tokenizer);
    for neighbor in searcher.knn(&query, 2).unwrap() {
        println!(
            "[index={},dist={}] {}",
            neighbor.index,
            neighbor.distance,
            neighbor.key.line()
        );
    }

    // Searches all documents within Hamming distance 16.
    let mut neighbors = vec![];
    searcher.range(&query, 16., &mut neighbors).unwrap();
    println!("#neighbors within 16 bits = {}", neighbors.len());
}
