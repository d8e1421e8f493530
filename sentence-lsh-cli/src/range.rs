use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use sentence_lsh::{Sentence, SentenceLsh, ShingleTokenizer};

#[derive(Parser, Debug)]
#[clap(
    name = "sentence-lsh-range",
    about = "A program to find sentences within a Hamming radius with banded SimHash."
)]
struct Args {
    /// File path to a sentence file to be indexed, one sentence per line.
    #[clap(short = 'i', long)]
    document_path: PathBuf,

    /// File path to a query file, one sentence per line.
    #[clap(short = 'q', long)]
    query_path: PathBuf,

    /// Search radius in Hamming distance of 64-bit fingerprints (must be more than 0).
    #[clap(short = 'r', long)]
    radius: f64,

    /// Number of bands in fingerprints, one of 2, 4, 8, 16, and 32.
    #[clap(short = 'b', long, default_value = "8")]
    num_bands: usize,

    /// Delimiter for recognizing words as tokens.
    /// If None, characters are used for tokens.
    #[clap(short = 'd', long)]
    delimiter: Option<char>,

    /// Window size for w-shingling in tokenization (must be more than 0).
    #[clap(short = 'w', long, default_value = "1")]
    window_size: usize,

    /// Reports indexed sentences identical to the query.
    #[clap(long)]
    include_identical: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let tokenizer = ShingleTokenizer::new(args.window_size, args.delimiter)?;
    let mut searcher = SentenceLsh::new(args.num_bands)?
        .excludes_identical(!args.include_identical)
        .shows_progress(true);

    eprintln!("Indexing sentences...");
    let start = Instant::now();
    let mut sentences = vec![];
    for (i, line) in texts_iter(File::open(&args.document_path)?).enumerate() {
        sentences.push((Sentence::from_line(line?, &tokenizer), i));
    }
    searcher.put_all_in_parallel(sentences);
    eprintln!(
        "Indexed {} sentences in {} sec",
        searcher.len(),
        start.elapsed().as_secs_f64()
    );

    eprintln!("Searching neighbors within radius {}...", args.radius);
    let start = Instant::now();
    let mut neighbors = vec![];
    println!("query,index,dist");
    for (q, line) in texts_iter(File::open(&args.query_path)?).enumerate() {
        let query = Sentence::from_line(line?, &tokenizer);
        neighbors.clear();
        searcher.range(&query, args.radius, &mut neighbors)?;
        for neighbor in &neighbors {
            println!("{q},{},{}", neighbor.index, neighbor.distance);
        }
    }
    eprintln!("Done in {} sec", start.elapsed().as_secs_f64());

    Ok(())
}

fn texts_iter<R>(rdr: R) -> impl Iterator<Item = std::io::Result<String>>
where
    R: Read,
{
    BufReader::new(rdr).lines()
}
