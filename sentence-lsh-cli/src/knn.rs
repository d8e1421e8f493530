use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use sentence_lsh::{Sentence, SentenceLsh, ShingleTokenizer};

#[derive(Parser, Debug)]
#[clap(
    name = "sentence-lsh-knn",
    about = "A program to find the k nearest sentences with banded SimHash."
)]
struct Args {
    /// File path to a sentence file to be indexed, one sentence per line.
    #[clap(short = 'i', long)]
    document_path: PathBuf,

    /// File path to a query file, one sentence per line.
    #[clap(short = 'q', long)]
    query_path: PathBuf,

    /// Number of neighbors to find for each query (must be more than 0).
    #[clap(short = 'k', long, default_value = "5")]
    k: usize,

    /// Number of bands in fingerprints, one of 2, 4, 8, 16, and 32.
    /// The larger this value, the more candidates are compared,
    /// but the more time it takes to search.
    #[clap(short = 'b', long, default_value = "8")]
    num_bands: usize,

    /// Delimiter for recognizing words as tokens.
    /// If None, characters are used for tokens.
    #[clap(short = 'd', long)]
    delimiter: Option<char>,

    /// Window size for w-shingling in tokenization (must be more than 0).
    #[clap(short = 'w', long, default_value = "1")]
    window_size: usize,

    /// Disables parallel construction.
    #[clap(short = 'p', long)]
    disable_parallel: bool,

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

    {
        eprintln!("Indexing sentences...");
        let start = Instant::now();
        let sentences = texts_iter(File::open(&args.document_path)?)
            .enumerate()
            .map(|(i, line)| line.map(|line| (Sentence::from_line(line, &tokenizer), i)))
            .collect::<Result<Vec<_>, _>>()?;
        if args.disable_parallel {
            for (sentence, i) in sentences {
                searcher.put(sentence, i);
            }
        } else {
            searcher.put_all_in_parallel(sentences);
        }
        eprintln!(
            "Indexed {} sentences in {} sec, consuming {} MiB for buckets",
            searcher.len(),
            start.elapsed().as_secs_f64(),
            searcher.memory_in_bytes() as f64 / (1024. * 1024.)
        );
    }

    let searcher = searcher.shows_progress(false);
    eprintln!("Searching nearest neighbors...");
    let start = Instant::now();
    println!("query,index,dist");
    for (q, line) in texts_iter(File::open(&args.query_path)?).enumerate() {
        let query = Sentence::from_line(line?, &tokenizer);
        for neighbor in searcher.knn(&query, args.k)? {
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
