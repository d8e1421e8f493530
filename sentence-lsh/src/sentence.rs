//! Keys of the index and tokenizers producing them.
use std::ops::Range;

use crate::errors::{Result, SentenceLshError};
use crate::shingling::ShingleIter;

/// Capability of splitting a line of text into tokens.
///
/// Any closure `Fn(&str) -> Vec<String>` is a tokenizer.
///
/// # Examples
///
/// ```
/// use sentence_lsh::{Sentence, Tokenizer};
///
/// let lowercase = |line: &str| -> Vec<String> {
///     line.split_whitespace().map(|w| w.to_lowercase()).collect()
/// };
/// assert_eq!(lowercase.tokenize("Books and Curry"), vec!["books", "and", "curry"]);
///
/// let sentence = Sentence::from_line("Books and Curry", &lowercase);
/// assert_eq!(sentence.line(), "Books and Curry");
/// ```
pub trait Tokenizer {
    /// Splits `line` into tokens.
    fn tokenize(&self, line: &str) -> Vec<String>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn tokenize(&self, line: &str) -> Vec<String> {
        self(line)
    }
}

/// A key of the index: a line of text and its tokens.
///
/// The line identifies the key; two sentences with the same line are identical
/// even if they were tokenized differently.
/// Only the tokens are used for fingerprinting.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sentence {
    line: String,
    tokens: Vec<String>,
}

impl Sentence {
    /// Creates a sentence from a line and its already-computed tokens.
    pub fn new<L, I, T>(line: L, tokens: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            line: line.into(),
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a sentence by tokenizing `line` with `tokenizer`.
    pub fn from_line<L, K>(line: L, tokenizer: &K) -> Self
    where
        L: Into<String>,
        K: Tokenizer + ?Sized,
    {
        let line = line.into();
        let tokens = tokenizer.tokenize(&line);
        Self { line, tokens }
    }

    /// Gets the line.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Gets the tokens.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Tokenizer producing w-shingles of words or characters.
///
/// Every shingle is the substring of the line spanning `window_size`
/// consecutive words (or characters), delimiters included.
///
/// # Examples
///
/// ```
/// use sentence_lsh::{ShingleTokenizer, Tokenizer};
///
/// let words = ShingleTokenizer::new(2, Some(' ')).unwrap();
/// assert_eq!(words.tokenize("the town of books"), vec!["the town", "town of", "of books"]);
///
/// let chars = ShingleTokenizer::new(3, None).unwrap();
/// assert_eq!(chars.tokenize("curry"), vec!["cur", "urr", "rry"]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ShingleTokenizer {
    window_size: usize,
    delimiter: Option<char>,
}

impl ShingleTokenizer {
    /// Creates an instance.
    ///
    /// # Arguments
    ///
    /// * `window_size` - Window size for w-shingling (must be more than 0).
    /// * `delimiter` - Delimiter for recognizing words.
    ///                 If `None`, characters are used for words.
    pub fn new(window_size: usize, delimiter: Option<char>) -> Result<Self> {
        if window_size == 0 {
            return Err(SentenceLshError::config("Window size must not be 0."));
        }
        Ok(Self {
            window_size,
            delimiter,
        })
    }

    /// Gets the window size.
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// Gets the delimiter.
    pub const fn delimiter(&self) -> Option<char> {
        self.delimiter
    }

    fn token_ranges(&self, text: &str) -> Vec<Range<usize>> {
        let mut token_ranges = vec![];
        if let Some(delim) = self.delimiter {
            let mut offset = 0;
            for word in text.split(delim) {
                if !word.is_empty() {
                    token_ranges.push(offset..offset + word.len());
                }
                offset += word.len() + delim.len_utf8();
            }
        } else {
            for (offset, c) in text.char_indices() {
                token_ranges.push(offset..offset + c.len_utf8());
            }
        }
        token_ranges
    }
}

impl Tokenizer for ShingleTokenizer {
    fn tokenize(&self, line: &str) -> Vec<String> {
        let token_ranges = self.token_ranges(line);
        if token_ranges.is_empty() {
            return vec![];
        }
        if token_ranges.len() < self.window_size {
            // Too short to fill a window.
            let span = token_ranges[0].start..token_ranges[token_ranges.len() - 1].end;
            return vec![line[span].to_string()];
        }
        ShingleIter::new(&token_ranges, self.window_size)
            .map(|span| line[span].to_string())
            .collect()
    }
}
