use std::ops::Range;

/// Iterator over the byte spans of w-shingles, given the byte ranges of tokens.
pub struct ShingleIter<'a> {
    token_ranges: &'a [Range<usize>],
    window_size: usize,
    position: usize,
}

impl<'a> ShingleIter<'a> {
    pub const fn new(token_ranges: &'a [Range<usize>], window_size: usize) -> Self {
        Self {
            token_ranges,
            window_size,
            position: 0,
        }
    }
}

impl<'a> Iterator for ShingleIter<'a> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.window_size == 0 || self.token_ranges.len() < self.position + self.window_size {
            return None;
        }
        let window = &self.token_ranges[self.position..self.position + self.window_size];
        self.position += 1;
        Some(window[0].start..window[self.window_size - 1].end)
    }
}
