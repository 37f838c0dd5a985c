use crate::bucket::BucketTable;
use crate::charclass::{bucket_index, N_BUCKETS};
use crate::SortError;

/// How words are redistributed in each pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Distribution {
    /// One bucket per byte, each sized for the whole list.
    #[default]
    Buckets,
    /// Counts per byte, prefix sums and a scatter into one scratch list.
    Counting,
}

/// LSD radix sorter over normalized words.
pub struct LsdRadixSorter<'a> {
    words: &'a mut [Vec<u8>],
    width: usize,
}

impl<'a> LsdRadixSorter<'a> {
    /// Sorts `words` in place, one pass per position from the last to the first.
    ///
    /// The words must already be normalized to a common width.
    pub fn sort(words: &'a mut [Vec<u8>], distribution: Distribution) -> Result<(), SortError> {
        if words.is_empty() {
            return Ok(());
        }
        let width = verify_words(words)?;
        log::debug!(
            "Sorting {} words of width {} by {:?}",
            words.len(),
            width,
            distribution
        );
        let mut sorter = Self { words, width };
        match distribution {
            Distribution::Buckets => sorter.sort_by_buckets(),
            Distribution::Counting => sorter.sort_by_counting(),
        }
    }

    fn sort_by_buckets(&mut self) -> Result<(), SortError> {
        let mut table = BucketTable::allocate(self.words.len())?;
        for level in (0..self.width).rev() {
            log::trace!("Sorting pass: {}/{}", self.width - level, self.width);
            self.distribute(&mut table, level)?;
            table.drain_into(self.words);
        }
        Ok(())
    }

    fn distribute(&mut self, table: &mut BucketTable, level: usize) -> Result<(), SortError> {
        for i in 0..self.words.len() {
            let c = self.words[i][level];
            let Some(index) = bucket_index(c) else {
                // Puts the words taken so far back so none is lost.
                table.drain_into(&mut self.words[..i]);
                return Err(SortError::Format {
                    index: i,
                    position: level,
                    byte: c,
                });
            };
            table.push(index, std::mem::take(&mut self.words[i]));
        }
        Ok(())
    }

    fn sort_by_counting(&mut self) -> Result<(), SortError> {
        let n_words = self.words.len();
        let mut keys = Vec::new();
        keys.try_reserve_exact(n_words)?;
        let mut sorted = Vec::new();
        sorted.try_reserve_exact(n_words)?;
        sorted.resize_with(n_words, Vec::new);

        for level in (0..self.width).rev() {
            log::trace!("Sorting pass: {}/{}", self.width - level, self.width);

            // Counts occurrences at this level.
            let mut counts = [0usize; N_BUCKETS];
            keys.clear();
            for (i, word) in self.words.iter().enumerate() {
                let c = word[level];
                let key = bucket_index(c).ok_or(SortError::Format {
                    index: i,
                    position: level,
                    byte: c,
                })?;
                counts[key] += 1;
                keys.push(key);
            }

            // Computes cumulative sums
            for i in 1..N_BUCKETS {
                counts[i] += counts[i - 1];
            }

            // Scatters from the back to keep equal keys in order.
            for i in (0..n_words).rev() {
                let key = keys[i];
                counts[key] -= 1;
                sorted[counts[key]] = std::mem::take(&mut self.words[i]);
            }
            self.words.swap_with_slice(&mut sorted);
        }
        Ok(())
    }
}

/// Checks that all words share one width and use only sortable bytes.
///
/// Returns the common width.
pub fn verify_words(words: &[Vec<u8>]) -> Result<usize, SortError> {
    let width = words.first().map_or(0, Vec::len);
    for (index, word) in words.iter().enumerate() {
        if word.len() != width {
            return Err(SortError::Unnormalized {
                index,
                expected: width,
                found: word.len(),
            });
        }
        if let Some(position) = word.iter().position(|&c| bucket_index(c).is_none()) {
            return Err(SortError::Format {
                index,
                position,
                byte: word[position],
            });
        }
    }
    Ok(width)
}
