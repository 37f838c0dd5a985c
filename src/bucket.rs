use crate::charclass::N_BUCKETS;
use crate::SortError;

/// One bucket per sortable byte, each able to hold every word of the list.
///
/// Buckets are filled in append order and emptied in bucket order, so a
/// distribute/collect round over the table is stable.
pub struct BucketTable {
    buckets: Vec<Vec<Vec<u8>>>,
}

impl BucketTable {
    /// Allocates [`N_BUCKETS`] buckets with room for `capacity` words each.
    ///
    /// Either every bucket is reserved or nothing is kept: a failed
    /// reservation drops the buckets built so far.
    pub fn allocate(capacity: usize) -> Result<Self, SortError> {
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(N_BUCKETS)?;
        for _ in 0..N_BUCKETS {
            let mut bucket = Vec::new();
            bucket.try_reserve_exact(capacity)?;
            buckets.push(bucket);
        }
        Ok(Self { buckets })
    }

    /// Number of words every bucket can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.buckets.iter().map(Vec::capacity).min().unwrap_or(0)
    }

    /// Number of words currently held.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Appends `word` to bucket `index`.
    ///
    /// `index` must come from [`crate::charclass::bucket_index`].
    #[inline]
    pub fn push(&mut self, index: usize, word: Vec<u8>) {
        debug_assert!(self.buckets[index].len() < self.buckets[index].capacity());
        self.buckets[index].push(word);
    }

    /// Moves the words back into `words` in bucket order, leaving every bucket empty.
    ///
    /// `words` must have exactly as many slots as the table holds words.
    pub fn drain_into(&mut self, words: &mut [Vec<u8>]) {
        debug_assert_eq!(self.len(), words.len());
        let mut slots = words.iter_mut();
        for bucket in self.buckets.iter_mut() {
            for (word, slot) in bucket.drain(..).zip(slots.by_ref()) {
                *slot = word;
            }
        }
    }

    /// Empties every bucket and keeps its storage.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
    }
}
