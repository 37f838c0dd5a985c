//! LSD radix sort for alphanumeric words.
//!
//! Words are byte strings over `'0'-'9'`, `'A'-'Z'` and `'a'-'z'`. They are
//! first padded at the end with [`SENTINEL`] to a common width, then sorted
//! one position at a time from the last to the first, distributing words into
//! one bucket per byte. The collation is `sentinel < digits < upper < lower`,
//! so a word sorts before every longer word it is a prefix of.
//!
//! ```
//! let mut words = vec![b"bb".to_vec(), b"a".to_vec(), b"ccc".to_vec()];
//! alnum_radix::normalize(&mut words).unwrap();
//! alnum_radix::sort(&mut words).unwrap();
//! alnum_radix::strip_padding(&mut words);
//! assert_eq!(words, vec![b"a".to_vec(), b"bb".to_vec(), b"ccc".to_vec()]);
//! ```
pub mod bubblesort;
pub mod bucket;
pub mod charclass;
mod error;
pub mod intsort;
pub mod normalize;
pub mod radixsort;
pub mod words;

pub use bubblesort::bubble_sort;
pub use charclass::{CharClass, SENTINEL};
pub use error::SortError;
pub use intsort::radix_sort_u64;
pub use normalize::{max_width, normalize, strip_padding};
pub use radixsort::{verify_words, Distribution, LsdRadixSorter};
pub use words::parse_words;

/// Sorts normalized `words` in place with bucket distribution.
pub fn sort(words: &mut [Vec<u8>]) -> Result<(), SortError> {
    LsdRadixSorter::sort(words, Distribution::Buckets)
}

/// Sorts normalized `words` in place with the given distribution.
pub fn sort_with(words: &mut [Vec<u8>], distribution: Distribution) -> Result<(), SortError> {
    LsdRadixSorter::sort(words, distribution)
}

/// Sorts alphanumeric strings, handling padding internally.
///
/// ```
/// use alnum_radix::{sort_strings, Distribution};
///
/// let words = vec!["pear".to_string(), "Fig".to_string(), "10".to_string()];
/// let sorted = sort_strings(words, Distribution::Counting).unwrap();
/// assert_eq!(sorted, ["10", "Fig", "pear"]);
/// ```
pub fn sort_strings(
    words: Vec<String>,
    distribution: Distribution,
) -> Result<Vec<String>, SortError> {
    let mut words: Vec<Vec<u8>> = words.into_iter().map(String::into_bytes).collect();
    for (index, word) in words.iter().enumerate() {
        if let Some(position) = word.iter().position(|c| !c.is_ascii_alphanumeric()) {
            return Err(SortError::Format {
                index,
                position,
                byte: word[position],
            });
        }
    }
    normalize(&mut words)?;
    sort_with(&mut words, distribution)?;
    strip_padding(&mut words);
    words
        .into_iter()
        .enumerate()
        .map(|(index, word)| {
            String::from_utf8(word).map_err(|e| {
                let position = e.utf8_error().valid_up_to();
                SortError::Format {
                    index,
                    position,
                    byte: e.as_bytes()[position],
                }
            })
        })
        .collect()
}
