use crate::charclass::SENTINEL;
use crate::SortError;

/// Returns the length of the longest word, or 0 for an empty list.
pub fn max_width(words: &[Vec<u8>]) -> usize {
    words.iter().map(Vec::len).max().unwrap_or(0)
}

/// Pads every word at the end with [`SENTINEL`] up to the length of the longest word.
///
/// Storage for all words is reserved before any word is extended, so on
/// [`SortError::Allocation`] the contents of `words` are unchanged.
pub fn normalize(words: &mut [Vec<u8>]) -> Result<(), SortError> {
    let width = max_width(words);
    for word in words.iter_mut() {
        word.try_reserve_exact(width - word.len())?;
    }
    for word in words.iter_mut() {
        word.resize(width, SENTINEL);
    }
    log::trace!("Normalized {} words to width {}", words.len(), width);
    Ok(())
}

/// Removes trailing [`SENTINEL`] padding from every word.
pub fn strip_padding(words: &mut [Vec<u8>]) {
    for word in words.iter_mut() {
        let len = word
            .iter()
            .rposition(|&c| c != SENTINEL)
            .map_or(0, |i| i + 1);
        word.truncate(len);
    }
}
