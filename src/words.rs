//! Reading word lists.
use crate::SortError;

/// Splits `text` into words, one per line.
///
/// Lines may end with `\n` or `\r\n`, and empty lines are skipped. Every
/// other byte must be an ASCII letter or digit.
///
/// # Errors
///
/// [`SortError::Parse`] with the 1-based line and column of the first
/// offending byte.
pub fn parse_words(text: &[u8]) -> Result<Vec<Vec<u8>>, SortError> {
    let mut words = Vec::new();
    for (i, line) in text.split(|&c| c == b'\n').enumerate() {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if line.is_empty() {
            continue;
        }
        if let Some(j) = line.iter().position(|c| !c.is_ascii_alphanumeric()) {
            return Err(SortError::Parse {
                line: i + 1,
                column: j + 1,
                byte: line[j],
            });
        }
        words.try_reserve(1)?;
        words.push(line.to_vec());
    }
    log::debug!("Parsed {} words", words.len());
    Ok(words)
}
