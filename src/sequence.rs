//! Loading symbol sequences from files.
//!
//! A symbol sequence is the first line of a file, read up to but excluding
//! the line terminator and frozen as a vector of `char` symbols. Everything
//! after the first terminator is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{LevdistError, Result};

/// An ordered, immutable sequence of `char` symbols with a known length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSequence {
    symbols: Vec<char>,
}

impl SymbolSequence {
    /// Create a sequence from already-collected symbols.
    pub fn new(symbols: Vec<char>) -> Self {
        SymbolSequence { symbols }
    }

    /// Number of symbols in the sequence.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the sequence holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols as a read-only slice.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Render the sequence back into a string.
    pub fn as_string(&self) -> String {
        self.symbols.iter().collect()
    }
}

impl From<&str> for SymbolSequence {
    fn from(s: &str) -> Self {
        SymbolSequence {
            symbols: s.chars().collect(),
        }
    }
}

/// Read the first line of `path` as a symbol sequence.
///
/// The terminator is excluded; `\r\n` endings behave the same as `\n`.
/// A file without a terminator yields its whole content, an empty file
/// yields the empty sequence. Open and read failures are reported as
/// [`LevdistError::ResourceUnavailable`] carrying the offending path.
pub fn read_first_line<P: AsRef<Path>>(path: P) -> Result<SymbolSequence> {
    let path = path.as_ref();

    let file = File::open(path)
        .map_err(|e| LevdistError::resource_unavailable(path.display().to_string(), e))?;
    let mut reader = BufReader::new(file);

    let mut raw = Vec::new();
    reader
        .read_until(b'\n', &mut raw)
        .map_err(|e| LevdistError::resource_unavailable(path.display().to_string(), e))?;

    if raw.last() == Some(&b'\n') {
        raw.pop();
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
    }

    let line = String::from_utf8(raw).map_err(|e| {
        LevdistError::invalid_argument(format!(
            "input '{}' is not valid UTF-8: {e}",
            path.display()
        ))
    })?;

    // The char count is at most the byte count; reserving the latter
    // keeps this to a single fallible allocation.
    let mut symbols = Vec::new();
    symbols.try_reserve(line.len()).map_err(|_| {
        LevdistError::resource_exhausted(format!("sequence buffer of {} bytes", line.len()))
    })?;
    symbols.extend(line.chars());

    Ok(SymbolSequence::new(symbols))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_accessors() {
        let seq = SymbolSequence::from("kitten");
        assert_eq!(seq.len(), 6);
        assert!(!seq.is_empty());
        assert_eq!(seq.symbols()[0], 'k');
        assert_eq!(seq.as_string(), "kitten");
    }

    #[test]
    fn test_empty_sequence() {
        let seq = SymbolSequence::from("");
        assert_eq!(seq.len(), 0);
        assert!(seq.is_empty());
        assert_eq!(seq.as_string(), "");
    }

    #[test]
    fn test_char_symbols() {
        // Length is counted in symbols, not bytes.
        let seq = SymbolSequence::from("naïve");
        assert_eq!(seq.len(), 5);
    }
}
