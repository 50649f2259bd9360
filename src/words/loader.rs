//! Word list parsing
//!
//! Lists are plain text with one answer per line. Blank lines and `#` comments
//! are skipped, and so is anything that is not a `WORD_LENGTH`-letter ASCII
//! word. A repeated answer keeps its first position, so the words assigned to
//! earlier days never shift.

use super::WordListError;
use crate::core::{WORD_LENGTH, Word};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Answers from raw list entries, in list order
///
/// # Examples
/// ```
/// use daily_wordle::words::loader::parse_entries;
///
/// let words = parse_entries(["Fiona", "# comment", "cat", "fiona", "crane"]);
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["fiona", "crane"]);
/// ```
#[must_use]
pub fn parse_entries<'a>(entries: impl IntoIterator<Item = &'a str>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();
    let mut invalid = 0usize;
    let mut repeated = 0usize;

    for entry in entries.into_iter().map(str::trim) {
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }
        match Word::new(entry) {
            Ok(word) if word.len() == WORD_LENGTH => {
                if seen.insert(word.text().to_string()) {
                    words.push(word);
                } else {
                    repeated += 1;
                }
            }
            _ => invalid += 1,
        }
    }

    if invalid > 0 {
        warn!(invalid, "skipped word list entries that are not {WORD_LENGTH}-letter words");
    }
    if repeated > 0 {
        debug!(repeated, "skipped repeated word list entries");
    }
    words
}

/// Read and parse a list file
///
/// # Errors
/// Returns `WordListError::Read` if the file cannot be read.
pub fn read_list(path: &Path) -> Result<Vec<Word>, WordListError> {
    let content = fs::read_to_string(path).map_err(|source| WordListError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_entries(content.lines());
    debug!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn entries_are_lowercased_and_trimmed() {
        let words = parse_entries(["  Crane ", "SLATE"]);
        assert_eq!(texts(&words), ["crane", "slate"]);
    }

    #[test]
    fn wrong_length_and_non_letters_are_skipped() {
        let words = parse_entries(["crane", "cat", "two words", "", "sl4te", "planets", "slate"]);
        assert_eq!(texts(&words), ["crane", "slate"]);
    }

    #[test]
    fn repeats_keep_first_position() {
        let words = parse_entries(["fiona", "crane", "FIONA", "slate"]);
        assert_eq!(texts(&words), ["fiona", "crane", "slate"]);
    }

    #[test]
    fn comments_are_skipped() {
        let words = parse_entries(["# week one", "fiona", "#crane"]);
        assert_eq!(texts(&words), ["fiona"]);
    }

    #[test]
    fn read_list_parses_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "fiona\n\n  crane  \nno way\n# done\nslate\n").unwrap();

        let words = read_list(file.path()).unwrap();
        assert_eq!(texts(&words), ["fiona", "crane", "slate"]);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_list(&path).unwrap_err();
        assert!(matches!(&err, WordListError::Read { path: p, .. } if *p == path));
        assert!(err.to_string().contains("missing.txt"));
    }
}
