//! Loading of dictionary word lists.
//!
//! A word list is plain text with one word per line. Lines are trimmed and
//! blank lines skipped; everything else is kept as written, in file order.
//! Words are neither lowercased nor deduplicated here: duplicates are
//! reported by [`AnagramSearch::new`](crate::search::AnagramSearch::new).

use crate::errors::AnagramError;

#[derive(Debug, Clone, Default)]
pub struct WordList {
    /// Words in file order.
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a word list from an in-memory string. Works in WASM builds too.
    pub fn parse_from_str(contents: &str) -> WordList {
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        WordList { words }
    }

    /// Read and parse the word list at `path`.
    ///
    /// Not available in WebAssembly builds.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<WordList, AnagramError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| AnagramError::Io {
            path: path_ref.display().to_string(),
            source,
        })?;
        let list = Self::parse_from_str(&data);
        log::debug!("Loaded {} words from {}", list.words.len(), path_ref.display());
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_file_order() {
        let list = WordList::parse_from_str("tea\neat\nate\n");
        assert_eq!(list.words, vec!["tea", "eat", "ate"]);
    }

    #[test]
    fn trims_and_skips_blank_lines() {
        let list = WordList::parse_from_str("  cat \r\n\n\t\ndog\n   \n");
        assert_eq!(list.words, vec!["cat", "dog"]);
    }

    #[test]
    fn leaves_case_and_duplicates_alone() {
        let list = WordList::parse_from_str("Cat\ncat\nCat");
        assert_eq!(list.words, vec!["Cat", "cat", "Cat"]);
    }

    #[test]
    fn empty_input_gives_empty_list() {
        assert!(WordList::parse_from_str("").words.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = WordList::load_from_path("no/such/word-list.txt").unwrap_err();
        assert!(matches!(err, AnagramError::Io { ref path, .. } if path.contains("word-list.txt")));
    }
}
