//! Error types for letter counters, dictionary construction and searches.
//!
//! Each variant has a short code for lookup:
//!
//! - E001: `InvalidArgument` (negative word cap)
//! - E002: `InvalidLetter` (not one of a-z)
//! - E003: `InvalidCount` (negative letter count)
//! - E004: `DuplicateWord` (word listed twice in the dictionary)
//! - E005: `EmptyWord` (word without any letter)
//! - E006: `EmptyDictionary`
//! - E007: `Io` (word list could not be read)
//!
//! Note that a word that does not fit a remainder is not an error: the
//! search sees that as `None` from [`LetterCounter::subtract`].
//!
//! [`LetterCounter::subtract`]: crate::letter_counter::LetterCounter::subtract

#[derive(Debug, thiserror::Error)]
pub enum AnagramError {
    #[error("max_words must be non-negative, got {max_words}")]
    InvalidArgument { max_words: i32 },

    #[error("'{letter}' is not a letter")]
    InvalidLetter { letter: char },

    #[error("count for '{letter}' must be non-negative, got {value}")]
    InvalidCount { letter: char, value: i32 },

    #[error("duplicate dictionary word \"{word}\"")]
    DuplicateWord { word: String },

    #[error("dictionary word \"{word}\" contains no letters")]
    EmptyWord { word: String },

    #[error("dictionary is empty")]
    EmptyDictionary,

    #[error("failed to read word list from '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl AnagramError {
    pub const fn code(&self) -> &'static str {
        match self {
            AnagramError::InvalidArgument { .. } => "E001",
            AnagramError::InvalidLetter { .. } => "E002",
            AnagramError::InvalidCount { .. } => "E003",
            AnagramError::DuplicateWord { .. } => "E004",
            AnagramError::EmptyWord { .. } => "E005",
            AnagramError::EmptyDictionary => "E006",
            AnagramError::Io { .. } => "E007",
        }
    }
}
