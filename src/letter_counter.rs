use std::fmt;
use std::ops::Add;

use crate::errors::AnagramError;

pub const ALPHABET_SIZE: usize = 26;

/// Per-letter counts of some text, case-folded to `a..=z`, plus their sum.
///
/// `total` always equals the sum of `counts`; every constructor and
/// [`LetterCounter::set`] keeps the two in step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterCounter {
    counts: [u32; ALPHABET_SIZE],
    total: u64,
}

/// Index of `ch` in `counts`, or `None` when it is not an ASCII letter.
fn letter_index(ch: char) -> Option<usize> {
    if ch.is_ascii_alphabetic() {
        Some(ch.to_ascii_lowercase() as usize - 'a' as usize)
    } else {
        None
    }
}

impl LetterCounter {
    pub const fn empty() -> Self {
        LetterCounter {
            counts: [0; ALPHABET_SIZE],
            total: 0,
        }
    }

    /// Count the letters of `text`, ignoring digits, punctuation and whitespace.
    pub fn from_text(text: &str) -> Self {
        let mut counter = Self::empty();
        for idx in text.chars().filter_map(letter_index) {
            counter.counts[idx] += 1;
            counter.total += 1;
        }
        counter
    }

    pub fn get(&self, letter: char) -> Result<u32, AnagramError> {
        let idx = letter_index(letter).ok_or(AnagramError::InvalidLetter { letter })?;
        Ok(self.counts[idx])
    }

    pub fn set(&mut self, letter: char, value: i32) -> Result<(), AnagramError> {
        let idx = letter_index(letter).ok_or(AnagramError::InvalidLetter { letter })?;
        let value = u32::try_from(value).map_err(|_| AnagramError::InvalidCount { letter, value })?;
        self.total = self.total - u64::from(self.counts[idx]) + u64::from(value);
        self.counts[idx] = value;
        Ok(())
    }

    pub const fn size(&self) -> u64 {
        self.total
    }

    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Letter-wise sum. A single letter saturates at `u32::MAX`; `total`
    /// still matches the stored counts.
    pub fn add(&self, other: &LetterCounter) -> LetterCounter {
        let mut sum = Self::empty();
        for idx in 0..ALPHABET_SIZE {
            sum.counts[idx] = self.counts[idx].saturating_add(other.counts[idx]);
            sum.total += u64::from(sum.counts[idx]);
        }
        sum
    }

    /// Remove `other`'s letters from this counter.
    ///
    /// Returns `None` as soon as some letter of `other` is more frequent than
    /// here, i.e. when this counter cannot supply all of `other`'s letters.
    /// This is the feasibility test run at every node of the search.
    pub fn subtract(&self, other: &LetterCounter) -> Option<LetterCounter> {
        let mut diff = Self::empty();
        for idx in 0..ALPHABET_SIZE {
            diff.counts[idx] = self.counts[idx].checked_sub(other.counts[idx])?;
        }
        diff.total = self.total - other.total;
        Some(diff)
    }
}

impl From<&str> for LetterCounter {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl Add for LetterCounter {
    type Output = LetterCounter;

    fn add(self, other: LetterCounter) -> LetterCounter {
        LetterCounter::add(&self, &other)
    }
}

/// Letters in alphabetical order, each repeated by its count: `[aet]`.
impl fmt::Display for LetterCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, &count) in self.counts.iter().enumerate() {
            let letter = (b'a' + idx as u8) as char;
            for _ in 0..count {
                write!(f, "{letter}")?;
            }
        }
        write!(f, "]")
    }
}
