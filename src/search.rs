use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::errors::AnagramError;
use crate::letter_counter::LetterCounter;

/// Ordered words whose letters add up to the searched phrase.
pub type Combination<'a> = Vec<&'a str>;

/// Indices into `AnagramSearch::entries` for the words chosen so far.
type Path = SmallVec<[usize; 8]>;

#[derive(Debug, Clone)]
struct Entry {
    word: String,
    counter: LetterCounter,
}

/// A dictionary prepared for anagram searches.
///
/// Each word is converted to a [`LetterCounter`] once, at construction.
/// Entries keep dictionary order since that order decides the order in which
/// combinations are found.
#[derive(Debug, Clone)]
pub struct AnagramSearch {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl AnagramSearch {
    /// Build the search over `dictionary`.
    ///
    /// The dictionary must be non-empty, free of duplicates, and every word
    /// must contain at least one letter. A letterless word would never shrink
    /// the remainder, so it is rejected rather than allowed to recurse forever.
    pub fn new<S: AsRef<str>>(dictionary: &[S]) -> Result<Self, AnagramError> {
        if dictionary.is_empty() {
            return Err(AnagramError::EmptyDictionary);
        }

        let mut entries = Vec::with_capacity(dictionary.len());
        let mut index = HashMap::with_capacity(dictionary.len());
        for word in dictionary {
            let word = word.as_ref();
            let counter = LetterCounter::from_text(word);
            if counter.is_empty() {
                return Err(AnagramError::EmptyWord { word: word.to_string() });
            }
            if index.insert(word.to_string(), entries.len()).is_some() {
                return Err(AnagramError::DuplicateWord { word: word.to_string() });
            }
            entries.push(Entry {
                word: word.to_string(),
                counter,
            });
        }

        log::debug!("Prepared letter counters for {} dictionary words", entries.len());
        Ok(AnagramSearch { entries, index })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a constructed search, since `new` rejects an
    /// empty dictionary; kept as the companion of [`AnagramSearch::len`].
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dictionary words, in their original order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.word.as_str())
    }

    /// Cached counter for `word`, if it is in the dictionary.
    pub fn counter(&self, word: &str) -> Option<&LetterCounter> {
        self.index.get(word).map(|&idx| &self.entries[idx].counter)
    }

    /// Words that individually fit inside `phrase`, in dictionary order.
    pub fn pruned(&self, phrase: &str) -> Vec<&str> {
        let target = LetterCounter::from_text(phrase);
        self.prune(&target)
            .into_iter()
            .map(|idx| self.entries[idx].word.as_str())
            .collect()
    }

    /// Every combination of dictionary words that spells `phrase`.
    ///
    /// `max_words == 0` leaves the number of words per combination unbounded;
    /// a positive value caps it. Negative values are rejected.
    pub fn search(&self, phrase: &str, max_words: i32) -> Result<Vec<Combination<'_>>, AnagramError> {
        let limit = match usize::try_from(max_words) {
            Ok(0) => None,
            Ok(max) => Some(max),
            Err(_) => return Err(AnagramError::InvalidArgument { max_words }),
        };
        Ok(self.search_limited(phrase, limit))
    }

    /// Same as [`AnagramSearch::search`], with the cap as `Option` (`None` is unbounded).
    ///
    /// Combinations come out in depth-first order, trying candidates in
    /// dictionary order at every depth. A word may appear several times in
    /// one combination.
    pub fn search_limited(&self, phrase: &str, limit: Option<usize>) -> Vec<Combination<'_>> {
        let target = LetterCounter::from_text(phrase);
        let candidates = self.prune(&target);
        log::debug!(
            "Searching {} ({} letters) with {} of {} words, limit {:?}",
            target,
            target.size(),
            candidates.len(),
            self.entries.len(),
            limit
        );

        let mut found = Vec::new();
        let mut path = Path::new();
        self.explore(&target, &candidates, limit, &mut path, &mut found);

        log::debug!("Found {} combination(s)", found.len());
        found
    }

    /// Indices of the entries whose counter fits inside `target`.
    ///
    /// Only the whole phrase is checked here; words that fit the phrase but
    /// not a given remainder are rejected by the subtraction in `explore`.
    fn prune(&self, target: &LetterCounter) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| target.subtract(&entry.counter).is_some())
            .map(|(idx, _)| idx)
            .collect()
    }

    fn explore<'a>(
        &'a self,
        remainder: &LetterCounter,
        candidates: &[usize],
        limit: Option<usize>,
        path: &mut Path,
        found: &mut Vec<Combination<'a>>,
    ) {
        if remainder.is_empty() {
            found.push(path.iter().map(|&idx| self.entries[idx].word.as_str()).collect());
            return;
        }
        if matches!(limit, Some(max) if path.len() >= max) {
            return;
        }

        for &idx in candidates {
            // Every entry has at least one letter, so `rest` is strictly smaller.
            if let Some(rest) = remainder.subtract(&self.entries[idx].counter) {
                path.push(idx);
                self.explore(&rest, candidates, limit, path, found);
                path.pop();
            }
        }
    }
}
