use crate::errors::AnagramError;
use crate::search::AnagramSearch;

/// One-shot search: prepare `words` and return every combination spelling `phrase`.
///
/// `max_words` follows [`AnagramSearch::search`]: 0 is unbounded.
pub fn find_anagrams<S: AsRef<str>>(
    words: &[S],
    phrase: &str,
    max_words: i32,
) -> Result<Vec<Vec<String>>, AnagramError> {
    let search = AnagramSearch::new(words)?;
    let found = search.search(phrase, max_words)?;
    Ok(found
        .into_iter()
        .map(|combination| combination.into_iter().map(str::to_string).collect())
        .collect())
}
