//! Integration tests for the anagram solver.
//!
//! These drive the public API the way the CLI does: load a word list from
//! disk, build the search once, then run several phrases against it.

use anagram_solver::{
    find_anagrams, format_combination, AnagramError, AnagramSearch, LetterCounter, WordList,
};

fn load_test_words() -> Vec<String> {
    WordList::load_from_path("tests/fixtures/test_words.txt")
        .expect("Failed to read test word list")
        .words
}

fn formatted(found: &[Vec<&str>]) -> Vec<String> {
    found.iter().map(|c| format_combination(c)).collect()
}

#[test]
fn fixture_loads_in_file_order() {
    let words = load_test_words();
    assert_eq!(words.len(), 15);
    assert_eq!(words[0], "george");
    assert_eq!(words[14], "tan");
}

#[test]
fn single_word_anagrams() {
    let search = AnagramSearch::new(&load_test_words()).unwrap();
    let found = search.search("eat", 0).unwrap();
    assert_eq!(formatted(&found), vec!["[eat]", "[tea]", "[ate]"]);
}

#[test]
fn two_word_cap_on_a_name() {
    let search = AnagramSearch::new(&load_test_words()).unwrap();
    let found = search.search("George Bush", 2).unwrap();
    assert_eq!(formatted(&found), vec!["[george, bush]", "[bush, george]"]);
}

#[test]
fn uncapped_search_is_a_superset() {
    let search = AnagramSearch::new(&load_test_words()).unwrap();
    let all = search.search("George Bush", 0).unwrap();
    for cap in 1..=4 {
        for combination in search.search("George Bush", cap).unwrap() {
            assert!(all.contains(&combination));
        }
    }
    let target = LetterCounter::from_text("George Bush");
    for combination in &all {
        let letters: String = combination.concat();
        assert_eq!(LetterCounter::from_text(&letters), target);
    }
    assert!(all.contains(&vec!["shrub", "ego", "g", "e"]));
}

#[test]
fn phrase_with_no_fitting_words() {
    let search = AnagramSearch::new(&load_test_words()).unwrap();
    assert!(search.pruned("xyz").is_empty());
    assert!(search.search("xyz", 0).unwrap().is_empty());
}

#[test]
fn empty_phrase_prints_empty_list() {
    let search = AnagramSearch::new(&load_test_words()).unwrap();
    let found = search.search("", 0).unwrap();
    assert_eq!(formatted(&found), vec!["[]"]);
}

#[test]
fn duplicate_word_in_list_is_reported() {
    let words = WordList::parse_from_str("a\nb\na\n").words;
    let err = AnagramSearch::new(&words).unwrap_err();
    assert_eq!(err.code(), "E004");
    assert_eq!(err.to_string(), "duplicate dictionary word \"a\"");
}

#[test]
fn convenience_api_matches_search() {
    let words = load_test_words();
    let owned = find_anagrams(&words, "tea", 1).unwrap();
    assert_eq!(owned, vec![vec!["eat"], vec!["tea"], vec!["ate"]]);
    assert!(matches!(
        find_anagrams(&words, "tea", -1),
        Err(AnagramError::InvalidArgument { max_words: -1 })
    ));
}
