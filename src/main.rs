use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use anagram_solver::{format_combination, AnagramError, AnagramSearch, WordList};

/// Find every combination of dictionary words that spells a phrase
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The phrase to rearrange; several arguments are joined with spaces
    #[arg(required = true)]
    phrase: Vec<String>,

    /// Path to the word list (one word per line)
    #[arg(short, long, default_value = "dict.txt")]
    dictionary: String,

    /// Maximum number of words per combination (0 = unlimited)
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    max_words: i32,
}

fn main() -> ExitCode {
    let debug_enabled = std::env::var("ANAGRAM_DEBUG").is_ok();
    anagram_solver::log::init_logger(debug_enabled);

    match try_main(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e} [{}]", e.code());
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> Result<(), AnagramError> {
    let phrase = cli.phrase.join(" ");

    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.dictionary)?;
    let search = AnagramSearch::new(&word_list.words)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let t_search = Instant::now();
    let found = search.search(&phrase, cli.max_words)?;
    let search_secs = t_search.elapsed().as_secs_f64();

    for combination in &found {
        println!("{}", format_combination(combination));
    }

    log::info!(
        "Loaded {} words in {:.3}s; found {} combination(s) in {:.3}s",
        search.len(),
        load_secs,
        found.len(),
        search_secs
    );
    Ok(())
}
