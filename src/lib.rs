// Library API shared by the CLI and the WASM build
pub mod api;
pub mod errors;
pub mod format;
pub mod letter_counter;
pub mod log;
pub mod search;
pub mod word_list;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use api::find_anagrams;
pub use errors::AnagramError;
pub use format::format_combination;
pub use letter_counter::LetterCounter;
pub use search::{AnagramSearch, Combination};
pub use word_list::WordList;
