// file: src/text/patterns.rs
// description: compiled regex patterns for tokenization and sentence splitting
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Letters, numbers and underscore. Combining marks end a run.
    pub static ref WORD: Regex = Regex::new(
        r"[\p{L}\p{N}_]+"
    ).expect("WORD regex is valid");

    // Same alphabet plus the whole Arabic block, harakat included.
    pub static ref EXTENDED_WORD: Regex = Regex::new(
        r"[\p{L}\p{N}_\x{0600}-\x{06FF}]+"
    ).expect("EXTENDED_WORD regex is valid");

    // A period followed by the whitespace run that ends the sentence.
    pub static ref SENTENCE_BREAK: Regex = Regex::new(
        r"\.\s+"
    ).expect("SENTENCE_BREAK regex is valid");
}
