// file: src/text/tokenizer.rs
// description: word tokenization and sentence splitting
// reference: https://docs.rs/regex

use super::patterns::{EXTENDED_WORD, SENTENCE_BREAK, WORD};

/// Splits text into word tokens.
///
/// With `extended_alphabet` the Arabic block (U+0600–U+06FF) counts as word
/// characters, so vocalized Arabic is not broken apart at its harakat.
pub fn tokenize(text: &str, extended_alphabet: bool) -> Vec<String> {
    let pattern = if extended_alphabet { &*EXTENDED_WORD } else { &*WORD };
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Splits on whitespace that directly follows a period.
///
/// Fragments are trimmed and empty ones dropped; the last fragment keeps
/// whatever ending it had.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK.find_iter(text) {
        // keep the period with its sentence
        push_fragment(&mut sentences, &text[start..m.start() + 1]);
        start = m.end();
    }
    push_fragment(&mut sentences, &text[start..]);

    sentences
}

fn push_fragment(sentences: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
