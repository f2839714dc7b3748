// file: src/text/mod.rs
// description: text normalization and tokenization module exports
// reference: internal module structure

pub mod normalizer;
pub mod patterns;
pub mod tokenizer;

pub use normalizer::{normalize, strip_diacritics};
pub use tokenizer::{split_sentences, tokenize};
