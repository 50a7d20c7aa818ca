//! Text analysis for the search engine.

pub mod tokenizer;

pub use tokenizer::tokenize;
