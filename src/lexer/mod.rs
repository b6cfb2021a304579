//! Lexical analysis module.
//!
//! This module contains the hand-written scanner that converts source text
//! into tokens one call at a time. It handles:
//!
//! - Single-character punctuation and operators (no multi-character fusion)
//! - Recognition of keywords, identifiers and integer literals
//! - Graceful degradation of unknown bytes into `Illegal` tokens

pub mod lexer;
pub mod tokens;
