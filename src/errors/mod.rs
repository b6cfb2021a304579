//! Error types for consumers of the lexer.
//!
//! The scanner itself never fails; these errors back the strict
//! tokenization policy, which rejects the first illegal byte together with
//! its byte offset.

pub mod errors;
