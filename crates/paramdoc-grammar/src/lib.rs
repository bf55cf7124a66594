//! Grammar and text utilities for parameter sample annotations.
//!
//! The crate describes the annotation grammar as an explicit tree of
//! segments, compiles it into one anchored regular expression with a fixed
//! capture layout, and provides the pure helpers the parser runs around a
//! match: line-break escaping, unindenting and allowed-value tokenisation.

mod allowed_values;
mod capture;
mod errors;
pub mod grammar;
pub mod text;

pub use allowed_values::{AllowedValueRule, tokenize_allowed_values};
pub use capture::SlotCaptures;
pub use errors::GrammarError;
pub use grammar::{CompiledGrammar, Segment, Slot, annotation, compile_grammar};
pub use text::{LINE_BREAK_SENTINEL, preprocess, restore_line_breaks, unindent};
