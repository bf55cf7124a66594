//! Grammar trees and their compilation into a single matcher.

mod annotation;
mod compiler;
mod segment;
mod slot;

use regex::Regex;

use crate::capture::SlotCaptures;
use crate::errors::GrammarError;

pub use annotation::{annotation, annotation_grammar};
pub use compiler::build_regex_from_grammar;
pub use segment::{Segment, capture, choice, lit, optional, seq, token, ws};
pub use slot::Slot;

/// A grammar tree compiled into one anchored regular expression.
///
/// Every [`Slot`] is known to sit at its documented capture index.
#[derive(Debug, Clone)]
pub struct CompiledGrammar {
    regex: Regex,
}

impl CompiledGrammar {
    /// The underlying regular expression.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// The regular expression source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Match `text` and collect the captured slots, or `None` on no match.
    #[must_use]
    pub fn captures(&self, text: &str) -> Option<SlotCaptures> {
        SlotCaptures::from_match(&self.regex, text)
    }
}

/// Build and compile a grammar tree.
///
/// # Errors
/// Returns [`GrammarError`] when the tree violates the slot order or the
/// generated source cannot be compiled.
pub fn compile_grammar(root: &Segment) -> Result<CompiledGrammar, GrammarError> {
    let source = build_regex_from_grammar(root)?;
    let regex = Regex::new(&source)?;
    Ok(CompiledGrammar { regex })
}
