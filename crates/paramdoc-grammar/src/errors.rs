//! Error types raised while compiling a grammar tree.

use thiserror::Error;

use crate::grammar::Slot;

/// Errors surfaced while converting a grammar tree into a regular expression.
///
/// # Examples
/// ```
/// use paramdoc_grammar::{GrammarError, Slot};
/// let err = GrammarError::MissingSlot(Slot::Field);
/// assert_eq!(err.to_string(), "grammar never captures slot `field` (index 8)");
/// ```
#[derive(Debug, Error)]
pub enum GrammarError {
    /// A capture was opened at a position other than its documented index.
    #[error("slot `{slot}` captured at group {found}, expected group {expected}", expected = .slot.index())]
    SlotOutOfOrder {
        /// Slot whose capture drifted.
        slot: Slot,
        /// Capture index the compiler actually assigned.
        found: usize,
    },
    /// The same slot was captured twice.
    #[error("slot `{0}` is captured more than once")]
    DuplicateSlot(Slot),
    /// A slot never appears in the tree.
    #[error("grammar never captures slot `{0}` (index {idx})", idx = .0.index())]
    MissingSlot(Slot),
    /// The assembled source was rejected by the regex engine.
    #[error(transparent)]
    Regex(#[from] regex::Error),
}
