//! Convert grammar trees into anchored regular-expression sources.

use crate::errors::GrammarError;

use super::{Segment, Slot};

struct Emitter {
    source: String,
    next_index: usize,
    seen: [bool; Slot::COUNT],
}

impl Emitter {
    fn new() -> Self {
        Self {
            source: String::with_capacity(256),
            next_index: 1,
            seen: [false; Slot::COUNT],
        }
    }

    fn emit(&mut self, segment: &Segment) -> Result<(), GrammarError> {
        match segment {
            Segment::Literal(text) => self.source.push_str(&regex::escape(text)),
            Segment::Token(rule) => self.source.push_str(rule),
            Segment::Capture(slot, inner) => {
                self.claim(*slot)?;
                self.source.push('(');
                self.emit(inner)?;
                self.source.push(')');
            }
            Segment::Optional(inner) => {
                self.source.push_str("(?:");
                self.emit(inner)?;
                self.source.push_str(")?");
            }
            Segment::Sequence(parts) => {
                for part in parts {
                    self.emit(part)?;
                }
            }
            Segment::Choice(branches) => {
                self.source.push_str("(?:");
                for (position, branch) in branches.iter().enumerate() {
                    if position > 0 {
                        self.source.push('|');
                    }
                    self.emit(branch)?;
                }
                self.source.push(')');
            }
        }
        Ok(())
    }

    fn claim(&mut self, slot: Slot) -> Result<(), GrammarError> {
        let found = self.next_index;
        let Some(seen) = self.seen.get_mut(slot.index() - 1) else {
            return Err(GrammarError::SlotOutOfOrder { slot, found });
        };
        if *seen {
            return Err(GrammarError::DuplicateSlot(slot));
        }
        if found != slot.index() {
            return Err(GrammarError::SlotOutOfOrder { slot, found });
        }
        *seen = true;
        self.next_index += 1;
        Ok(())
    }

    fn finish(self) -> Result<String, GrammarError> {
        if let Some(missing) = Slot::ALL
            .iter()
            .zip(self.seen)
            .find_map(|(slot, seen)| (!seen).then_some(*slot))
        {
            return Err(GrammarError::MissingSlot(missing));
        }
        Ok(self.source)
    }
}

/// Build an anchored regular expression source from a grammar tree.
///
/// Captures are numbered in the order their opening parentheses appear,
/// which is a pre-order walk of the tree.
///
/// # Errors
/// Returns [`GrammarError`] when a slot is captured out of its documented
/// order, captured twice, or never captured.
pub fn build_regex_from_grammar(root: &Segment) -> Result<String, GrammarError> {
    let mut emitter = Emitter::new();
    emitter.source.push('^');
    emitter.emit(root)?;
    emitter.source.push('$');
    emitter.finish()
}
