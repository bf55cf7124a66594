//! Grammar tree nodes.

use super::Slot;

/// A node of a grammar tree.
///
/// Trees are built from token rules and literals, combined with sequences,
/// optionals and ordered choices. Captures tag a subtree with the [`Slot`] it
/// fills in a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text matched verbatim; regex metacharacters are escaped on compilation.
    Literal(&'static str),
    /// A raw regular-expression token rule, such as a character class.
    Token(&'static str),
    /// A capturing group filling `Slot`.
    Capture(Slot, Box<Segment>),
    /// Matches the inner segment or nothing, preferring the inner segment.
    Optional(Box<Segment>),
    /// Segments matched one after another.
    Sequence(Vec<Segment>),
    /// Ordered alternatives; earlier branches win.
    Choice(Vec<Segment>),
}

/// Build a [`Segment::Literal`].
#[must_use]
pub fn lit(text: &'static str) -> Segment {
    Segment::Literal(text)
}

/// Build a [`Segment::Token`].
#[must_use]
pub fn token(rule: &'static str) -> Segment {
    Segment::Token(rule)
}

/// Optional run of whitespace.
#[must_use]
pub fn ws() -> Segment {
    Segment::Token(r"\s*")
}

/// Build a [`Segment::Capture`].
#[must_use]
pub fn capture(slot: Slot, inner: Segment) -> Segment {
    Segment::Capture(slot, Box::new(inner))
}

/// Build a [`Segment::Optional`].
#[must_use]
pub fn optional(inner: Segment) -> Segment {
    Segment::Optional(Box::new(inner))
}

/// Build a [`Segment::Sequence`].
#[must_use]
pub fn seq(parts: impl IntoIterator<Item = Segment>) -> Segment {
    Segment::Sequence(parts.into_iter().collect())
}

/// Build a [`Segment::Choice`].
#[must_use]
pub fn choice(branches: impl IntoIterator<Item = Segment>) -> Segment {
    Segment::Choice(branches.into_iter().collect())
}

impl Segment {
    /// Slots captured within this subtree, in capture order.
    ///
    /// # Examples
    /// ```
    /// use paramdoc_grammar::{Slot, grammar::{capture, seq, token}};
    /// let tree = seq([
    ///     capture(Slot::Type, token("[a-z]+")),
    ///     capture(Slot::Field, token("[a-z]+")),
    /// ]);
    /// assert_eq!(tree.slots(), vec![Slot::Type, Slot::Field]);
    /// ```
    #[must_use]
    pub fn slots(&self) -> Vec<Slot> {
        let mut out = Vec::new();
        self.collect_slots(&mut out);
        out
    }

    fn collect_slots(&self, out: &mut Vec<Slot>) {
        match self {
            Self::Literal(_) | Self::Token(_) => {}
            Self::Capture(slot, inner) => {
                out.push(*slot);
                inner.collect_slots(out);
            }
            Self::Optional(inner) => inner.collect_slots(out),
            Self::Sequence(parts) | Self::Choice(parts) => {
                for part in parts {
                    part.collect_slots(out);
                }
            }
        }
    }
}
