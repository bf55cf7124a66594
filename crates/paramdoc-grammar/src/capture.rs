//! Slot-addressed capture values.

use regex::Regex;

use crate::grammar::Slot;
use crate::text::restore_line_breaks;

/// Owned captures of one grammar match, addressed by [`Slot`].
///
/// Slots whose group did not participate in the match are `None`, keeping
/// "absent" distinct from "captured an empty string".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotCaptures {
    values: [Option<String>; Slot::COUNT],
}

impl SlotCaptures {
    pub(crate) fn from_match(re: &Regex, text: &str) -> Option<Self> {
        let caps = re.captures(text)?;
        let values = std::array::from_fn(|position| {
            caps.get(position + 1).map(|m| m.as_str().to_string())
        });
        Some(Self { values })
    }

    /// Borrow the value captured for `slot`.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.values
            .get(slot.index() - 1)
            .and_then(|value| value.as_deref())
    }

    /// Move the value captured for `slot` out, leaving `None` behind.
    pub fn take(&mut self, slot: Slot) -> Option<String> {
        self.values
            .get_mut(slot.index() - 1)
            .and_then(Option::take)
    }

    /// Turn line-break sentinels back into line breaks in every slot.
    ///
    /// # Examples
    /// ```
    /// use paramdoc_grammar::{Slot, annotation, preprocess};
    /// let text = preprocess("name first\nsecond");
    /// let caps = annotation()
    ///     .captures(&text)
    ///     .expect("annotation matches")
    ///     .restore_line_breaks();
    /// assert_eq!(caps.get(Slot::Description), Some("first\nsecond"));
    /// ```
    #[must_use]
    pub fn restore_line_breaks(mut self) -> Self {
        for value in self.values.iter_mut().flatten() {
            *value = restore_line_breaks(value);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::LINE_BREAK_SENTINEL;

    fn regex(source: &str) -> Regex {
        Regex::new(source).unwrap_or_else(|err| panic!("test regex must compile: {err}"))
    }

    #[test]
    fn returns_none_when_pattern_does_not_match() {
        assert!(SlotCaptures::from_match(&regex(r"^(\d+)$"), "nope").is_none());
    }

    #[test]
    fn keeps_absent_and_empty_captures_apart() {
        let caps = SlotCaptures::from_match(&regex(r"^(a)?(b)?()$"), "a")
            .unwrap_or_else(|| panic!("pattern should match"));
        assert_eq!(caps.get(Slot::Group), Some("a"));
        assert_eq!(caps.get(Slot::InputType), None);
        assert_eq!(caps.get(Slot::InputValue), Some(""));
        assert_eq!(caps.get(Slot::Description), None);
    }

    #[test]
    fn take_empties_the_slot() {
        let mut caps = SlotCaptures::from_match(&regex(r"^(a)$"), "a")
            .unwrap_or_else(|| panic!("pattern should match"));
        assert_eq!(caps.take(Slot::Group).as_deref(), Some("a"));
        assert_eq!(caps.get(Slot::Group), None);
    }

    #[test]
    fn restores_sentinels_in_all_slots() {
        let text = format!("a{LINE_BREAK_SENTINEL}b-c{LINE_BREAK_SENTINEL}d");
        let caps = SlotCaptures::from_match(&regex(r"^(.+)-(.+)$"), &text)
            .unwrap_or_else(|| panic!("pattern should match"))
            .restore_line_breaks();
        assert_eq!(caps.get(Slot::Group), Some("a\nb"));
        assert_eq!(caps.get(Slot::InputType), Some("c\nd"));
    }
}
