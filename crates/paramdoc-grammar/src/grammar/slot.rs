//! Capture slots of the parameter sample annotation.

use std::fmt;

/// Named capture positions of the annotation grammar.
///
/// Each slot owns a fixed, one-based capture index. The grammar compiler
/// refuses trees whose captures open in any other order, so code reading
/// matches by slot never drifts when the tree is edited.
///
/// | index | slot                  | captures                                 |
/// |-------|-----------------------|------------------------------------------|
/// | 1     | `Group`               | text inside `( … )`                      |
/// | 2     | `InputType`           | hint inside `< … >`                      |
/// | 3     | `InputValue`          | sample after `=` inside `< … >`          |
/// | 4     | `Type`                | type name inside `{ … }`                 |
/// | 5     | `Size`                | size inside the nested `{ … }`           |
/// | 6     | `AllowedValues`       | raw list after `=` inside `{ … }`        |
/// | 7     | `FieldWrapper`        | whole field segment, brackets included   |
/// | 8     | `Field`               | field name with optional `[…]` suffix    |
/// | 9     | `DefaultDoubleQuoted` | default written as `"…"`                 |
/// | 10    | `DefaultSingleQuoted` | default written as `'…'`                 |
/// | 11    | `DefaultBare`         | unquoted default                         |
/// | 12    | `Description`         | trailing free text                       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Parenthesised group label.
    Group,
    /// Display hint type name.
    InputType,
    /// Sample literal attached to the display hint.
    InputValue,
    /// Formal type name.
    Type,
    /// Size constraint of the type.
    Size,
    /// Unsplit list of allowed values.
    AllowedValues,
    /// Field segment including the optional-marker bracket.
    FieldWrapper,
    /// Field name.
    Field,
    /// Default value in double quotes.
    DefaultDoubleQuoted,
    /// Default value in single quotes.
    DefaultSingleQuoted,
    /// Default value without quotes.
    DefaultBare,
    /// Trailing description.
    Description,
}

impl Slot {
    /// Number of slots in the grammar.
    pub const COUNT: usize = 12;

    /// Every slot in capture order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Group,
        Self::InputType,
        Self::InputValue,
        Self::Type,
        Self::Size,
        Self::AllowedValues,
        Self::FieldWrapper,
        Self::Field,
        Self::DefaultDoubleQuoted,
        Self::DefaultSingleQuoted,
        Self::DefaultBare,
        Self::Description,
    ];

    /// One-based capture group index of the slot.
    ///
    /// # Examples
    /// ```
    /// use paramdoc_grammar::Slot;
    /// assert_eq!(Slot::Group.index(), 1);
    /// assert_eq!(Slot::Description.index(), 12);
    /// ```
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Group => 1,
            Self::InputType => 2,
            Self::InputValue => 3,
            Self::Type => 4,
            Self::Size => 5,
            Self::AllowedValues => 6,
            Self::FieldWrapper => 7,
            Self::Field => 8,
            Self::DefaultDoubleQuoted => 9,
            Self::DefaultSingleQuoted => 10,
            Self::DefaultBare => 11,
            Self::Description => 12,
        }
    }

    /// Return the slot name as a string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::InputType => "input_type",
            Self::InputValue => "input_value",
            Self::Type => "type",
            Self::Size => "size",
            Self::AllowedValues => "allowed_values",
            Self::FieldWrapper => "field_wrapper",
            Self::Field => "field",
            Self::DefaultDoubleQuoted => "default_double_quoted",
            Self::DefaultSingleQuoted => "default_single_quoted",
            Self::DefaultBare => "default_bare",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_slots_in_index_order() {
        for (position, slot) in Slot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), position + 1, "slot {slot} out of order");
        }
    }

    #[test]
    fn displays_snake_case_name() {
        assert_eq!(Slot::DefaultBare.to_string(), "default_bare");
        assert_eq!(Slot::InputType.to_string(), "input_type");
    }
}
