//! Values the parser substitutes for absent annotation segments.

/// Group used when neither the annotation nor the caller names one.
pub const FALLBACK_GROUP: &str = "Parameter";

/// Display hint used when the annotation has no `<…>` segment.
pub const DEFAULT_INPUT_TYPE: &str = "text";

/// Fallback values applied while assembling a descriptor.
///
/// # Examples
/// ```
/// use paramdoc::ParserDefaults;
/// let defaults = ParserDefaults::default().with_input_type("string");
/// assert_eq!(defaults.fallback_group, "Parameter");
/// assert_eq!(defaults.input_type, "string");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserDefaults {
    /// Group used when the annotation has no label and the caller supplies no
    /// default group.
    pub fallback_group: String,
    /// Display hint used when the annotation has none.
    pub input_type: String,
}

impl Default for ParserDefaults {
    fn default() -> Self {
        Self {
            fallback_group: FALLBACK_GROUP.to_string(),
            input_type: DEFAULT_INPUT_TYPE.to_string(),
        }
    }
}

impl ParserDefaults {
    /// Replace the fallback group.
    #[must_use]
    pub fn with_fallback_group(mut self, group: impl Into<String>) -> Self {
        self.fallback_group = group.into();
        self
    }

    /// Replace the default display hint.
    #[must_use]
    pub fn with_input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let defaults = ParserDefaults::default();
        assert_eq!(defaults.fallback_group, "Parameter");
        assert_eq!(defaults.input_type, "text");
    }

    #[test]
    fn builders_replace_selected_fields() {
        let defaults = ParserDefaults::default().with_fallback_group("Body");
        assert_eq!(defaults.fallback_group, "Body");
        assert_eq!(defaults.input_type, "text");
    }
}
