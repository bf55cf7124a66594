//! Sample variants sharing the parameter sample grammar.
//!
//! Parameter samples and header samples use the same annotation syntax.
//! They differ only in the default group and in where the documentation
//! tree stores the parsed descriptors.

use std::fmt;
use std::str::FromStr;

use crate::descriptor::ParameterDescriptor;
use crate::error::{ParseError, UnknownVariant};
use crate::parser::parse;

/// How a descriptor is stored at its output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertMethod {
    /// Append to the list at the path.
    Push,
}

impl InsertMethod {
    /// Return the method name as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Push => "push",
        }
    }
}

/// Kind of sample annotation being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SampleVariant {
    /// Parameter samples, grouped under `Parameter` unless labelled.
    #[default]
    Parameter,
    /// Header samples, grouped under `Header` unless labelled.
    Header,
}

impl SampleVariant {
    /// Default group supplied to the parser; `None` lets the parser fall back
    /// to `"Parameter"`.
    #[must_use]
    pub const fn default_group(self) -> Option<&'static str> {
        match self {
            Self::Parameter => None,
            Self::Header => Some("Header"),
        }
    }

    /// Prefix of every output path of this variant.
    #[must_use]
    pub const fn path_prefix(self) -> &'static str {
        match self {
            Self::Parameter => "local.parameter.samples",
            Self::Header => "local.header.samples",
        }
    }

    /// Dotted output path for descriptors of `group`.
    ///
    /// # Examples
    /// ```
    /// use paramdoc::SampleVariant;
    /// assert_eq!(SampleVariant::Header.path("Auth"), "local.header.samples.Auth");
    /// ```
    #[must_use]
    pub fn path(self, group: &str) -> String {
        format!("{}.{group}", self.path_prefix())
    }

    /// Parse `content` with this variant's default group.
    ///
    /// # Errors
    /// Returns [`ParseError::GrammarMismatch`] when the annotation does not
    /// conform to the grammar.
    pub fn parse(self, content: &str) -> Result<ParameterDescriptor, ParseError> {
        parse(content, self.default_group())
    }

    /// How descriptors are stored at the output path.
    #[must_use]
    pub const fn method(self) -> InsertMethod {
        InsertMethod::Push
    }

    /// Descriptor fields whose text is rendered as markdown.
    #[must_use]
    pub const fn markdown_fields(self) -> &'static [&'static str] {
        match self {
            Self::Parameter => &["description", "type"],
            Self::Header => &["description"],
        }
    }

    /// Markdown fields whose rendered paragraph tags are stripped again.
    #[must_use]
    pub const fn markdown_remove_p_tags(self) -> &'static [&'static str] {
        match self {
            Self::Parameter => &["type"],
            Self::Header => &[],
        }
    }

    /// Return the variant name as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Parameter => "parameter",
            Self::Header => "header",
        }
    }
}

impl fmt::Display for SampleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "param" | "parameter" => Ok(Self::Parameter),
            "header" => Ok(Self::Header),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests assert on successful parses")]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SampleVariant::Parameter, "Parameter")]
    #[case(SampleVariant::Header, "Header")]
    fn unlabelled_annotations_use_variant_group(
        #[case] variant: SampleVariant,
        #[case] group: &str,
    ) {
        let descriptor = variant.parse("{String} name").expect("annotation should parse");
        assert_eq!(descriptor.group, group);
    }

    #[test]
    fn labels_win_over_variant_group() {
        let descriptor = SampleVariant::Header
            .parse("(Auth) {String} Authorization")
            .expect("annotation should parse");
        assert_eq!(descriptor.group, "Auth");
    }

    #[test]
    fn paths_join_prefix_and_group() {
        assert_eq!(
            SampleVariant::Parameter.path("Login"),
            "local.parameter.samples.Login"
        );
        assert_eq!(SampleVariant::Header.path(""), "local.header.samples.");
    }

    #[test]
    fn element_metadata() {
        assert_eq!(SampleVariant::Parameter.method().as_str(), "push");
        assert_eq!(SampleVariant::Header.method(), InsertMethod::Push);
        assert_eq!(
            SampleVariant::Parameter.markdown_fields(),
            &["description", "type"]
        );
        assert_eq!(SampleVariant::Header.markdown_fields(), &["description"]);
        assert_eq!(SampleVariant::Parameter.markdown_remove_p_tags(), &["type"]);
        assert!(SampleVariant::Header.markdown_remove_p_tags().is_empty());
    }

    #[rstest]
    #[case("param", SampleVariant::Parameter)]
    #[case("Parameter", SampleVariant::Parameter)]
    #[case(" HEADER ", SampleVariant::Header)]
    fn parses_variant_names(#[case] name: &str, #[case] expected: SampleVariant) {
        assert_eq!(name.parse::<SampleVariant>().ok(), Some(expected));
    }

    #[test]
    fn rejects_unknown_variant_names() {
        let err = "body"
            .parse::<SampleVariant>()
            .expect_err("unknown variant should fail");
        assert!(err.to_string().contains("unknown sample variant"));
    }
}
