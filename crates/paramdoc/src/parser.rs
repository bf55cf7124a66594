//! Parameter sample parsing.
//!
//! [`parse`] matches one annotation against the compiled grammar and
//! assembles a [`ParameterDescriptor`] from the captures. [`SampleParser`]
//! adds the group state consumed by output-path queries.

use paramdoc_grammar::{
    Slot, annotation, preprocess, text::contains_sentinel, tokenize_allowed_values, unindent,
};

use crate::defaults::ParserDefaults;
use crate::descriptor::ParameterDescriptor;
use crate::error::ParseError;
use crate::group_state::GroupState;
use crate::variant::SampleVariant;

/// Parse `content` with the standard fallback values.
///
/// `default_group` names the group used when the annotation has no
/// `( … )` label; without it the group falls back to `"Parameter"`.
///
/// # Errors
/// Returns [`ParseError::GrammarMismatch`] when the annotation does not
/// contain a field name in the expected position.
///
/// # Examples
/// ```
/// use paramdoc::parse;
/// let descriptor = parse("{string{1..4}} field", None).expect("annotation is well formed");
/// assert_eq!(descriptor.type_name.as_deref(), Some("string"));
/// assert_eq!(descriptor.size.as_deref(), Some("1..4"));
/// assert_eq!(descriptor.group, "Parameter");
/// ```
pub fn parse(
    content: &str,
    default_group: Option<&str>,
) -> Result<ParameterDescriptor, ParseError> {
    parse_with_defaults(content, default_group, &ParserDefaults::default())
}

/// Parse `content`, substituting `defaults` for absent segments.
///
/// # Errors
/// Returns [`ParseError::GrammarMismatch`] when the annotation does not
/// contain a field name in the expected position.
pub fn parse_with_defaults(
    content: &str,
    default_group: Option<&str>,
    defaults: &ParserDefaults,
) -> Result<ParameterDescriptor, ParseError> {
    if contains_sentinel(content) {
        log::warn!(
            "annotation contains U+FFFF; those characters will be read as line breaks: {content:?}"
        );
    }

    let Some(captures) = annotation().captures(&preprocess(content)) else {
        log::debug!("annotation rejected by parameter sample grammar: {content:?}");
        return Err(ParseError::mismatch(content));
    };
    let mut caps = captures.restore_line_breaks();

    let Some(field) = present(caps.take(Slot::Field)) else {
        log::debug!("annotation matched without a field name: {content:?}");
        return Err(ParseError::mismatch(content));
    };

    let allowed_values = caps
        .get(Slot::AllowedValues)
        .filter(|raw| !raw.is_empty())
        .map(tokenize_allowed_values);

    let group = present(caps.take(Slot::Group))
        .or_else(|| present(default_group.map(str::to_string)))
        .unwrap_or_else(|| defaults.fallback_group.clone());

    let optional = caps
        .get(Slot::FieldWrapper)
        .is_some_and(|wrapper| wrapper.starts_with('['));

    let default_value = present(caps.take(Slot::DefaultDoubleQuoted))
        .or_else(|| present(caps.take(Slot::DefaultSingleQuoted)))
        .or_else(|| present(caps.take(Slot::DefaultBare)));

    let description = unindent(caps.get(Slot::Description).unwrap_or_default());

    Ok(ParameterDescriptor {
        group,
        input_type: present(caps.take(Slot::InputType))
            .unwrap_or_else(|| defaults.input_type.clone()),
        input_value: present(caps.take(Slot::InputValue)),
        type_name: present(caps.take(Slot::Type)),
        size: present(caps.take(Slot::Size)),
        allowed_values,
        optional,
        field,
        default_value,
        description,
    })
}

/// Empty captures count as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

/// Parser for one sample variant that remembers the last parsed group.
///
/// The group state only changes when a parse succeeds, so [`path`](Self::path)
/// always refers to the most recent well-formed annotation.
///
/// # Examples
/// ```
/// use paramdoc::{SampleParser, SampleVariant};
/// let mut parser = SampleParser::new(SampleVariant::Header);
/// parser.parse("{String} Authorization Bearer token.").expect("annotation is well formed");
/// assert_eq!(parser.path(), "local.header.samples.Header");
/// assert!(parser.parse("(Broken)").is_err());
/// assert_eq!(parser.last_group(), "Header");
/// ```
#[derive(Debug, Clone)]
pub struct SampleParser {
    variant: SampleVariant,
    defaults: ParserDefaults,
    groups: GroupState,
}

impl SampleParser {
    /// Create a parser for `variant` with the standard fallback values.
    #[must_use]
    pub fn new(variant: SampleVariant) -> Self {
        Self {
            variant,
            defaults: ParserDefaults::default(),
            groups: GroupState::default(),
        }
    }

    /// Replace the fallback values.
    #[must_use]
    pub fn with_defaults(mut self, defaults: ParserDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// The variant this parser routes output for.
    #[must_use]
    pub fn variant(&self) -> SampleVariant {
        self.variant
    }

    /// Parse one annotation and record its group.
    ///
    /// # Errors
    /// Returns [`ParseError::GrammarMismatch`] when the annotation does not
    /// conform; the recorded group is left untouched.
    pub fn parse(&mut self, content: &str) -> Result<ParameterDescriptor, ParseError> {
        self.parse_in_group(content, None)
    }

    /// Parse one annotation using `default_group` instead of the variant's
    /// default group.
    ///
    /// # Errors
    /// Returns [`ParseError::GrammarMismatch`] when the annotation does not
    /// conform; the recorded group is left untouched.
    pub fn parse_in_group(
        &mut self,
        content: &str,
        default_group: Option<&str>,
    ) -> Result<ParameterDescriptor, ParseError> {
        let default_group = default_group.or_else(|| self.variant.default_group());
        let descriptor = parse_with_defaults(content, default_group, &self.defaults)?;
        self.groups.record(&descriptor.group);
        log::trace!(
            "parsed {} field `{}` in group `{}`",
            self.variant,
            descriptor.field,
            descriptor.group
        );
        Ok(descriptor)
    }

    /// Group of the last successfully parsed annotation; empty before any.
    #[must_use]
    pub fn last_group(&self) -> &str {
        self.groups.current()
    }

    /// Output path for the last successfully parsed group.
    #[must_use]
    pub fn path(&self) -> String {
        self.variant.path(self.groups.current())
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests assert on successful parses")]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn bare_field_uses_every_fallback() {
        let descriptor = parse("name", None).expect("bare field should parse");
        assert_eq!(
            descriptor,
            ParameterDescriptor {
                group: "Parameter".into(),
                input_type: "text".into(),
                input_value: None,
                type_name: None,
                size: None,
                allowed_values: None,
                optional: false,
                field: "name".into(),
                default_value: None,
                description: String::new(),
            }
        );
    }

    #[test]
    fn caller_default_group_beats_fallback() {
        let descriptor = parse("name", Some("Body")).expect("bare field should parse");
        assert_eq!(descriptor.group, "Body");
        let descriptor = parse("name", Some("")).expect("bare field should parse");
        assert_eq!(descriptor.group, "Parameter");
    }

    #[test]
    fn custom_defaults_apply() {
        let defaults = ParserDefaults::default()
            .with_fallback_group("Query")
            .with_input_type("string");
        let descriptor =
            parse_with_defaults("name", None, &defaults).expect("bare field should parse");
        assert_eq!(descriptor.group, "Query");
        assert_eq!(descriptor.input_type, "string");
    }

    #[rstest]
    #[case(r#"name="quoted" d"#, Some("quoted"))]
    #[case("name='single' d", Some("single"))]
    #[case("name=bare d", Some("bare"))]
    #[case(r#"[name=""] d"#, None)]
    #[case("[name=] d", None)]
    #[case("name d", None)]
    fn resolves_default_values(#[case] raw: &str, #[case] expected: Option<&str>) {
        let descriptor = parse(raw, None).expect("annotation should parse");
        assert_eq!(descriptor.default_value.as_deref(), expected);
    }

    #[rstest]
    #[case("[name]", true)]
    #[case("[name", true)]
    #[case("name]", false)]
    #[case("name", false)]
    fn leading_bracket_marks_optional(#[case] raw: &str, #[case] optional: bool) {
        let descriptor = parse(raw, None).expect("annotation should parse");
        assert_eq!(descriptor.optional, optional);
        assert_eq!(descriptor.field, "name");
    }

    #[test]
    fn input_hint_is_captured() {
        let descriptor =
            parse("<text=John Doe> [user.name] Name.", None).expect("annotation should parse");
        assert_eq!(descriptor.input_type, "text");
        assert_eq!(descriptor.input_value.as_deref(), Some("John Doe"));
        assert!(descriptor.optional);
    }

    #[test]
    fn mismatch_reports_original_text() {
        let err = parse("  (Group)  ", None).expect_err("group alone should fail");
        assert_eq!(
            err,
            ParseError::GrammarMismatch {
                annotation: "  (Group)  ".into()
            }
        );
    }

    #[test]
    fn parser_keeps_group_after_failure() {
        let mut parser = SampleParser::new(SampleVariant::Parameter);
        assert_eq!(parser.last_group(), "");
        parser.parse("(Login) name").expect("annotation should parse");
        assert!(parser.parse("").is_err());
        assert_eq!(parser.last_group(), "Login");
        assert_eq!(parser.path(), "local.parameter.samples.Login");
    }

    #[test]
    fn sample_parser_applies_custom_defaults() {
        let mut parser = SampleParser::new(SampleVariant::Parameter)
            .with_defaults(ParserDefaults::default().with_fallback_group("Query"));
        assert_eq!(parser.variant(), SampleVariant::Parameter);
        parser.parse("page").expect("annotation should parse");
        assert_eq!(parser.path(), "local.parameter.samples.Query");
    }

    #[test]
    fn parse_in_group_overrides_variant_default() {
        let mut parser = SampleParser::new(SampleVariant::Header);
        let descriptor = parser
            .parse_in_group("name", Some("Cookies"))
            .expect("annotation should parse");
        assert_eq!(descriptor.group, "Cookies");
        assert_eq!(parser.path(), "local.header.samples.Cookies");
    }
}
