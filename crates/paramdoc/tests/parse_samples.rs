//! Integration tests for sample parsing.
#![expect(clippy::expect_used, reason = "tests assert on successful parses")]

use paramdoc::{ParameterDescriptor, ParseError, SampleParser, SampleVariant, parse};
use rstest::rstest;

fn parse_ok(raw: &str) -> ParameterDescriptor {
    parse(raw, None).expect("annotation should parse")
}

#[test]
fn group_label_type_and_field() {
    let descriptor = parse_ok("(Login) {string} name");
    assert_eq!(descriptor.group, "Login");
    assert_eq!(descriptor.type_name.as_deref(), Some("string"));
    assert_eq!(descriptor.field, "name");
    assert!(!descriptor.optional);
}

#[test]
fn optional_field_with_quoted_default_and_description() {
    let descriptor = parse_ok(r#"{string} [user.name="John Doe"] Users fullname."#);
    assert_eq!(descriptor.type_name.as_deref(), Some("string"));
    assert_eq!(descriptor.field, "user.name");
    assert!(descriptor.optional);
    assert_eq!(descriptor.default_value.as_deref(), Some("John Doe"));
    assert_eq!(descriptor.description, "Users fullname.");
}

#[test]
fn size_constraint() {
    let descriptor = parse_ok("{string{1..4}} field");
    assert_eq!(descriptor.type_name.as_deref(), Some("string"));
    assert_eq!(descriptor.size.as_deref(), Some("1..4"));
    assert_eq!(descriptor.allowed_values, None);
}

#[rstest]
#[case(r#"{string="abc","def"} field"#, &[r#""abc""#, r#""def""#])]
#[case("{string='abc','def'} field", &["'abc'", "'def'"])]
#[case("{string=abc,def} field", &["abc", "def"])]
#[case("{Number{1-3}=1, 2, 3} field", &["1", "2", "3"])]
fn allowed_values(#[case] raw: &str, #[case] expected: &[&str]) {
    let descriptor = parse_ok(raw);
    assert_eq!(descriptor.field, "field");
    assert_eq!(
        descriptor.allowed_values,
        Some(expected.iter().map(ToString::to_string).collect())
    );
}

#[test]
fn full_annotation() {
    let descriptor = parse_ok(
        "(Body) <text=John Doe> {String{1..4}} [user.name='John Doe'] Users fullname.",
    );
    assert_eq!(
        descriptor,
        ParameterDescriptor {
            group: "Body".into(),
            input_type: "text".into(),
            input_value: Some("John Doe".into()),
            type_name: Some("String".into()),
            size: Some("1..4".into()),
            allowed_values: None,
            optional: true,
            field: "user.name".into(),
            default_value: Some("John Doe".into()),
            description: "Users fullname.".into(),
        }
    );
}

#[test]
fn multi_line_description_is_kept_verbatim() {
    let descriptor = parse_ok("{String} name First line.\nSecond line.\n  Indented third.");
    assert_eq!(
        descriptor.description,
        "First line.\nSecond line.\n  Indented third."
    );
}

#[test]
fn multi_line_description_is_unindented() {
    let descriptor = parse_ok("name\n    First line.\n      Nested.\n    Last.");
    assert_eq!(descriptor.description, "\nFirst line.\n  Nested.\nLast.");
}

#[rstest]
#[case("(Login) {string} name")]
#[case(r#"{string} [user.name="John Doe"] Users fullname."#)]
#[case("(Q) <number=3> {Number{1..9}=1,2,3} [page=1] Page to fetch.")]
#[case("(Q) {String=\"a\",\"b\"} [tags[]='a'] Tag filter.\nSecond line.")]
fn reconstructed_annotations_round_trip(#[case] raw: &str) {
    let first = parse_ok(raw);
    let second = parse_ok(&first.to_annotation());
    assert_eq!(first, second);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("(Login)")]
#[case("(Login) {string}")]
#[case("= no field")]
fn annotations_without_field_fail(#[case] raw: &str) {
    let err = parse(raw, None).expect_err("annotation should fail");
    assert!(matches!(err, ParseError::GrammarMismatch { .. }));
}

#[test]
fn group_state_follows_successful_parses_only() {
    let mut parser = SampleParser::new(SampleVariant::Parameter);
    parser.parse("(Login) name").expect("annotation should parse");
    assert_eq!(parser.path(), "local.parameter.samples.Login");

    parser.parse("(Admin)").expect_err("group alone should fail");
    assert_eq!(parser.last_group(), "Login");

    parser.parse("{String} other").expect("annotation should parse");
    assert_eq!(parser.path(), "local.parameter.samples.Parameter");
}

#[test]
fn header_adapter_reuses_the_grammar() {
    let raw = r#"(Auth) {String} [Authorization="Bearer x"] Access token."#;
    let header = SampleVariant::Header.parse(raw).expect("annotation should parse");
    let param = SampleVariant::Parameter.parse(raw).expect("annotation should parse");
    assert_eq!(header, param);

    let mut parser = SampleParser::new(SampleVariant::Header);
    let descriptor = parser.parse("{String} Accept").expect("annotation should parse");
    assert_eq!(descriptor.group, "Header");
    assert_eq!(parser.path(), "local.header.samples.Header");
}
