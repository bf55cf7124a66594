//! The structured result of parsing one annotation.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::defaults::DEFAULT_INPUT_TYPE;

/// A parsed parameter sample annotation.
///
/// With the `serde` feature the descriptor serialises using the field names
/// of the documentation tree (`inputType`, `type`, `allowedValues`, …) and
/// omits absent optional values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ParameterDescriptor {
    /// Group label, or the default group of the parsing variant.
    pub group: String,
    /// Display hint, `"text"` unless the annotation names one.
    pub input_type: String,
    /// Sample literal attached to the display hint.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub input_value: Option<String>,
    /// Formal type name.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", skip_serializing_if = "Option::is_none")
    )]
    pub type_name: Option<String>,
    /// Raw size constraint, such as `1..4`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub size: Option<String>,
    /// Permitted values; only present when the type carried a list.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub allowed_values: Option<Vec<String>>,
    /// Whether the field was wrapped in brackets.
    pub optional: bool,
    /// Field name, including any array suffix.
    pub field: String,
    /// Default value with its quotes removed.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub default_value: Option<String>,
    /// Unindented trailing description; empty when absent.
    pub description: String,
}

impl ParameterDescriptor {
    /// Render the descriptor back into annotation syntax.
    ///
    /// The group is always written out and defaults are always double quoted.
    /// Parsing the rendered text yields an equal descriptor as long as no
    /// value contains its own closing delimiter.
    ///
    /// # Examples
    /// ```
    /// use paramdoc::parse;
    /// let descriptor = parse("(Login) {string=a,b} [name=x] The name.", None)
    ///     .expect("annotation is well formed");
    /// assert_eq!(
    ///     descriptor.to_annotation(),
    ///     r#"(Login) {string=a,b} [name="x"] The name."#
    /// );
    /// ```
    #[must_use]
    pub fn to_annotation(&self) -> String {
        let mut out = format!("({}) ", self.group);
        if self.input_type != DEFAULT_INPUT_TYPE || self.input_value.is_some() {
            out.push('<');
            out.push_str(&self.input_type);
            if let Some(value) = &self.input_value {
                out.push('=');
                out.push_str(value);
            }
            out.push_str("> ");
        }
        if let Some(type_name) = &self.type_name {
            out.push('{');
            out.push_str(type_name);
            if let Some(size) = &self.size {
                out.push('{');
                out.push_str(size);
                out.push('}');
            }
            if let Some(values) = &self.allowed_values {
                out.push('=');
                out.push_str(&values.join(","));
            }
            out.push_str("} ");
        }
        let mut field = self.field.clone();
        if let Some(default) = &self.default_value {
            field.push_str("=\"");
            field.push_str(default);
            field.push('"');
        }
        if self.optional {
            field = format!("[{field}]");
        }
        out.push_str(&field);
        if !self.description.is_empty() {
            out.push(' ');
            out.push_str(&self.description);
        }
        out
    }
}
