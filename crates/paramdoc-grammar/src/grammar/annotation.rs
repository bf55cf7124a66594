//! The parameter sample annotation grammar.
//!
//! Example annotation:
//!
//! ```text
//! (Login) <text=John Doe> {String{1..4}="a","b"} [user.name='John Doe'] Users fullname.
//! ```

use std::sync::LazyLock;

use super::{
    CompiledGrammar, Segment, Slot, capture, choice, compile_grammar, lit, optional, seq, token,
    ws,
};

const INPUT_TYPE_CHARS: &str = r"[a-zA-Z0-9()# ;:./\\\[\]_-]+";
const TYPE_CHARS: &str = r"[a-zA-Z0-9()#:./\\\[\]_-]+";
const FIELD_CHARS: &str = r"[a-zA-Z0-9:./\\_-]+";
const ARRAY_SUFFIX: &str = r"\[[a-zA-Z0-9./\\_-]*\]";
const LAZY_TEXT: &str = ".+?";

/// `( label )`
fn group_label() -> Segment {
    seq([
        ws(),
        optional(seq([
            lit("("),
            ws(),
            capture(Slot::Group, token(LAZY_TEXT)),
            ws(),
            lit(")"),
            ws(),
        ])),
    ])
}

/// `< inputType = inputValue >`
fn input_hint() -> Segment {
    seq([
        ws(),
        optional(seq([
            lit("<"),
            ws(),
            capture(Slot::InputType, token(INPUT_TYPE_CHARS)),
            ws(),
            optional(seq([
                lit("="),
                ws(),
                capture(Slot::InputValue, token(LAZY_TEXT)),
            ])),
            ws(),
            lit(">"),
            ws(),
        ])),
    ])
}

/// `{ type { size } = allowed }`
fn type_descriptor() -> Segment {
    seq([
        ws(),
        optional(seq([
            lit("{"),
            ws(),
            capture(Slot::Type, token(TYPE_CHARS)),
            ws(),
            optional(seq([
                lit("{"),
                ws(),
                capture(Slot::Size, token(LAZY_TEXT)),
                ws(),
                lit("}"),
                ws(),
            ])),
            ws(),
            optional(seq([
                lit("="),
                ws(),
                capture(Slot::AllowedValues, token(LAZY_TEXT)),
            ])),
            ws(),
            lit("}"),
            ws(),
        ])),
    ])
}

/// `"value"`, `'value'` or a bare value ended by whitespace, `]` or the end.
fn default_value() -> Segment {
    optional(seq([
        ws(),
        lit("="),
        ws(),
        choice([
            seq([
                lit("\""),
                capture(Slot::DefaultDoubleQuoted, token(r#"[^"]*"#)),
                lit("\""),
            ]),
            seq([
                lit("'"),
                capture(Slot::DefaultSingleQuoted, token("[^']*")),
                lit("'"),
            ]),
            seq([
                capture(Slot::DefaultBare, token(".*?")),
                choice([token(r"\s"), lit("]"), token("$")]),
            ]),
        ]),
    ]))
}

/// `[ name[] = default ]`, the leading bracket marking the field optional.
fn field() -> Segment {
    capture(
        Slot::FieldWrapper,
        seq([
            optional(lit("[")),
            ws(),
            capture(
                Slot::Field,
                seq([token(FIELD_CHARS), optional(token(ARRAY_SUFFIX))]),
            ),
            default_value(),
            ws(),
            optional(lit("]")),
            ws(),
        ]),
    )
}

/// Grammar tree of a parameter sample annotation.
///
/// The description capture runs to the end of the text, so callers must join
/// multi-line annotations into one line first (see [`crate::text::preprocess`]).
#[must_use]
pub fn annotation_grammar() -> Segment {
    seq([
        group_label(),
        input_hint(),
        type_descriptor(),
        field(),
        optional(capture(Slot::Description, token(".*"))),
    ])
}

static ANNOTATION: LazyLock<CompiledGrammar> = LazyLock::new(|| {
    compile_grammar(&annotation_grammar())
        .unwrap_or_else(|err| panic!("annotation grammar must compile: {err}"))
});

/// The compiled annotation grammar, built on first use.
#[must_use]
pub fn annotation() -> &'static CompiledGrammar {
    &ANNOTATION
}
