//! Parameter sample annotation parsing.
//!
//! Documentation comments describe request parameters and headers with a
//! compact one-line syntax:
//!
//! ```text
//! (Login) <text=John Doe> {String{1..4}} [user.name="John Doe"] Users fullname.
//! ```
//!
//! [`parse`] turns such an annotation into a [`ParameterDescriptor`].
//! [`SampleVariant`] selects between parameter and header samples, which
//! share the grammar but default to different groups and output paths, and
//! [`SampleParser`] remembers the group of the last successful parse for
//! output-path queries.

mod defaults;
mod descriptor;
mod error;
mod group_state;
mod parser;
mod variant;

pub use defaults::{DEFAULT_INPUT_TYPE, FALLBACK_GROUP, ParserDefaults};
pub use descriptor::ParameterDescriptor;
pub use error::{ParseError, UnknownVariant};
pub use group_state::GroupState;
pub use parser::{SampleParser, parse, parse_with_defaults};
pub use variant::{InsertMethod, SampleVariant};
