//! Annotation input splitting and JSON output.

use std::io::Write;

use paramdoc::{ParameterDescriptor, SampleParser, SampleVariant};
use serde::Serialize;

use crate::error::CliError;

/// One output line: the descriptor and where the documentation tree stores it.
#[derive(Debug, Serialize)]
pub struct SampleRecord<'a> {
    /// Dotted output path of the descriptor's group.
    pub path: String,
    /// The parsed descriptor.
    pub descriptor: &'a ParameterDescriptor,
}

/// Options for a batch of annotations.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Variant used for default group and output path.
    pub variant: SampleVariant,
    /// Group replacing the variant's default group.
    pub default_group: Option<String>,
    /// Pretty-print each JSON object.
    pub pretty: bool,
}

/// Split stdin text into annotations separated by blank lines.
///
/// # Examples
/// ```
/// use paramdoc_cli::output::split_annotations;
/// let blocks = split_annotations("a one\n  more\n\n\nb two\n");
/// assert_eq!(blocks, vec!["a one\n  more", "b two"]);
/// ```
#[must_use]
pub fn split_annotations(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }
    blocks
}

/// Parse every annotation and write one JSON object per success to `out`.
///
/// Annotations that do not parse are logged and counted; the rest of the
/// batch still runs.
///
/// # Errors
/// Returns [`CliError`] when writing or serialising fails.
pub fn process<W: Write>(
    annotations: &[String],
    options: &RunOptions,
    out: &mut W,
) -> Result<usize, CliError> {
    let mut parser = SampleParser::new(options.variant);
    let mut failed = 0usize;
    for annotation in annotations {
        match parser.parse_in_group(annotation, options.default_group.as_deref()) {
            Ok(descriptor) => {
                let record = SampleRecord {
                    path: parser.path(),
                    descriptor: &descriptor,
                };
                if options.pretty {
                    serde_json::to_writer_pretty(&mut *out, &record)?;
                } else {
                    serde_json::to_writer(&mut *out, &record)?;
                }
                writeln!(out)?;
            }
            Err(err) => {
                tracing::error!(error = %err, "skipping annotation");
                failed += 1;
            }
        }
    }
    out.flush()?;
    Ok(failed)
}
