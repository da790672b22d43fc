//! Execute a full file-to-file conversion.

use std::fs;
use std::path::PathBuf;

use super::{CliError, DocFormat, input};
use crate::convert::convert;

/// Options for the convert command
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Path to the input document
    pub input: PathBuf,
    /// Path to the output file
    pub output: PathBuf,
}

/// Run one conversion: read, parse, convert, then write.
///
/// The output file is only opened once the full text has been computed, so
/// a failing conversion never leaves a partial file behind.
pub fn execute_convert(options: &ConvertOptions) -> Result<(), CliError> {
    let text = fs::read_to_string(&options.input)?;
    let format = DocFormat::from_path(&options.input);
    let doc = input::parse_document(&text, format)?;

    let rendered = convert(&doc)?;

    fs::write(&options.output, rendered)?;
    Ok(())
}
