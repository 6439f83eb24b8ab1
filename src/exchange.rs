//! Exchange codec
//!
//! JSON import/export of the grade table. The artifact format is the bare
//! semester array, pretty-printed with 4-space indentation on export.
//! Import checks only that the top-level value is a sequence before
//! decoding rows leniently; any failure leaves existing state untouched
//! because nothing is applied until decoding succeeded in full.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use thiserror::Error;

use crate::core::{GradeTable, Semester};

/// Default name for the exported artifact
pub const EXPORT_FILE_NAME: &str = "gpa_data.json";

/// Why an import was rejected
#[derive(Debug, Error)]
pub enum ImportError {
    /// Content is not parseable JSON, or a row could not be decoded
    #[error("could not parse file: {0}")]
    Parse(#[from] serde_json::Error),
    /// Parsed fine, but the top-level value is not an array
    #[error("file does not contain a semester list")]
    NotASequence,
}

/// Serialize the table as a 4-space-indented JSON array
pub fn export_json(table: &GradeTable) -> String {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    match table.serialize(&mut ser) {
        Ok(()) => String::from_utf8(buf).unwrap_or_else(|_| "[]".to_string()),
        Err(_) => "[]".to_string(),
    }
}

/// Parse exported or hand-edited content back into semesters.
///
/// Parses to a generic value first so a wrong top-level shape is reported
/// as [`ImportError::NotASequence`] rather than a decode error.
pub fn import_json(content: &str) -> Result<Vec<Semester>, ImportError> {
    let value: Value = serde_json::from_str(content)?;
    if !value.is_array() {
        return Err(ImportError::NotASequence);
    }
    let semesters: Vec<Semester> = serde_json::from_value(value)?;
    Ok(semesters)
}
