//! Errors found while replaying a session script.

use std::fmt;

/// A script event that cannot be replayed.
///
/// `event` is the 0-based index of the offending event; setup documents are
/// opened before event 0 and never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// The event names a document that is not open.
    UnknownDocument { event: usize, name: String },
    /// The event names an indicator channel that is not configured.
    UnknownChannel { event: usize, name: String },
    /// The caret was moved past the end of its document.
    LineOutOfRange {
        event: usize,
        name: String,
        line: usize,
        line_count: usize,
    },
    /// Inserted or deleted lines fall outside the document.
    EditOutOfRange {
        event: usize,
        name: String,
        first_line: usize,
        count: usize,
        line_count: usize,
    },
    /// A highlight range ends before it starts.
    InvertedRange { event: usize, start: usize, end: usize },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::UnknownDocument { event, name } => {
                write!(f, "Event {}: document '{}' is not open", event, name)
            }
            ScriptError::UnknownChannel { event, name } => {
                write!(f, "Event {}: no indicator channel named '{}'", event, name)
            }
            ScriptError::LineOutOfRange {
                event,
                name,
                line,
                line_count,
            } => write!(
                f,
                "Event {}: line {} is outside '{}' ({} lines)",
                event, line, name, line_count
            ),
            ScriptError::EditOutOfRange {
                event,
                name,
                first_line,
                count,
                line_count,
            } => write!(
                f,
                "Event {}: {} lines at line {} do not fit in '{}' ({} lines)",
                event, count, first_line, name, line_count
            ),
            ScriptError::InvertedRange { event, start, end } => write!(
                f,
                "Event {}: highlight range {}..{} ends before it starts",
                event, start, end
            ),
        }
    }
}

impl std::error::Error for ScriptError {}
