//! A visited cursor position.

use crate::document::DocumentId;
use serde::Serialize;

/// One visited cursor position inside an open document.
///
/// `line` is 0-based. The location does not own its document; it is only
/// valid while `line` is below the document's current line count, which the
/// owning stack keeps true by reacting to edit notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub document: DocumentId,
    pub line: usize,
    pub column: usize,
    /// Columns past the end of the line (caret in virtual space)
    pub virtual_space: usize,
}

impl Location {
    /// Creates a location with no virtual space.
    pub fn new(document: DocumentId, line: usize, column: usize) -> Self {
        Self {
            document,
            line,
            column,
            virtual_space: 0,
        }
    }

    /// Sets the virtual space offset.
    pub fn with_virtual_space(mut self, virtual_space: usize) -> Self {
        self.virtual_space = virtual_space;
        self
    }

    /// Returns true if both locations are on the same line of the same document.
    ///
    /// Column and virtual space are ignored.
    pub fn same_line_as(&self, other: &Location) -> bool {
        self.document == other.document && self.line == other.line
    }

    /// Returns true if the line exists in a document with `line_count` lines.
    pub fn is_valid_for(&self, line_count: usize) -> bool {
        self.line < line_count
    }
}
