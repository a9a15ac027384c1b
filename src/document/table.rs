//! Document handles and the session document table.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Opaque, non-owning handle to an open document.
///
/// Handles are compared by value. A [`DocumentTable`] never hands out the same
/// handle twice, so a handle kept after its document closed can never refer
/// to a different document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DocumentId(u64);

impl DocumentId {
    /// Returns the raw handle value.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct DocumentEntry {
    name: String,
    line_count: usize,
}

/// Table of the documents currently open in a session.
///
/// Documents are kept in the order they were opened.
#[derive(Debug, Clone)]
pub struct DocumentTable {
    documents: IndexMap<DocumentId, DocumentEntry>,
    next_id: u64,
}

impl DocumentTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            documents: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Opens a document and returns its handle.
    ///
    /// A document always has at least one line, so a `line_count` of zero is
    /// stored as one.
    pub fn open(&mut self, name: impl Into<String>, line_count: usize) -> DocumentId {
        let id = DocumentId(self.next_id);
        self.next_id += 1;
        self.documents.insert(
            id,
            DocumentEntry {
                name: name.into(),
                line_count: line_count.max(1),
            },
        );
        id
    }

    /// Closes a document. Returns false if the handle was not open.
    pub fn close(&mut self, id: DocumentId) -> bool {
        self.documents.shift_remove(&id).is_some()
    }

    /// Closes every document. Issued handles stay retired.
    pub fn clear(&mut self) {
        self.documents.clear();
    }

    pub fn is_open(&self, id: DocumentId) -> bool {
        self.documents.contains_key(&id)
    }

    /// Returns the current line count of an open document.
    pub fn line_count(&self, id: DocumentId) -> Option<usize> {
        self.documents.get(&id).map(|entry| entry.line_count)
    }

    /// Returns the display name of an open document.
    pub fn name(&self, id: DocumentId) -> Option<&str> {
        self.documents.get(&id).map(|entry| entry.name.as_str())
    }

    /// Finds the first open document with the given name.
    pub fn find(&self, name: &str) -> Option<DocumentId> {
        self.documents
            .iter()
            .find(|(_, entry)| entry.name == name)
            .map(|(id, _)| *id)
    }

    /// Replaces the line count after a bulk edit (reload, external change).
    ///
    /// Returns false if the handle was not open.
    pub fn set_line_count(&mut self, id: DocumentId, line_count: usize) -> bool {
        match self.documents.get_mut(&id) {
            Some(entry) => {
                entry.line_count = line_count.max(1);
                true
            }
            None => false,
        }
    }

    /// Grows the line count after `count` lines were inserted.
    pub fn adjust_for_insert(&mut self, id: DocumentId, count: usize) -> bool {
        match self.documents.get_mut(&id) {
            Some(entry) => {
                entry.line_count += count;
                true
            }
            None => false,
        }
    }

    /// Shrinks the line count after `count` lines were deleted.
    pub fn adjust_for_delete(&mut self, id: DocumentId, count: usize) -> bool {
        match self.documents.get_mut(&id) {
            Some(entry) => {
                entry.line_count = entry.line_count.saturating_sub(count).max(1);
                true
            }
            None => false,
        }
    }

    /// Iterates over open documents in opening order.
    pub fn iter(&self) -> impl Iterator<Item = (DocumentId, &str)> {
        self.documents
            .iter()
            .map(|(id, entry)| (*id, entry.name.as_str()))
    }

    /// Returns the number of open documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Default for DocumentTable {
    fn default() -> Self {
        Self::new()
    }
}
