//! Edit-aware ordered list of visited locations.

use super::location::Location;
use crate::document::DocumentId;

/// Ordered list of [`Location`]s, oldest first and most recent last.
///
/// The stack has no capacity of its own; the owning
/// [`NavigationHistory`](super::NavigationHistory) bounds the combined size of
/// its two stacks. Entries of many documents interleave, and every
/// document-scoped operation only touches entries of that document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationStack {
    entries: Vec<Location>,
}

impl NavigationStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a location as the most recent entry.
    pub fn push(&mut self, location: Location) {
        self.entries.push(location);
    }

    /// Removes and returns the most recent entry.
    pub fn pop(&mut self) -> Option<Location> {
        self.entries.pop()
    }

    /// Removes and returns the oldest entry.
    pub fn pop_oldest(&mut self) -> Option<Location> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }

    /// Returns the most recent entry.
    pub fn last(&self) -> Option<&Location> {
        self.entries.last()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates from the oldest to the most recent entry.
    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Location] {
        &self.entries
    }

    /// Reacts to `count` lines deleted at `first_line` of `document`.
    ///
    /// Entries inside the deleted range are removed, entries below it move up
    /// by `count`, entries above it are untouched. Returns true only if an
    /// entry was removed; a removal is followed by [`optimize`](Self::optimize)
    /// because it can bring two visits of the same line next to each other.
    pub fn lines_deleted(&mut self, document: DocumentId, first_line: usize, count: usize) -> bool {
        if count == 0 {
            return false;
        }

        let end = first_line.saturating_add(count);
        let mut removed = false;

        // Walk backwards so removals don't shift entries still to be visited
        for index in (0..self.entries.len()).rev() {
            let entry = self.entries[index];
            if entry.document != document || entry.line < first_line {
                continue;
            }
            if entry.line < end {
                self.entries.remove(index);
                removed = true;
            } else {
                self.entries[index].line -= count;
            }
        }

        if removed {
            self.optimize();
        }
        removed
    }

    /// Reacts to `count` lines inserted at `first_line` of `document`.
    ///
    /// Entries at or below `first_line` move down by `count`.
    pub fn lines_inserted(&mut self, document: DocumentId, first_line: usize, count: usize) {
        for entry in self
            .entries
            .iter_mut()
            .filter(|entry| entry.document == document && entry.line >= first_line)
        {
            entry.line += count;
        }
    }

    /// Collapses adjacent entries on the same line of the same document.
    ///
    /// The earlier of two neighbours is kept. Returns true if anything was
    /// removed.
    pub fn optimize(&mut self) -> bool {
        let before = self.entries.len();
        self.entries.dedup_by(|later, earlier| later.same_line_as(earlier));
        self.entries.len() != before
    }

    /// Removes every entry of a closed document.
    pub fn remove_document(&mut self, document: DocumentId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.document != document);

        let changed = self.entries.len() != before;
        if changed {
            self.optimize();
        }
        changed
    }

    /// Removes entries of `document` that point past its last line.
    ///
    /// Used after bulk edits whose individual line changes were not reported.
    pub fn remove_invalidated_lines(&mut self, document: DocumentId, line_count: usize) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|entry| entry.document != document || entry.is_valid_for(line_count));

        let changed = self.entries.len() != before;
        if changed {
            self.optimize();
        }
        changed
    }
}

impl<'a> IntoIterator for &'a NavigationStack {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
