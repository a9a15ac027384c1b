//! Bounded back/forward navigation history.

use super::location::Location;
use super::stack::NavigationStack;
use crate::document::DocumentId;

/// Default bound on the combined size of both stacks.
///
/// Limiting triggers when the total reaches this value, so at most
/// `DEFAULT_HISTORY_LIMIT - 1` bookmarks are kept. Together with the current
/// caret position a history dropdown shows up to `DEFAULT_HISTORY_LIMIT + 1`
/// items.
pub const DEFAULT_HISTORY_LIMIT: usize = 15;

/// Default minimum line distance for a same-document move to be recorded.
pub const DEFAULT_JUMP_LINE_THRESHOLD: usize = 11;

/// Back and forward stacks of visited locations.
///
/// This type keeps the stored bookmarks consistent with edits and bounded in
/// size. Traversal (popping `back` and pushing the current position on
/// `forward`, or the reverse) belongs to the caller, see
/// [`EditorSession::go_back`](crate::session::EditorSession::go_back).
#[derive(Debug, Clone)]
pub struct NavigationHistory {
    back: NavigationStack,
    forward: NavigationStack,
    limit: usize,
    jump_line_threshold: usize,
}

impl NavigationHistory {
    /// Creates an empty history with the default limits.
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_HISTORY_LIMIT, DEFAULT_JUMP_LINE_THRESHOLD)
    }

    /// Creates an empty history with custom limits.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is zero.
    pub fn with_limits(limit: usize, jump_line_threshold: usize) -> Self {
        assert!(limit > 0, "navigation history limit must be positive");
        Self {
            back: NavigationStack::new(),
            forward: NavigationStack::new(),
            limit,
            jump_line_threshold,
        }
    }

    pub fn back(&self) -> &NavigationStack {
        &self.back
    }

    pub fn forward(&self) -> &NavigationStack {
        &self.forward
    }

    /// Mutable access for traversal by the owning session.
    pub(crate) fn stacks_mut(&mut self) -> (&mut NavigationStack, &mut NavigationStack) {
        (&mut self.back, &mut self.forward)
    }

    /// Returns the limit that triggers eviction.
    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn jump_line_threshold(&self) -> usize {
        self.jump_line_threshold
    }

    /// Total number of stored bookmarks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.back.len() + self.forward.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.back.is_empty() && self.forward.is_empty()
    }

    /// Returns true if moving from `from` to `to` counts as navigation.
    ///
    /// That is a switch to another document, or a move of at least
    /// `jump_line_threshold` lines within the same one.
    pub fn is_significant(&self, from: &Location, to: &Location) -> bool {
        from.document != to.document || from.line.abs_diff(to.line) >= self.jump_line_threshold
    }

    /// Records the caret leaving `from` for `to`.
    ///
    /// When the move is significant, `from` is pushed onto the back stack and
    /// the size bound is enforced. Returns whether a bookmark was recorded.
    pub fn record_jump(&mut self, from: Location, to: Location) -> bool {
        if !self.is_significant(&from, &to) {
            return false;
        }

        tracing::debug!(
            "Recording jump {}:{} -> {}:{}",
            from.document,
            from.line,
            to.document,
            to.line
        );
        self.back.push(from);
        self.enforce_limit();
        true
    }

    /// Evicts the oldest back entries until the total is below the limit.
    ///
    /// Only the back stack is trimmed; once it is empty nothing more is
    /// removed.
    pub fn enforce_limit(&mut self) {
        while self.len() >= self.limit {
            match self.back.pop_oldest() {
                Some(evicted) => {
                    tracing::debug!("Evicted oldest bookmark {}:{}", evicted.document, evicted.line);
                }
                None => break,
            }
        }
    }

    /// Empties both stacks.
    pub fn clear(&mut self) {
        self.back.clear();
        self.forward.clear();
    }

    /// Forwards a line deletion to both stacks.
    ///
    /// Returns true if either stack lost an entry.
    pub fn notify_lines_deleted(
        &mut self,
        document: DocumentId,
        first_line: usize,
        count: usize,
    ) -> bool {
        let back_changed = self.back.lines_deleted(document, first_line, count);
        let forward_changed = self.forward.lines_deleted(document, first_line, count);
        back_changed || forward_changed
    }

    /// Forwards a line insertion to both stacks.
    pub fn notify_lines_inserted(&mut self, document: DocumentId, first_line: usize, count: usize) {
        self.back.lines_inserted(document, first_line, count);
        self.forward.lines_inserted(document, first_line, count);
    }

    /// Drops every bookmark of a closed document.
    pub fn notify_document_closed(&mut self, document: DocumentId) -> bool {
        let back_changed = self.back.remove_document(document);
        let forward_changed = self.forward.remove_document(document);
        if back_changed || forward_changed {
            tracing::debug!("Purged bookmarks of closed document {}", document);
        }
        back_changed || forward_changed
    }

    /// Drops bookmarks of `document` at or beyond `line_count`.
    pub fn notify_invalidated_lines(&mut self, document: DocumentId, line_count: usize) -> bool {
        let back_changed = self.back.remove_invalidated_lines(document, line_count);
        let forward_changed = self.forward.remove_invalidated_lines(document, line_count);
        back_changed || forward_changed
    }
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentTable;

    #[test]
    fn test_limit_stops_when_back_is_empty() {
        let mut table = DocumentTable::new();
        let doc = table.open("a.rs", 1000);
        let mut history = NavigationHistory::with_limits(3, 11);
        for line in 0..5 {
            history.forward.push(Location::new(doc, line * 20, 0));
        }

        history.enforce_limit();
        assert_eq!(history.forward().len(), 5);
        assert!(history.back().is_empty());
    }

    #[test]
    #[should_panic(expected = "limit must be positive")]
    fn test_zero_limit_panics() {
        let _ = NavigationHistory::with_limits(0, 11);
    }
}
