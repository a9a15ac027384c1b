//! Editing session: the host that drives navigation history and indicators.
//!
//! An [`EditorSession`] owns the open-document table, the caret, the
//! [`NavigationHistory`] and the [`IndicatorSet`] of a view. The view reports
//! caret moves and edits to it; in return the session hands out
//! [`JumpRequest`]s for back/forward navigation and highlight commands
//! through a [`HighlightSink`].
//!
//! All methods run synchronously on the thread that owns the session.
//!
//! # Example
//!
//! ```
//! use navquill::config::Config;
//! use navquill::navigation::Location;
//! use navquill::session::EditorSession;
//!
//! let mut session = EditorSession::new(&Config::default());
//! let doc = session.open_document("main.rs", 400);
//!
//! session.move_caret(Location::new(doc, 10, 4));
//! session.move_caret(Location::new(doc, 250, 0));
//!
//! let jump = session.go_back().unwrap();
//! assert_eq!(jump.location.line, 10);
//! assert_eq!(session.history().forward().len(), 1);
//! ```

use crate::config::Config;
use crate::document::{DocumentId, DocumentTable};
use crate::indicator::{ChannelId, HighlightRange, HighlightSink, IndicatorSet};
use crate::navigation::{Location, NavigationHistory};
use serde::Serialize;

/// Direction of a history traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JumpDirection {
    Back,
    Forward,
}

/// Request for the view to move its caret to `location`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JumpRequest {
    pub location: Location,
    pub direction: JumpDirection,
}

/// One row of a combined history dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEntry {
    /// Reachable with "navigate backward"
    Back(Location),
    /// The caret position
    Current(Location),
    /// Reachable with "navigate forward"
    Forward(Location),
}

impl HistoryEntry {
    pub fn location(&self) -> &Location {
        match self {
            HistoryEntry::Back(location)
            | HistoryEntry::Current(location)
            | HistoryEntry::Forward(location) => location,
        }
    }
}

/// State of one editing session.
#[derive(Debug, Clone)]
pub struct EditorSession {
    documents: DocumentTable,
    history: NavigationHistory,
    indicators: IndicatorSet,
    caret: Option<Location>,
}

impl EditorSession {
    /// Creates a session with the configured limits and indicator channels.
    ///
    /// # Panics
    ///
    /// Panics if `config.history_limit` is zero.
    pub fn new(config: &Config) -> Self {
        let mut indicators = IndicatorSet::new();
        for indicator in &config.indicators {
            indicators.register(&indicator.name, indicator.style);
        }

        Self {
            documents: DocumentTable::new(),
            history: NavigationHistory::with_limits(
                config.history_limit,
                config.jump_line_threshold,
            ),
            indicators,
            caret: None,
        }
    }

    pub fn documents(&self) -> &DocumentTable {
        &self.documents
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    pub fn indicators(&self) -> &IndicatorSet {
        &self.indicators
    }

    pub fn indicators_mut(&mut self) -> &mut IndicatorSet {
        &mut self.indicators
    }

    /// Current caret position, `None` until the first move or after its
    /// document closed.
    pub fn caret(&self) -> Option<Location> {
        self.caret
    }

    /// Opens a document and returns its handle.
    pub fn open_document(&mut self, name: &str, line_count: usize) -> DocumentId {
        let id = self.documents.open(name, line_count);
        tracing::info!("Opened {} as {} ({} lines)", name, id, line_count);
        id
    }

    /// Moves the caret and records a jump if the move is significant.
    ///
    /// Returns whether a bookmark was recorded.
    ///
    /// # Panics
    ///
    /// Panics if `to` is not a line of an open document.
    pub fn move_caret(&mut self, to: Location) -> bool {
        let line_count = self.expect_open(to.document);
        assert!(
            to.is_valid_for(line_count),
            "caret line {} is outside {} ({} lines)",
            to.line,
            to.document,
            line_count
        );

        let recorded = match self.caret {
            Some(from) => self.history.record_jump(from, to),
            None => false,
        };
        self.caret = Some(to);
        recorded
    }

    /// Reports `count` lines inserted at `first_line`.
    ///
    /// # Panics
    ///
    /// Panics if `document` is not open or `first_line` is past its end.
    pub fn lines_inserted(&mut self, document: DocumentId, first_line: usize, count: usize) {
        let line_count = self.expect_open(document);
        assert!(
            first_line <= line_count,
            "insertion at line {} is outside {} ({} lines)",
            first_line,
            document,
            line_count
        );
        self.documents.adjust_for_insert(document, count);
        self.history
            .notify_lines_inserted(document, first_line, count);

        if let Some(caret) = self.caret.as_mut() {
            if caret.document == document && caret.line >= first_line {
                caret.line += count;
            }
        }
    }

    /// Reports `count` lines deleted at `first_line`.
    ///
    /// A caret inside the deleted text moves to the start of `first_line`.
    /// Returns true if a bookmark was removed.
    ///
    /// # Panics
    ///
    /// Panics if `document` is not open or the deleted lines run past its end.
    pub fn lines_deleted(&mut self, document: DocumentId, first_line: usize, count: usize) -> bool {
        let line_count = self.expect_open(document);
        assert!(
            first_line
                .checked_add(count)
                .is_some_and(|end| end <= line_count),
            "deletion of {} lines at line {} is outside {} ({} lines)",
            count,
            first_line,
            document,
            line_count
        );
        self.documents.adjust_for_delete(document, count);
        let changed = self
            .history
            .notify_lines_deleted(document, first_line, count);

        if let Some(caret) = self.caret.as_mut() {
            if caret.document == document && caret.line >= first_line {
                if caret.line >= first_line.saturating_add(count) {
                    caret.line -= count;
                } else {
                    *caret = Location::new(document, first_line, 0);
                }
            }
        }
        self.clamp_caret(document);
        changed
    }

    /// Reports a bulk change of `document` to `line_count` lines.
    ///
    /// Bookmarks past the new end are dropped and every indicator is marked
    /// stale, since the view discarded them along with the old text. Returns
    /// true if a bookmark was removed.
    ///
    /// # Panics
    ///
    /// Panics if `document` is not open.
    pub fn document_reloaded(&mut self, document: DocumentId, line_count: usize) -> bool {
        self.expect_open(document);
        self.documents.set_line_count(document, line_count);
        self.indicators.reset();
        self.clamp_caret(document);

        let line_count = self.documents.line_count(document).unwrap_or(1);
        self.history.notify_invalidated_lines(document, line_count)
    }

    /// Closes a document and drops its bookmarks.
    ///
    /// Returns true if a bookmark was removed.
    ///
    /// # Panics
    ///
    /// Panics if `document` is not open.
    pub fn close_document(&mut self, document: DocumentId) -> bool {
        self.expect_open(document);
        self.documents.close(document);
        tracing::info!("Closed {}", document);

        if self.caret.is_some_and(|caret| caret.document == document) {
            self.caret = None;
        }
        self.history.notify_document_closed(document)
    }

    /// Closes every document and resets the history.
    pub fn close_all(&mut self) {
        self.documents.clear();
        self.history.clear();
        self.indicators.reset();
        self.caret = None;
        tracing::info!("Session reset");
    }

    /// Navigates to the most recent back entry.
    ///
    /// The caret position is pushed onto the forward stack. Returns `None`
    /// when there is nothing to go back to.
    pub fn go_back(&mut self) -> Option<JumpRequest> {
        self.traverse(JumpDirection::Back)
    }

    /// Navigates to the nearest forward entry.
    ///
    /// The caret position is pushed onto the back stack. Returns `None` when
    /// there is nothing to go forward to.
    pub fn go_forward(&mut self) -> Option<JumpRequest> {
        self.traverse(JumpDirection::Forward)
    }

    fn traverse(&mut self, direction: JumpDirection) -> Option<JumpRequest> {
        let (back, forward) = self.history.stacks_mut();
        let (source, target_stack) = match direction {
            JumpDirection::Back => (back, forward),
            JumpDirection::Forward => (forward, back),
        };

        let target = source.pop()?;
        if let Some(current) = self.caret {
            target_stack.push(current);
        }
        self.history.enforce_limit();
        self.caret = Some(target);

        tracing::debug!(
            "Navigated {:?} to {}:{}",
            direction,
            target.document,
            target.line
        );
        Some(JumpRequest {
            location: target,
            direction,
        })
    }

    /// Rows of a combined history dropdown.
    ///
    /// Back entries come first (oldest first), then the caret, then forward
    /// entries (nearest first).
    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        let back = self.history.back().iter().copied().map(HistoryEntry::Back);
        let current = self.caret.map(HistoryEntry::Current);
        let forward = self
            .history
            .forward()
            .iter()
            .rev()
            .copied()
            .map(HistoryEntry::Forward);

        back.chain(current).chain(forward).collect()
    }

    /// Applies highlight ranges on a channel, skipping unchanged sets.
    ///
    /// # Panics
    ///
    /// Panics if `channel` was not registered on this session.
    pub fn apply_highlights<S>(&mut self, channel: ChannelId, ranges: &[HighlightRange], sink: &mut S) -> bool
    where
        S: HighlightSink + ?Sized,
    {
        self.indicators.apply_ranges(channel, ranges, sink)
    }

    fn expect_open(&self, document: DocumentId) -> usize {
        match self.documents.line_count(document) {
            Some(line_count) => line_count,
            None => panic!("{} is not an open document", document),
        }
    }

    fn clamp_caret(&mut self, document: DocumentId) {
        let Some(line_count) = self.documents.line_count(document) else {
            return;
        };
        if let Some(caret) = self.caret.as_mut() {
            if caret.document == document && !caret.is_valid_for(line_count) {
                *caret = Location::new(document, line_count - 1, 0);
            }
        }
    }
}
