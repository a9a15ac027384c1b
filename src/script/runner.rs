//! Replaying session scripts.

use super::error::ScriptError;
use super::event::{ScriptEvent, SessionScript};
use crate::config::Config;
use crate::document::DocumentId;
use crate::indicator::{HighlightCommand, HighlightRange, RecordingSink};
use crate::navigation::Location;
use crate::session::{EditorSession, HistoryEntry, JumpDirection};
use serde::Serialize;
use std::fmt;

/// A location with its document resolved to a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedLocation {
    pub document: String,
    pub line: usize,
    pub column: usize,
    pub virtual_space: usize,
}

impl fmt::Display for NamedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.document, self.line + 1, self.column + 1)?;
        if self.virtual_space > 0 {
            write!(f, "+{}", self.virtual_space)?;
        }
        Ok(())
    }
}

/// What the session did in response to one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome {
    Opened { document: String },
    CaretMoved { recorded: bool },
    LinesInserted,
    LinesDeleted { history_changed: bool },
    Reloaded { history_changed: bool },
    Closed { history_changed: bool },
    SessionReset,
    Jumped {
        direction: JumpDirection,
        target: NamedLocation,
    },
    NothingToJumpTo { direction: JumpDirection },
    Highlighted {
        changed: bool,
        commands: Vec<HighlightCommand>,
    },
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutcome::Opened { document } => write!(f, "opened {}", document),
            StepOutcome::CaretMoved { recorded: true } => write!(f, "bookmark recorded"),
            StepOutcome::CaretMoved { recorded: false } => write!(f, "caret moved"),
            StepOutcome::LinesInserted => write!(f, "bookmarks shifted"),
            StepOutcome::LinesDeleted { history_changed }
            | StepOutcome::Reloaded { history_changed }
            | StepOutcome::Closed { history_changed } => {
                if *history_changed {
                    write!(f, "bookmarks removed")
                } else {
                    write!(f, "no bookmark removed")
                }
            }
            StepOutcome::SessionReset => write!(f, "history cleared"),
            StepOutcome::Jumped {
                direction: JumpDirection::Back,
                target,
            } => write!(f, "back to {}", target),
            StepOutcome::Jumped {
                direction: JumpDirection::Forward,
                target,
            } => write!(f, "forward to {}", target),
            StepOutcome::NothingToJumpTo {
                direction: JumpDirection::Back,
            } => write!(f, "nothing to go back to"),
            StepOutcome::NothingToJumpTo {
                direction: JumpDirection::Forward,
            } => write!(f, "nothing to go forward to"),
            StepOutcome::Highlighted { changed: false, .. } => write!(f, "highlights unchanged"),
            StepOutcome::Highlighted { commands, .. } => {
                write!(f, "highlights redrawn ({} commands)", commands.len())
            }
        }
    }
}

/// One replayed event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub index: usize,
    pub event: &'static str,
    pub outcome: StepOutcome,
}

/// Result of replaying a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<Step>,
    /// Back entries, oldest first
    pub back: Vec<NamedLocation>,
    pub current: Option<NamedLocation>,
    /// Forward entries, nearest first
    pub forward: Vec<NamedLocation>,
}

impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{:>4} {:<10} {}", step.index, step.event, step.outcome)?;
        }

        writeln!(f)?;
        writeln!(f, "History:")?;
        for location in &self.back {
            writeln!(f, "  < {}", location)?;
        }
        match &self.current {
            Some(location) => writeln!(f, "  * {}", location)?,
            None => writeln!(f, "  * (no caret)")?,
        }
        for location in &self.forward {
            writeln!(f, "  > {}", location)?;
        }
        Ok(())
    }
}

/// Replays `script` against a fresh session built from `config`.
///
/// # Errors
///
/// Returns the first event that refers to a closed document or unknown
/// channel, moves the caret out of its document, or carries an inverted
/// highlight range. Events before it have already been applied.
///
/// # Panics
///
/// Panics if `config.history_limit` is zero.
pub fn replay(script: &SessionScript, config: &Config) -> Result<ReplayReport, ScriptError> {
    let mut session = EditorSession::new(config);
    for document in &script.documents {
        session.open_document(&document.name, document.lines);
    }

    let mut steps = Vec::with_capacity(script.events.len());
    for (index, event) in script.events.iter().enumerate() {
        let outcome = replay_event(&mut session, index, event)?;
        steps.push(Step {
            index,
            event: event.kind(),
            outcome,
        });
    }

    let mut report = ReplayReport {
        steps,
        back: Vec::new(),
        current: None,
        forward: Vec::new(),
    };
    for entry in session.history_entries() {
        let named = name_location(&session, entry.location());
        match entry {
            HistoryEntry::Back(_) => report.back.push(named),
            HistoryEntry::Current(_) => report.current = Some(named),
            HistoryEntry::Forward(_) => report.forward.push(named),
        }
    }
    Ok(report)
}

fn replay_event(
    session: &mut EditorSession,
    index: usize,
    event: &ScriptEvent,
) -> Result<StepOutcome, ScriptError> {
    let outcome = match event {
        ScriptEvent::Open { name, lines } => {
            session.open_document(name, *lines);
            StepOutcome::Opened {
                document: name.clone(),
            }
        }
        ScriptEvent::Caret {
            document,
            line,
            column,
            virtual_space,
        } => {
            let id = resolve(session, index, document)?;
            let line_count = session.documents().line_count(id).unwrap_or(0);
            if *line >= line_count {
                return Err(ScriptError::LineOutOfRange {
                    event: index,
                    name: document.clone(),
                    line: *line,
                    line_count,
                });
            }
            let to = Location::new(id, *line, *column).with_virtual_space(*virtual_space);
            StepOutcome::CaretMoved {
                recorded: session.move_caret(to),
            }
        }
        ScriptEvent::Insert {
            document,
            first_line,
            count,
        } => {
            let id = resolve(session, index, document)?;
            check_edit(session, index, document, id, *first_line, 0, *count)?;
            session.lines_inserted(id, *first_line, *count);
            StepOutcome::LinesInserted
        }
        ScriptEvent::Delete {
            document,
            first_line,
            count,
        } => {
            let id = resolve(session, index, document)?;
            check_edit(session, index, document, id, *first_line, *count, *count)?;
            StepOutcome::LinesDeleted {
                history_changed: session.lines_deleted(id, *first_line, *count),
            }
        }
        ScriptEvent::Reload { document, lines } => {
            let id = resolve(session, index, document)?;
            StepOutcome::Reloaded {
                history_changed: session.document_reloaded(id, *lines),
            }
        }
        ScriptEvent::Close(document) => {
            let id = resolve(session, index, document)?;
            StepOutcome::Closed {
                history_changed: session.close_document(id),
            }
        }
        ScriptEvent::CloseAll => {
            session.close_all();
            StepOutcome::SessionReset
        }
        ScriptEvent::Back => jump_outcome(session, JumpDirection::Back),
        ScriptEvent::Forward => jump_outcome(session, JumpDirection::Forward),
        ScriptEvent::Highlight { channel, ranges } => {
            let id = session
                .indicators()
                .channel_id(channel)
                .ok_or_else(|| ScriptError::UnknownChannel {
                    event: index,
                    name: channel.clone(),
                })?;
            let ranges = ranges
                .iter()
                .map(|&(start, end)| {
                    if start > end {
                        Err(ScriptError::InvertedRange {
                            event: index,
                            start,
                            end,
                        })
                    } else {
                        Ok(HighlightRange::new(start, end))
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;

            let mut sink = RecordingSink::new();
            let changed = session.apply_highlights(id, &ranges, &mut sink);
            StepOutcome::Highlighted {
                changed,
                commands: sink.take_commands(),
            }
        }
    };
    Ok(outcome)
}

fn jump_outcome(session: &mut EditorSession, direction: JumpDirection) -> StepOutcome {
    let request = match direction {
        JumpDirection::Back => session.go_back(),
        JumpDirection::Forward => session.go_forward(),
    };
    match request {
        Some(request) => StepOutcome::Jumped {
            direction,
            target: name_location(session, &request.location),
        },
        None => StepOutcome::NothingToJumpTo { direction },
    }
}

/// Rejects an edit whose `first_line + span` runs past the document end.
///
/// `span` is the number of existing lines the edit consumes: the deleted
/// count for deletions, zero for insertions.
fn check_edit(
    session: &EditorSession,
    index: usize,
    name: &str,
    id: DocumentId,
    first_line: usize,
    span: usize,
    count: usize,
) -> Result<(), ScriptError> {
    let line_count = session.documents().line_count(id).unwrap_or(0);
    let fits = first_line
        .checked_add(span)
        .is_some_and(|end| end <= line_count);
    if fits {
        Ok(())
    } else {
        Err(ScriptError::EditOutOfRange {
            event: index,
            name: name.to_string(),
            first_line,
            count,
            line_count,
        })
    }
}

fn resolve(session: &EditorSession, index: usize, name: &str) -> Result<DocumentId, ScriptError> {
    session
        .documents()
        .find(name)
        .ok_or_else(|| ScriptError::UnknownDocument {
            event: index,
            name: name.to_string(),
        })
}

fn name_location(session: &EditorSession, location: &Location) -> NamedLocation {
    let document = session
        .documents()
        .name(location.document)
        .map_or_else(|| location.document.to_string(), str::to_string);

    NamedLocation {
        document,
        line: location.line,
        column: location.column,
        virtual_space: location.virtual_space,
    }
}
