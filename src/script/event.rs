//! Script data model.

use serde::{Deserialize, Serialize};

/// A recorded editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionScript {
    /// Documents opened before the first event
    #[serde(default)]
    pub documents: Vec<ScriptDocument>,

    /// Events in the order the view reported them, written as single-key
    /// maps (`- caret: {...}`) or plain names for events without data
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub events: Vec<ScriptEvent>,
}

/// A document opened at the start of a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptDocument {
    pub name: String,
    pub lines: usize,
}

/// One event reported by the view.
///
/// Documents are referred to by name; the first open document with that name
/// is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptEvent {
    /// A document was opened
    Open { name: String, lines: usize },
    /// The caret moved
    Caret {
        document: String,
        line: usize,
        #[serde(default)]
        column: usize,
        #[serde(default)]
        virtual_space: usize,
    },
    /// Lines were inserted
    Insert {
        document: String,
        first_line: usize,
        count: usize,
    },
    /// Lines were deleted
    Delete {
        document: String,
        first_line: usize,
        count: usize,
    },
    /// The document text was replaced wholesale
    Reload { document: String, lines: usize },
    /// A document was closed
    Close(String),
    /// Every document was closed
    CloseAll,
    /// "Navigate backward" was invoked
    Back,
    /// "Navigate forward" was invoked
    Forward,
    /// A highlight channel was recomputed
    Highlight {
        channel: String,
        #[serde(default)]
        ranges: Vec<(usize, usize)>,
    },
}

impl ScriptEvent {
    /// Short name of the event kind, used in reports and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            ScriptEvent::Open { .. } => "open",
            ScriptEvent::Caret { .. } => "caret",
            ScriptEvent::Insert { .. } => "insert",
            ScriptEvent::Delete { .. } => "delete",
            ScriptEvent::Reload { .. } => "reload",
            ScriptEvent::Close(_) => "close",
            ScriptEvent::CloseAll => "close_all",
            ScriptEvent::Back => "back",
            ScriptEvent::Forward => "forward",
            ScriptEvent::Highlight { .. } => "highlight",
        }
    }
}
