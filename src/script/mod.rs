//! Session scripts: recorded editor events replayed against a session.
//!
//! A script is a YAML document listing the documents to open and the events
//! an editor view would report, in order. Replaying it drives an
//! [`EditorSession`](crate::session::EditorSession) exactly as a live view
//! would and collects what the session sent back: recorded bookmarks, jump
//! requests and highlight commands.
//!
//! ```yaml
//! documents:
//!   - name: main.rs
//!     lines: 300
//! events:
//!   - caret: { document: main.rs, line: 10 }
//!   - caret: { document: main.rs, line: 200 }
//!   - insert: { document: main.rs, first_line: 0, count: 5 }
//!   - back
//!   - highlight: { channel: word-highlight, ranges: [[0, 4], [90, 94]] }
//! ```
//!
//! # Modules
//!
//! - `event`: Script data model
//! - `loader`: Reading scripts from files (optionally gzipped) or stdin
//! - `runner`: Replaying a script and the resulting report
//! - `error`: Semantic errors found while replaying

pub mod error;
pub mod event;
pub mod loader;
pub mod runner;

pub use error::ScriptError;
pub use event::{ScriptDocument, ScriptEvent, SessionScript};
pub use runner::{replay, ReplayReport};
