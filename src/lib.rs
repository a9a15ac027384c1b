//! NavQuill - edit-aware navigation history and incremental highlight
//! indicators for code editors.
//!
//! # Modules
//!
//! - `document`: Open-document handles and line counts
//! - `navigation`: Bounded back/forward history of visited positions
//! - `indicator`: Highlight channels that skip redundant redraws
//! - `session`: The editing session that ties them to a view
//! - `config`: User configuration
//! - `script`: Replaying recorded editor events

pub mod config;
pub mod document;
pub mod indicator;
pub mod navigation;
pub mod script;
pub mod session;
