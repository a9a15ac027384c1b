//! Back/forward navigation history across open documents.
//!
//! Cursor moves that count as real navigation (switching documents or
//! jumping far enough within one) leave a [`Location`] bookmark behind. The
//! bookmarks live in the two stacks of a [`NavigationHistory`] and are kept
//! consistent with edits: inserted and deleted lines shift them, deleted text
//! and closed documents remove them, and revisits of the same line collapse
//! into one entry.
//!
//! # Modules
//!
//! - `location`: A single visited cursor position
//! - `stack`: Edit-aware ordered list of locations
//! - `history`: The bounded pair of back/forward stacks
//!
//! # Example
//!
//! ```
//! use navquill::document::DocumentTable;
//! use navquill::navigation::{Location, NavigationHistory};
//!
//! let mut table = DocumentTable::new();
//! let doc = table.open("main.rs", 500);
//! let mut history = NavigationHistory::new();
//!
//! // A short caret move is not recorded
//! assert!(!history.record_jump(Location::new(doc, 10, 0), Location::new(doc, 14, 0)));
//!
//! // A long jump bookmarks the position it left
//! assert!(history.record_jump(Location::new(doc, 10, 0), Location::new(doc, 300, 0)));
//! assert_eq!(history.back().len(), 1);
//! ```

pub mod history;
pub mod location;
pub mod stack;

pub use history::NavigationHistory;
pub use location::Location;
pub use stack::NavigationStack;
