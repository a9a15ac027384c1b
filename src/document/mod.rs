//! Open-document bookkeeping for an editing session.
//!
//! The navigation core never owns documents. It refers to them through
//! [`DocumentId`] handles issued by a [`DocumentTable`], which also tracks the
//! line count of each open document so that stored positions can be checked
//! against it.
//!
//! # Example
//!
//! ```
//! use navquill::document::DocumentTable;
//!
//! let mut table = DocumentTable::new();
//! let id = table.open("main.rs", 120);
//! assert_eq!(table.line_count(id), Some(120));
//!
//! table.close(id);
//! assert!(!table.is_open(id));
//! ```

pub mod table;

pub use table::{DocumentId, DocumentTable};
