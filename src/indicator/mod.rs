//! Incremental highlight indicators.
//!
//! A view draws highlight ranges (error squiggles, occurrences of the word
//! under the caret, search hits) on named indicator channels. Recomputing
//! those ranges is cheap, redrawing them is not, so every channel remembers
//! what it last applied: the number of ranges and a 128-bit fingerprint of
//! their offsets. Re-applying an identical set is a no-op; anything else
//! clears the channel on the view and fills it again.
//!
//! # Modules
//!
//! - `fingerprint`: Highlight ranges and their content digest
//! - `channel`: One indicator channel and its change detection
//! - `set`: All channels of one view, registered by name
//! - `sink`: The view-side command boundary
//!
//! # Example
//!
//! ```
//! use navquill::indicator::{HighlightRange, IndicatorSet, IndicatorStyle, RecordingSink};
//!
//! let mut indicators = IndicatorSet::new();
//! let words = indicators.register("word-highlight", IndicatorStyle::RoundBox);
//! let mut view = RecordingSink::new();
//!
//! let ranges = [HighlightRange::new(0, 5), HighlightRange::new(40, 45)];
//! assert!(indicators.apply_ranges(words, &ranges, &mut view));
//! assert!(!indicators.apply_ranges(words, &ranges, &mut view));
//!
//! // One clear plus two fills, all from the first call
//! assert_eq!(view.commands().len(), 3);
//! ```

pub mod channel;
pub mod fingerprint;
pub mod set;
pub mod sink;

pub use channel::{IndicatorChannel, IndicatorStyle};
pub use fingerprint::{Fingerprint, HighlightRange};
pub use set::{ChannelId, IndicatorSet};
pub use sink::{HighlightCommand, HighlightSink, RecordingSink};
