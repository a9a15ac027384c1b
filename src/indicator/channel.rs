//! A single indicator channel and its change detection.

use super::fingerprint::{Fingerprint, HighlightRange};
use super::sink::HighlightSink;
use serde::{Deserialize, Serialize};

/// Visual style the view uses to draw a channel's ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndicatorStyle {
    /// Straight underline
    Plain,
    /// Wavy underline, used for diagnostics
    Squiggle,
    /// Rectangle around the text
    Box,
    /// Translucent rounded rectangle
    RoundBox,
    /// Translucent rectangle filling the line height
    StraightBox,
    /// Dashed underline
    Dash,
    /// Dotted underline
    Dots,
}

/// Applied state of one highlight category on a view.
///
/// The channel remembers how many ranges it last applied and, when that
/// count is non-zero, their [`Fingerprint`]. An empty range set has no
/// fingerprint.
#[derive(Debug, Clone)]
pub struct IndicatorChannel {
    name: String,
    style: IndicatorStyle,
    applied_count: usize,
    applied_fingerprint: Option<Fingerprint>,
}

impl IndicatorChannel {
    /// Creates a channel with nothing applied.
    pub fn new(name: impl Into<String>, style: IndicatorStyle) -> Self {
        Self {
            name: name.into(),
            style,
            applied_count: 0,
            applied_fingerprint: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn style(&self) -> IndicatorStyle {
        self.style
    }

    /// Number of ranges currently applied on the view.
    pub fn applied_count(&self) -> usize {
        self.applied_count
    }

    /// Fingerprint of the applied ranges, `None` when nothing is applied.
    pub fn applied_fingerprint(&self) -> Option<Fingerprint> {
        self.applied_fingerprint
    }

    /// Applies `ranges` to the view unless they match what is already shown.
    ///
    /// Equal counts are compared by fingerprint; an empty set equal to an
    /// empty applied state needs no hashing at all. On a difference the
    /// channel is cleared on the view and every range is filled again.
    /// Returns true if the view was updated.
    pub fn apply_ranges<S>(&mut self, ranges: &[HighlightRange], sink: &mut S) -> bool
    where
        S: HighlightSink + ?Sized,
    {
        let new_count = ranges.len();
        let mut new_fingerprint = None;

        if new_count == self.applied_count {
            if new_count == 0 {
                return false;
            }
            let fingerprint = Fingerprint::of(ranges);
            if self.applied_fingerprint == Some(fingerprint) {
                tracing::debug!("Indicator '{}' unchanged ({} ranges)", self.name, new_count);
                return false;
            }
            new_fingerprint = Some(fingerprint);
        }

        sink.clear_indicator(&self.name, self.style);
        for range in ranges {
            sink.fill_indicator(&self.name, self.style, *range);
        }

        self.applied_count = new_count;
        self.applied_fingerprint = if new_count == 0 {
            None
        } else {
            Some(new_fingerprint.unwrap_or_else(|| Fingerprint::of(ranges)))
        };

        tracing::debug!(
            "Indicator '{}' redrawn with {} ranges",
            self.name,
            new_count
        );
        true
    }

    /// Forgets the applied state so the next apply always redraws.
    pub fn reset(&mut self) {
        self.applied_count = 0;
        self.applied_fingerprint = None;
    }
}
