//! The view-side boundary of the indicator engine.

use super::channel::IndicatorStyle;
use super::fingerprint::HighlightRange;
use serde::Serialize;

/// Receives highlight commands for a view.
///
/// Implemented by whatever draws the text. Commands arrive synchronously and
/// in order: one `clear_indicator` followed by a `fill_indicator` per range.
pub trait HighlightSink {
    /// Removes every range previously filled on `channel`.
    fn clear_indicator(&mut self, channel: &str, style: IndicatorStyle);

    /// Draws `range` on `channel` with `style`.
    fn fill_indicator(&mut self, channel: &str, style: IndicatorStyle, range: HighlightRange);
}

/// A command sent to a [`HighlightSink`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum HighlightCommand {
    Clear {
        channel: String,
    },
    Fill {
        channel: String,
        start: usize,
        end: usize,
    },
}

/// Sink that records every command it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    commands: Vec<HighlightCommand>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[HighlightCommand] {
        &self.commands
    }

    /// Returns and forgets the commands recorded so far.
    pub fn take_commands(&mut self) -> Vec<HighlightCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl HighlightSink for RecordingSink {
    fn clear_indicator(&mut self, channel: &str, _style: IndicatorStyle) {
        self.commands.push(HighlightCommand::Clear {
            channel: channel.to_string(),
        });
    }

    fn fill_indicator(&mut self, channel: &str, _style: IndicatorStyle, range: HighlightRange) {
        self.commands.push(HighlightCommand::Fill {
            channel: channel.to_string(),
            start: range.start(),
            end: range.end(),
        });
    }
}
