//! All indicator channels of one view.

use super::channel::{IndicatorChannel, IndicatorStyle};
use super::fingerprint::HighlightRange;
use super::sink::HighlightSink;
use indexmap::IndexMap;

/// Handle of a channel registered in an [`IndicatorSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelId(usize);

/// Named indicator channels, in registration order.
#[derive(Debug, Clone, Default)]
pub struct IndicatorSet {
    channels: IndexMap<String, IndicatorChannel>,
}

impl IndicatorSet {
    pub fn new() -> Self {
        Self {
            channels: IndexMap::new(),
        }
    }

    /// Registers a channel and returns its handle.
    ///
    /// Registering an existing name updates its style and returns the
    /// existing handle.
    pub fn register(&mut self, name: &str, style: IndicatorStyle) -> ChannelId {
        if let Some((index, _, channel)) = self.channels.get_full_mut(name) {
            if channel.style() != style {
                *channel = IndicatorChannel::new(name, style);
            }
            return ChannelId(index);
        }
        let (index, _) = self
            .channels
            .insert_full(name.to_string(), IndicatorChannel::new(name, style));
        ChannelId(index)
    }

    /// Looks up a channel handle by name.
    pub fn channel_id(&self, name: &str) -> Option<ChannelId> {
        self.channels.get_index_of(name).map(ChannelId)
    }

    /// Returns a registered channel.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this set.
    pub fn channel(&self, id: ChannelId) -> &IndicatorChannel {
        match self.channels.get_index(id.0) {
            Some((_, channel)) => channel,
            None => panic!("unknown indicator channel {:?}", id),
        }
    }

    /// Applies `ranges` to a channel, see [`IndicatorChannel::apply_ranges`].
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this set.
    pub fn apply_ranges<S>(&mut self, id: ChannelId, ranges: &[HighlightRange], sink: &mut S) -> bool
    where
        S: HighlightSink + ?Sized,
    {
        match self.channels.get_index_mut(id.0) {
            Some((_, channel)) => channel.apply_ranges(ranges, sink),
            None => panic!("unknown indicator channel {:?}", id),
        }
    }

    /// Forgets the applied state of every channel.
    ///
    /// Used when the view dropped its indicators on its own, e.g. after
    /// reloading the document text.
    pub fn reset(&mut self) {
        for channel in self.channels.values_mut() {
            channel.reset();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndicatorChannel> {
        self.channels.values()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
