use navquill::indicator::{
    Fingerprint, HighlightCommand, HighlightRange, HighlightSink, IndicatorChannel, IndicatorSet,
    IndicatorStyle, RecordingSink,
};

/// Sink that only counts what it was asked to do.
#[derive(Default)]
struct CountingSink {
    clears: usize,
    fills: usize,
    last_style: Option<IndicatorStyle>,
}

impl HighlightSink for CountingSink {
    fn clear_indicator(&mut self, _channel: &str, style: IndicatorStyle) {
        self.clears += 1;
        self.last_style = Some(style);
    }

    fn fill_indicator(&mut self, _channel: &str, style: IndicatorStyle, _range: HighlightRange) {
        self.fills += 1;
        self.last_style = Some(style);
    }
}

fn ranges(pairs: &[(usize, usize)]) -> Vec<HighlightRange> {
    pairs.iter().copied().map(HighlightRange::from).collect()
}

#[test]
fn test_identical_ranges_apply_once() {
    let mut channel = IndicatorChannel::new("word-highlight", IndicatorStyle::RoundBox);
    let mut sink = CountingSink::default();
    let words = ranges(&[(0, 5), (12, 17), (40, 45)]);

    assert!(channel.apply_ranges(&words, &mut sink));
    assert!(!channel.apply_ranges(&words, &mut sink));

    assert_eq!(sink.clears, 1);
    assert_eq!(sink.fills, 3);
    assert_eq!(sink.last_style, Some(IndicatorStyle::RoundBox));
}

#[test]
fn test_same_count_different_content_is_applied() {
    let mut channel = IndicatorChannel::new("error", IndicatorStyle::Squiggle);
    let mut sink = RecordingSink::new();

    assert!(channel.apply_ranges(&ranges(&[(0, 5)]), &mut sink));
    assert!(channel.apply_ranges(&ranges(&[(0, 6)]), &mut sink));

    assert_eq!(
        sink.commands(),
        &[
            HighlightCommand::Clear {
                channel: "error".to_string()
            },
            HighlightCommand::Fill {
                channel: "error".to_string(),
                start: 0,
                end: 5
            },
            HighlightCommand::Clear {
                channel: "error".to_string()
            },
            HighlightCommand::Fill {
                channel: "error".to_string(),
                start: 0,
                end: 6
            },
        ]
    );
}

#[test]
fn test_reordered_ranges_count_as_change() {
    let mut channel = IndicatorChannel::new("error", IndicatorStyle::Squiggle);
    let mut sink = CountingSink::default();

    assert!(channel.apply_ranges(&ranges(&[(0, 5), (10, 15)]), &mut sink));
    assert!(channel.apply_ranges(&ranges(&[(10, 15), (0, 5)]), &mut sink));
    assert_eq!(sink.clears, 2);
}

#[test]
fn test_applied_state_is_tracked() {
    let mut channel = IndicatorChannel::new("error", IndicatorStyle::Squiggle);
    let mut sink = CountingSink::default();
    let errors = ranges(&[(3, 9), (20, 21)]);

    assert_eq!(channel.applied_count(), 0);
    assert_eq!(channel.applied_fingerprint(), None);

    channel.apply_ranges(&errors, &mut sink);
    assert_eq!(channel.applied_count(), 2);
    assert_eq!(channel.applied_fingerprint(), Some(Fingerprint::of(&errors)));
}

#[test]
fn test_emptying_a_channel_clears_the_view() {
    let mut channel = IndicatorChannel::new("error", IndicatorStyle::Squiggle);
    let mut sink = CountingSink::default();

    channel.apply_ranges(&ranges(&[(3, 9)]), &mut sink);
    assert!(channel.apply_ranges(&[], &mut sink));
    assert!(!channel.apply_ranges(&[], &mut sink));

    assert_eq!(sink.clears, 2);
    assert_eq!(sink.fills, 1);
}

#[test]
fn test_reset_forces_redraw() {
    let mut channel = IndicatorChannel::new("error", IndicatorStyle::Squiggle);
    let mut sink = CountingSink::default();
    let errors = ranges(&[(3, 9)]);

    channel.apply_ranges(&errors, &mut sink);
    channel.reset();
    assert!(channel.apply_ranges(&errors, &mut sink));
    assert_eq!(sink.clears, 2);
}

#[test]
fn test_set_keeps_channels_independent() {
    let mut set = IndicatorSet::new();
    let errors = set.register("error", IndicatorStyle::Squiggle);
    let words = set.register("word-highlight", IndicatorStyle::RoundBox);
    let mut sink = RecordingSink::new();
    let same = ranges(&[(1, 2)]);

    assert!(set.apply_ranges(errors, &same, &mut sink));
    assert!(set.apply_ranges(words, &same, &mut sink));
    assert!(!set.apply_ranges(errors, &same, &mut sink));

    assert_eq!(set.channel(errors).applied_count(), 1);
    assert_eq!(set.channel(words).style(), IndicatorStyle::RoundBox);
    assert_eq!(sink.commands().len(), 4);
}

#[test]
fn test_set_reset_forgets_every_channel() {
    let mut set = IndicatorSet::new();
    let errors = set.register("error", IndicatorStyle::Squiggle);
    let mut sink = RecordingSink::new();

    set.apply_ranges(errors, &ranges(&[(1, 2)]), &mut sink);
    set.reset();
    assert_eq!(set.channel(errors).applied_count(), 0);
    assert!(set.iter().all(|channel| channel.applied_fingerprint().is_none()));
}

#[test]
fn test_reregistering_with_new_style_forgets_state() {
    let mut set = IndicatorSet::new();
    let id = set.register("search", IndicatorStyle::Box);
    let mut sink = RecordingSink::new();
    set.apply_ranges(id, &ranges(&[(1, 2)]), &mut sink);

    assert_eq!(set.register("search", IndicatorStyle::StraightBox), id);
    assert_eq!(set.channel(id).style(), IndicatorStyle::StraightBox);
    assert_eq!(set.channel(id).applied_count(), 0);
}

#[test]
fn test_range_accessors() {
    let range = HighlightRange::from((4, 9));
    assert_eq!(range.start(), 4);
    assert_eq!(range.end(), 9);
    assert_eq!(range.len(), 5);
    assert!(!range.is_empty());
}
