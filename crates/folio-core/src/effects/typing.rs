//! Character-reveal typing effects
//!
//! One state machine serves both variants:
//!
//! ```text
//!            c < len            c == len
//! Typing ──────────────▶ Typing ─────────▶ Pausing ──▶ Deleting ─┐
//!   ▲  (forward delay)            (end pause)   (backward)       │ c > 0
//!   │                                                  ◀─────────┘
//!   └──────────── c == 0, i = (i + 1) mod N (start pause) ───────
//! ```
//!
//! Single-shot effects stop in `Done` as soon as the text is fully typed.

use std::fmt;
use std::time::Duration;

use tracing::debug;

use super::sink::{write_to, DisplaySink};
use super::Animation;

/// Ordered, wrap-around list of texts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingSequence {
    items: Vec<String>,
}

impl TypingSequence {
    /// Build a sequence; `None` when there are no items
    pub fn new<I, S>(items: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// Sequence holding exactly one text
    pub fn single(text: impl Into<String>) -> Self {
        Self {
            items: vec![text.into()],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> &str {
        &self.items[index % self.items.len()]
    }
}

/// Delays between steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTimings {
    /// Between typed characters
    pub forward: Duration,
    /// Between deleted characters
    pub backward: Duration,
    /// Hold at the fully typed item
    pub end_pause: Duration,
    /// Gap before typing the next item
    pub start_pause: Duration,
    /// Before the very first step
    pub start_delay: Duration,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            forward: Duration::from_millis(100),
            backward: Duration::from_millis(50),
            end_pause: Duration::from_millis(2000),
            start_pause: Duration::from_millis(500),
            start_delay: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingKind {
    /// Type, pause, delete, advance; forever
    Cycling,
    /// Type once and stop
    SingleShot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingMode {
    Typing,
    Pausing,
    Deleting,
    Done,
}

pub struct TypingEffect {
    sequence: TypingSequence,
    kind: TypingKind,
    timings: TypingTimings,
    index: usize,
    cursor: usize,
    mode: TypingMode,
    started: bool,
    sink: Option<Box<dyn DisplaySink>>,
}

impl fmt::Debug for TypingEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypingEffect")
            .field("kind", &self.kind)
            .field("index", &self.index)
            .field("cursor", &self.cursor)
            .field("mode", &self.mode)
            .field("started", &self.started)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}

impl TypingEffect {
    /// Effect cycling through `sequence` indefinitely
    pub fn cycling(sequence: TypingSequence, timings: TypingTimings) -> Self {
        Self::new(sequence, TypingKind::Cycling, timings)
    }

    /// Effect typing `text` once
    pub fn single_shot(text: impl Into<String>, timings: TypingTimings) -> Self {
        Self::new(TypingSequence::single(text), TypingKind::SingleShot, timings)
    }

    fn new(sequence: TypingSequence, kind: TypingKind, timings: TypingTimings) -> Self {
        Self {
            sequence,
            kind,
            timings,
            index: 0,
            cursor: 0,
            mode: TypingMode::Typing,
            started: false,
            sink: None,
        }
    }

    /// Attach the display sink
    pub fn with_sink(mut self, sink: impl DisplaySink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn kind(&self) -> TypingKind {
        self.kind
    }

    pub fn mode(&self) -> TypingMode {
        self.mode
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_done(&self) -> bool {
        self.mode == TypingMode::Done
    }

    /// Prefix of the current item currently on display
    pub fn visible_text(&self) -> &str {
        char_prefix(self.sequence.get(self.index), self.cursor)
    }

    fn current_len(&self) -> usize {
        self.sequence.get(self.index).chars().count()
    }

    fn emit(&mut self) {
        let text = char_prefix(self.sequence.get(self.index), self.cursor);
        write_to(&mut self.sink, text);
    }
}

impl Animation for TypingEffect {
    fn activate(&mut self) -> Option<Duration> {
        if self.started {
            return None;
        }
        self.started = true;
        debug!(kind = ?self.kind, items = self.sequence.len(), "Typing effect activated");
        Some(self.timings.start_delay)
    }

    fn step(&mut self) -> Option<Duration> {
        match self.mode {
            TypingMode::Typing => {
                let len = self.current_len();
                if self.cursor < len {
                    self.cursor += 1;
                    self.emit();
                }
                if self.cursor < len {
                    return Some(self.timings.forward);
                }
                match self.kind {
                    TypingKind::SingleShot => {
                        self.mode = TypingMode::Done;
                        None
                    }
                    TypingKind::Cycling => {
                        self.mode = TypingMode::Pausing;
                        Some(self.timings.end_pause)
                    }
                }
            }
            TypingMode::Pausing => {
                // Pause frame: the full item stays on display
                self.emit();
                self.mode = TypingMode::Deleting;
                Some(self.timings.backward)
            }
            TypingMode::Deleting => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.emit();
                }
                if self.cursor > 0 {
                    return Some(self.timings.backward);
                }
                self.index = (self.index + 1) % self.sequence.len();
                self.mode = TypingMode::Typing;
                Some(self.timings.start_pause)
            }
            TypingMode::Done => None,
        }
    }
}

/// First `count` characters of `text`, never splitting a code point
fn char_prefix(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::RecordingSink;

    fn timings() -> TypingTimings {
        TypingTimings {
            forward: Duration::from_millis(100),
            backward: Duration::from_millis(50),
            end_pause: Duration::from_millis(2000),
            start_pause: Duration::from_millis(500),
            start_delay: Duration::from_millis(1000),
        }
    }

    fn run_steps(effect: &mut TypingEffect, n: usize) -> Vec<Option<Duration>> {
        (0..n).map(|_| effect.step()).collect()
    }

    #[test]
    fn test_cycling_single_item_sequence() {
        let recorder = RecordingSink::new();
        let sequence = TypingSequence::new(["AB"]).unwrap();
        let mut effect = TypingEffect::cycling(sequence, timings()).with_sink(recorder.clone());

        run_steps(&mut effect, 7);
        assert_eq!(
            recorder.writes(),
            vec!["A", "AB", "AB", "A", "", "A", "AB"]
        );

        // The second cycle repeats the first one exactly
        run_steps(&mut effect, 5);
        let writes = recorder.writes();
        assert_eq!(writes[5..12], writes[0..7]);
    }

    #[test]
    fn test_cycling_delays() {
        let sequence = TypingSequence::new(["AB"]).unwrap();
        let mut effect = TypingEffect::cycling(sequence, timings());

        let ms = |v: u64| Some(Duration::from_millis(v));
        assert_eq!(
            run_steps(&mut effect, 5),
            vec![ms(100), ms(2000), ms(50), ms(50), ms(500)]
        );
    }

    #[test]
    fn test_single_shot_stops() {
        let recorder = RecordingSink::new();
        let mut effect = TypingEffect::single_shot("hi", timings()).with_sink(recorder.clone());

        assert_eq!(effect.step(), Some(Duration::from_millis(100)));
        assert_eq!(effect.step(), None);
        assert!(effect.is_done());

        for _ in 0..50 {
            assert_eq!(effect.step(), None);
        }
        assert_eq!(recorder.writes(), vec!["h", "hi"]);
    }

    #[test]
    fn test_advances_and_wraps() {
        let recorder = RecordingSink::new();
        let sequence = TypingSequence::new(["ab", "c"]).unwrap();
        let mut effect = TypingEffect::cycling(sequence, timings()).with_sink(recorder.clone());

        // "ab": 2 typed + pause + 2 deleted
        run_steps(&mut effect, 5);
        assert_eq!(effect.index(), 1);
        assert_eq!(effect.mode(), TypingMode::Typing);

        // "c": 1 typed + pause + 1 deleted
        run_steps(&mut effect, 3);
        assert_eq!(effect.index(), 0);
        assert_eq!(
            recorder.writes(),
            vec!["a", "ab", "ab", "a", "", "c", "c", ""]
        );
    }

    #[test]
    fn test_empty_item_skips_typing() {
        let recorder = RecordingSink::new();
        let sequence = TypingSequence::new(["", "x"]).unwrap();
        let mut effect = TypingEffect::cycling(sequence, timings()).with_sink(recorder.clone());

        // Zero typing steps: straight to the pause
        assert_eq!(effect.step(), Some(Duration::from_millis(2000)));
        assert_eq!(effect.mode(), TypingMode::Pausing);
        assert!(recorder.writes().is_empty());

        effect.step();
        assert_eq!(effect.step(), Some(Duration::from_millis(500)));
        assert_eq!(effect.index(), 1);
        effect.step();
        assert_eq!(recorder.last().as_deref(), Some("x"));
    }

    #[test]
    fn test_prefix_respects_char_boundaries() {
        let recorder = RecordingSink::new();
        let mut effect =
            TypingEffect::single_shot("héllo→", timings()).with_sink(recorder.clone());
        while effect.step().is_some() {}

        let writes = recorder.writes();
        assert_eq!(writes.len(), 6);
        assert_eq!(writes[1], "hé");
        assert_eq!(writes[5], "héllo→");
        for (n, write) in writes.iter().enumerate() {
            assert_eq!(write.chars().count(), n + 1);
        }
    }

    #[test]
    fn test_activation_is_latched() {
        let mut effect = TypingEffect::single_shot("hi", timings());
        assert!(!effect.is_started());
        assert_eq!(effect.activate(), Some(Duration::from_millis(1000)));
        assert_eq!(effect.activate(), None);
        assert!(effect.is_started());
    }

    #[test]
    fn test_without_sink_still_advances() {
        let mut effect = TypingEffect::single_shot("abc", timings());
        while effect.step().is_some() {}
        assert!(effect.is_done());
        assert_eq!(effect.visible_text(), "abc");
    }

    #[test]
    fn test_empty_sequence_rejected() {
        assert!(TypingSequence::new(Vec::<String>::new()).is_none());
    }

    #[test]
    fn test_char_prefix() {
        assert_eq!(char_prefix("abc", 0), "");
        assert_eq!(char_prefix("abc", 2), "ab");
        assert_eq!(char_prefix("abc", 10), "abc");
    }
}
