//! Delay-based scheduler for [`Animation`]s
//!
//! [`Timeline`] runs any number of animations on a virtual clock. The host
//! advances it from a [`Clock`] once per frame; tests advance it by hand.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use tracing::warn;

use super::Animation;

/// Upper bound on steps in one `advance`, guards against all-zero delays
const MAX_STEPS_PER_ADVANCE: usize = 100_000;

/// Source of monotonic time measured from an origin
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock backed by `Instant`
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock moved forward explicitly
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }
}

/// Handle to an animation registered on a [`Timeline`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(usize);

/// Single-threaded cooperative scheduler on a virtual clock
///
/// Each animation has at most one pending step. Due steps run strictly in
/// time order, ties in the order they were scheduled, and a step's successor
/// is only scheduled once the step has completed.
#[derive(Default)]
pub struct Timeline {
    now: Duration,
    seq: u64,
    slots: Vec<Option<Box<dyn Animation>>>,
    queue: BinaryHeap<Reverse<(Duration, u64, usize)>>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of animations waiting for their next step
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Add an animation without starting it
    pub fn register(&mut self, animation: impl Animation + 'static) -> AnimationId {
        self.slots.push(Some(Box::new(animation)));
        AnimationId(self.slots.len() - 1)
    }

    /// Start a registered animation
    ///
    /// Returns `false` if it was already started or has finished.
    pub fn activate(&mut self, id: AnimationId) -> bool {
        let Some(Some(animation)) = self.slots.get_mut(id.0) else {
            return false;
        };
        match animation.activate() {
            Some(delay) => {
                self.schedule(id.0, self.now + delay);
                true
            }
            None => false,
        }
    }

    /// Register and immediately start an animation
    pub fn start(&mut self, animation: impl Animation + 'static) -> AnimationId {
        let id = self.register(animation);
        self.activate(id);
        id
    }

    /// Whether the animation still exists (not yet finished)
    pub fn is_alive(&self, id: AnimationId) -> bool {
        matches!(self.slots.get(id.0), Some(Some(_)))
    }

    /// Move the clock forward by `by`, running every step that falls due
    pub fn advance(&mut self, by: Duration) -> usize {
        self.advance_to(self.now + by)
    }

    /// Bring the timeline up to `clock`
    pub fn sync(&mut self, clock: &impl Clock) -> usize {
        self.advance_to(clock.now())
    }

    /// Run every step due at or before `target`, returning how many ran
    pub fn advance_to(&mut self, target: Duration) -> usize {
        let mut steps = 0;

        while let Some(&Reverse((due, _, slot))) = self.queue.peek() {
            if due > target {
                break;
            }
            if steps >= MAX_STEPS_PER_ADVANCE {
                warn!(steps, "Timeline step budget exhausted; check for zero delays");
                break;
            }
            self.queue.pop();
            self.now = due;
            steps += 1;

            let next = match self.slots.get_mut(slot) {
                Some(Some(animation)) => animation.step(),
                _ => None,
            };
            match next {
                Some(delay) => self.schedule(slot, due + delay),
                None => self.slots[slot] = None,
            }
        }

        if target > self.now {
            self.now = target;
        }
        steps
    }

    fn schedule(&mut self, slot: usize, due: Duration) {
        self.queue.push(Reverse((due, self.seq, slot)));
        self.seq += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{
        CounterAnimation, CounterSuffix, RecordingSink, SharedText, TypingEffect, TypingSequence,
        TypingTimings,
    };

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn timings() -> TypingTimings {
        TypingTimings {
            start_delay: ms(1000),
            ..TypingTimings::default()
        }
    }

    #[test]
    fn test_typing_follows_delays() {
        let text = SharedText::new();
        let mut timeline = Timeline::new();
        let sequence = TypingSequence::new(["AB"]).unwrap();
        timeline.start(TypingEffect::cycling(sequence, timings()).with_sink(text.clone()));

        timeline.advance(ms(999));
        assert_eq!(text.get(), "");
        timeline.advance(ms(1));
        assert_eq!(text.get(), "A");
        timeline.advance(ms(100));
        assert_eq!(text.get(), "AB");

        // Held for the end pause
        timeline.advance(ms(1999));
        assert_eq!(text.get(), "AB");
        timeline.advance(ms(1));
        timeline.advance(ms(50));
        assert_eq!(text.get(), "A");
        timeline.advance(ms(50));
        assert_eq!(text.get(), "");

        // Next item after the start pause
        timeline.advance(ms(499));
        assert_eq!(text.get(), "");
        timeline.advance(ms(1));
        assert_eq!(text.get(), "A");
    }

    #[test]
    fn test_single_shot_goes_quiet() {
        let recorder = RecordingSink::new();
        let mut timeline = Timeline::new();
        let id = timeline.start(TypingEffect::single_shot("hi", timings()).with_sink(recorder.clone()));

        timeline.advance(Duration::from_secs(60));
        assert_eq!(recorder.writes(), vec!["h", "hi"]);
        assert!(!timeline.is_alive(id));
        assert_eq!(timeline.pending(), 0);

        timeline.advance(Duration::from_secs(3600));
        assert_eq!(recorder.writes().len(), 2);
    }

    #[test]
    fn test_activate_is_idempotent() {
        let recorder = RecordingSink::new();
        let mut timeline = Timeline::new();
        let id = timeline.register(
            TypingEffect::single_shot("abc", TypingTimings::default()).with_sink(recorder.clone()),
        );

        assert!(timeline.activate(id));
        assert!(!timeline.activate(id));
        assert_eq!(timeline.pending(), 1);

        timeline.advance(Duration::from_secs(5));
        assert!(!timeline.activate(id));
        assert_eq!(recorder.writes(), vec!["a", "ab", "abc"]);
    }

    #[test]
    fn test_registered_animation_waits_for_activation() {
        let text = SharedText::new();
        let mut timeline = Timeline::new();
        let id = timeline.register(
            CounterAnimation::new(5, ms(160), CounterSuffix::Plus).with_sink(text.clone()),
        );

        timeline.advance(Duration::from_secs(10));
        assert_eq!(text.get(), "");

        timeline.activate(id);
        timeline.advance(Duration::from_secs(1));
        assert_eq!(text.get(), "5+");
    }

    #[test]
    fn test_independent_effects_interleave() {
        let first = RecordingSink::new();
        let second = RecordingSink::new();
        let mut timeline = Timeline::new();
        let fast = TypingTimings {
            forward: ms(10),
            ..TypingTimings::default()
        };
        let slow = TypingTimings {
            forward: ms(25),
            ..TypingTimings::default()
        };
        timeline.start(TypingEffect::single_shot("abcd", fast).with_sink(first.clone()));
        timeline.start(TypingEffect::single_shot("xy", slow).with_sink(second.clone()));

        let steps = timeline.advance(ms(100));
        assert_eq!(steps, 6);
        assert_eq!(first.writes(), vec!["a", "ab", "abc", "abcd"]);
        assert_eq!(second.writes(), vec!["x", "xy"]);
    }

    #[test]
    fn test_sync_with_manual_clock() {
        let text = SharedText::new();
        let mut clock = ManualClock::new();
        let mut timeline = Timeline::new();
        timeline.start(TypingEffect::single_shot("ok", TypingTimings::default()).with_sink(text.clone()));

        clock.advance(ms(100));
        timeline.sync(&clock);
        assert_eq!(text.get(), "ok");
        assert_eq!(timeline.now(), ms(100));
    }

    #[test]
    fn test_clock_never_moves_backward() {
        let mut timeline = Timeline::new();
        timeline.advance_to(ms(500));
        timeline.advance_to(ms(100));
        assert_eq!(timeline.now(), ms(500));
    }
}
