//! Text and number effects driven by a delay-based scheduler
//!
//! Every effect is an explicit state machine implementing [`Animation`]:
//! `step()` performs one visible change and returns the delay before the
//! next step, so pacing is controlled entirely by the returned delays.
//!
//! - `sink` - display sinks the effects write into
//! - `typing` - character-reveal effects (cycling and single-shot)
//! - `counter` - numeric count-up effect
//! - `timeline` - virtual-clock scheduler

pub mod counter;
pub mod sink;
pub mod timeline;
pub mod typing;

use std::time::Duration;

pub use counter::{animate, CounterAnimation, CounterSuffix};
pub use sink::{DisplaySink, RecordingSink, SharedText};
pub use timeline::{AnimationId, Clock, ManualClock, SystemClock, Timeline};
pub use typing::{TypingEffect, TypingKind, TypingMode, TypingSequence, TypingTimings};

/// A self-paced effect advanced by a scheduler
pub trait Animation: Send {
    /// Start the effect
    ///
    /// Returns the delay before the first step, or `None` if the effect has
    /// already been started. Activation is latched on the instance.
    fn activate(&mut self) -> Option<Duration>;

    /// Perform one step
    ///
    /// Returns the delay before the next step, or `None` once finished.
    fn step(&mut self) -> Option<Duration>;
}

impl<A: Animation + ?Sized> Animation for Box<A> {
    fn activate(&mut self) -> Option<Duration> {
        (**self).activate()
    }

    fn step(&mut self) -> Option<Duration> {
        (**self).step()
    }
}
