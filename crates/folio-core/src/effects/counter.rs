//! Count-up effect for statistic displays

use std::fmt;
use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use tracing::debug;

use super::sink::{write_to, DisplaySink};
use super::Animation;

/// Step interval of every counter (~60 fps)
pub const COUNTER_STEP: Duration = Duration::from_millis(16);

/// Fixed text appended to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterSuffix {
    #[default]
    None,
    Plus,
    Percent,
}

impl CounterSuffix {
    pub fn as_str(&self) -> &'static str {
        match self {
            CounterSuffix::None => "",
            CounterSuffix::Plus => "+",
            CounterSuffix::Percent => "%",
        }
    }

    /// Suffix used by a display string such as `"50+"` or `"98%"`
    pub fn detect(text: &str) -> Self {
        if text.contains('+') {
            CounterSuffix::Plus
        } else if text.contains('%') {
            CounterSuffix::Percent
        } else {
            CounterSuffix::None
        }
    }
}

pub struct CounterAnimation {
    target: u64,
    suffix: CounterSuffix,
    steps: u64,
    elapsed_steps: u64,
    interval: Duration,
    started: bool,
    sink: Option<Box<dyn DisplaySink>>,
}

impl fmt::Debug for CounterAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterAnimation")
            .field("target", &self.target)
            .field("suffix", &self.suffix)
            .field("steps", &self.steps)
            .field("elapsed_steps", &self.elapsed_steps)
            .field("started", &self.started)
            .finish()
    }
}

/// Count `sink` up from 0 to `target` over `duration`
pub fn animate(
    sink: impl DisplaySink + 'static,
    target: u64,
    duration: Duration,
    suffix: CounterSuffix,
) -> CounterAnimation {
    CounterAnimation::new(target, duration, suffix).with_sink(sink)
}

impl CounterAnimation {
    pub fn new(target: u64, duration: Duration, suffix: CounterSuffix) -> Self {
        let steps = (duration.as_millis() / COUNTER_STEP.as_millis()).max(1) as u64;
        Self {
            target,
            suffix,
            steps,
            elapsed_steps: 0,
            interval: COUNTER_STEP,
            started: false,
            sink: None,
        }
    }

    /// Counter whose target and suffix are read from display text
    ///
    /// Non-digits are stripped, so `"50+"` counts to 50 with a `+` suffix.
    /// Returns `None` when the text holds no number.
    pub fn from_display(text: &str, duration: Duration) -> Option<Self> {
        static NON_DIGITS: OnceLock<Option<Regex>> = OnceLock::new();
        let re = NON_DIGITS.get_or_init(|| Regex::new(r"\D").ok()).as_ref()?;
        let digits = re.replace_all(text, "");
        let target = digits.parse::<u64>().ok()?;
        Some(Self::new(target, duration, CounterSuffix::detect(text)))
    }

    pub fn with_sink(mut self, sink: impl DisplaySink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn suffix(&self) -> CounterSuffix {
        self.suffix
    }

    pub fn is_done(&self) -> bool {
        (self.target == 0 && self.elapsed_steps > 0) || self.elapsed_steps >= self.steps
    }

    /// Value shown after `step` of `steps`, rounded up
    fn value_at(&self, step: u64) -> u64 {
        let scaled = self.target as u128 * step as u128;
        scaled.div_ceil(self.steps as u128) as u64
    }
}

impl Animation for CounterAnimation {
    fn activate(&mut self) -> Option<Duration> {
        if self.started {
            return None;
        }
        self.started = true;
        debug!(end_value = self.target, steps = self.steps, "Counter activated");
        if self.target == 0 {
            Some(Duration::ZERO)
        } else {
            Some(self.interval)
        }
    }

    fn step(&mut self) -> Option<Duration> {
        if self.is_done() {
            return None;
        }

        if self.target == 0 {
            self.elapsed_steps = self.steps;
            write_to(&mut self.sink, &format!("0{}", self.suffix.as_str()));
            return None;
        }

        self.elapsed_steps += 1;
        let value = self.value_at(self.elapsed_steps);
        write_to(&mut self.sink, &format!("{}{}", value, self.suffix.as_str()));

        if self.elapsed_steps >= self.steps {
            None
        } else {
            Some(self.interval)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::RecordingSink;

    fn drain(counter: &mut CounterAnimation) {
        counter.activate();
        while counter.step().is_some() {}
    }

    fn numbers(writes: &[String], suffix: &str) -> Vec<u64> {
        writes
            .iter()
            .map(|w| w.trim_end_matches(suffix).parse().unwrap())
            .collect()
    }

    #[test]
    fn test_zero_target_writes_once() {
        let recorder = RecordingSink::new();
        let mut counter = animate(
            recorder.clone(),
            0,
            Duration::from_millis(2000),
            CounterSuffix::Percent,
        );

        assert_eq!(counter.activate(), Some(Duration::ZERO));
        assert_eq!(counter.step(), None);
        assert_eq!(counter.step(), None);
        assert_eq!(recorder.writes(), vec!["0%"]);
    }

    #[test]
    fn test_counts_up_to_target() {
        let recorder = RecordingSink::new();
        let mut counter = animate(
            recorder.clone(),
            37,
            Duration::from_millis(2000),
            CounterSuffix::None,
        );
        drain(&mut counter);

        let writes = recorder.writes();
        assert_eq!(writes.len(), 125);
        assert_eq!(writes.last().map(String::as_str), Some("37"));

        let values = numbers(&writes, "");
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.iter().all(|&v| v <= 37));
    }

    #[test]
    fn test_rounds_up_intermediate_values() {
        let recorder = RecordingSink::new();
        let mut counter = animate(
            recorder.clone(),
            3,
            Duration::from_millis(160),
            CounterSuffix::Plus,
        );
        drain(&mut counter);

        // 10 steps, ceil(3 * k / 10)
        assert_eq!(
            recorder.writes(),
            vec!["1+", "1+", "1+", "2+", "2+", "2+", "3+", "3+", "3+", "3+"]
        );
    }

    #[test]
    fn test_short_duration_single_step() {
        let recorder = RecordingSink::new();
        let mut counter = animate(recorder.clone(), 5, Duration::ZERO, CounterSuffix::None);
        drain(&mut counter);
        assert_eq!(recorder.writes(), vec!["5"]);
    }

    #[test]
    fn test_from_display() {
        let counter = CounterAnimation::from_display("50+", Duration::from_secs(2)).unwrap();
        assert_eq!(counter.target(), 50);
        assert_eq!(counter.suffix(), CounterSuffix::Plus);

        let counter = CounterAnimation::from_display("100%", Duration::from_secs(2)).unwrap();
        assert_eq!(counter.target(), 100);
        assert_eq!(counter.suffix(), CounterSuffix::Percent);

        assert!(CounterAnimation::from_display("n/a", Duration::from_secs(2)).is_none());
    }

    #[test]
    fn test_activation_is_latched() {
        let mut counter = CounterAnimation::new(10, Duration::from_millis(100), CounterSuffix::None);
        assert_eq!(counter.activate(), Some(COUNTER_STEP));
        assert_eq!(counter.activate(), None);
    }
}
