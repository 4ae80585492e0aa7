//! One-shot activation when a region scrolls into view

use std::fmt;

use tracing::debug;

/// Name of an observable region of the page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region(String);

impl Region {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Region {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Host capability answering how much of a region is visible
pub trait VisibilitySource {
    /// Visible fraction of `region` in `[0, 1]`; unknown regions are 0
    fn visible_fraction(&self, region: &Region) -> f64;
}

type Callback<C> = Box<dyn FnOnce(&mut C) + Send>;

/// Latch that runs its callback the first time a threshold is reached
pub struct ActivationWatcher<C> {
    region: Region,
    threshold: f64,
    callback: Option<Callback<C>>,
}

impl<C> fmt::Debug for ActivationWatcher<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivationWatcher")
            .field("region", &self.region)
            .field("threshold", &self.threshold)
            .field("fired", &self.fired())
            .finish()
    }
}

impl<C> ActivationWatcher<C> {
    /// `threshold` is clamped into `(0, 1]`
    pub fn new(
        region: impl Into<Region>,
        threshold: f64,
        callback: impl FnOnce(&mut C) + Send + 'static,
    ) -> Self {
        Self {
            region: region.into(),
            threshold: threshold.clamp(f64::MIN_POSITIVE, 1.0),
            callback: Some(Box::new(callback)),
        }
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn fired(&self) -> bool {
        self.callback.is_none()
    }

    /// Feed one visibility sample; returns `true` only on the firing sample
    pub fn observe(&mut self, visible_fraction: f64, ctx: &mut C) -> bool {
        if visible_fraction < self.threshold {
            return false;
        }
        match self.callback.take() {
            Some(callback) => {
                debug!(region = %self.region, visible_fraction, "Region activated");
                callback(ctx);
                true
            }
            None => false,
        }
    }
}

/// Set of watchers polled against a [`VisibilitySource`]
///
/// Fired watchers are detached and dropped, so a region that enters the
/// viewport again never re-runs a callback.
pub struct ViewportActivation<C> {
    watchers: Vec<ActivationWatcher<C>>,
}

impl<C> Default for ViewportActivation<C> {
    fn default() -> Self {
        Self {
            watchers: Vec::new(),
        }
    }
}

impl<C> ViewportActivation<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `callback` once, the first time `threshold` of `region` is visible
    pub fn watch(
        &mut self,
        region: impl Into<Region>,
        threshold: f64,
        callback: impl FnOnce(&mut C) + Send + 'static,
    ) {
        self.watchers
            .push(ActivationWatcher::new(region, threshold, callback));
    }

    /// Watchers that have not fired yet
    pub fn pending(&self) -> usize {
        self.watchers.len()
    }

    /// Sample visibility for every pending watcher; returns how many fired
    pub fn poll(&mut self, source: &impl VisibilitySource, ctx: &mut C) -> usize {
        let mut fired = 0;
        self.watchers.retain_mut(|watcher| {
            let fraction = source.visible_fraction(watcher.region());
            if watcher.observe(fraction, ctx) {
                fired += 1;
            }
            !watcher.fired()
        });
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeViewport {
        fractions: HashMap<String, f64>,
    }

    impl FakeViewport {
        fn set(&mut self, region: &str, fraction: f64) {
            self.fractions.insert(region.to_string(), fraction);
        }
    }

    impl VisibilitySource for FakeViewport {
        fn visible_fraction(&self, region: &Region) -> f64 {
            self.fractions.get(region.as_str()).copied().unwrap_or(0.0)
        }
    }

    #[test]
    fn test_fires_once() {
        let mut calls = 0u32;
        let mut watcher = ActivationWatcher::new("stats", 0.3, |calls: &mut u32| *calls += 1);

        assert!(watcher.observe(0.5, &mut calls));
        assert!(!watcher.observe(0.5, &mut calls));
        assert!(!watcher.observe(1.0, &mut calls));
        assert_eq!(calls, 1);
        assert!(watcher.fired());
    }

    #[test]
    fn test_below_threshold_does_not_fire() {
        let mut calls = 0u32;
        let mut watcher = ActivationWatcher::new("stats", 0.3, |calls: &mut u32| *calls += 1);

        assert!(!watcher.observe(0.29, &mut calls));
        assert!(!watcher.fired());
        assert!(watcher.observe(0.3, &mut calls));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_reentering_view_does_not_refire() {
        let mut viewport = FakeViewport::default();
        let mut log: Vec<&'static str> = Vec::new();
        let mut activation = ViewportActivation::new();
        activation.watch("about", 0.3, |log: &mut Vec<&'static str>| log.push("about"));

        viewport.set("about", 0.5);
        assert_eq!(activation.poll(&viewport, &mut log), 1);
        assert_eq!(activation.pending(), 0);

        viewport.set("about", 0.0);
        activation.poll(&viewport, &mut log);
        viewport.set("about", 0.8);
        assert_eq!(activation.poll(&viewport, &mut log), 0);

        assert_eq!(log, vec!["about"]);
    }

    #[test]
    fn test_overlapping_watchers_fire_independently() {
        let mut viewport = FakeViewport::default();
        let mut log: Vec<&'static str> = Vec::new();
        let mut activation = ViewportActivation::new();
        activation.watch("hero", 0.1, |log: &mut Vec<&'static str>| log.push("early"));
        activation.watch("hero", 0.9, |log: &mut Vec<&'static str>| log.push("late"));

        viewport.set("hero", 0.5);
        activation.poll(&viewport, &mut log);
        assert_eq!(log, vec!["early"]);
        assert_eq!(activation.pending(), 1);

        viewport.set("hero", 1.0);
        activation.poll(&viewport, &mut log);
        viewport.set("hero", 1.0);
        activation.poll(&viewport, &mut log);
        assert_eq!(log, vec!["early", "late"]);
        assert_eq!(activation.pending(), 0);
    }

    #[test]
    fn test_never_visible_never_fires() {
        let viewport = FakeViewport::default();
        let mut log: Vec<&'static str> = Vec::new();
        let mut activation = ViewportActivation::new();
        activation.watch("footer", 0.3, |log: &mut Vec<&'static str>| log.push("footer"));

        for _ in 0..100 {
            activation.poll(&viewport, &mut log);
        }
        assert!(log.is_empty());
        assert_eq!(activation.pending(), 1);
    }

    #[test]
    fn test_threshold_clamped() {
        let watcher = ActivationWatcher::new("x", 1.5, |_: &mut ()| {});
        assert_eq!(watcher.threshold(), 1.0);
        let watcher = ActivationWatcher::new("x", 0.0, |_: &mut ()| {});
        assert!(watcher.threshold() > 0.0);
    }
}
