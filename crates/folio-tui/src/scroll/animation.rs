//! Page scroll controller
//!
//! Line scrolling moves immediately; jumps to a section anchor animate along
//! the configured easing curve unless smooth scrolling is disabled.

use std::time::{Duration, Instant};

use folio_core::ScrollConfig;

use super::motion::{lerp_rows, progress, EasingType, EasingTypeExt};

#[derive(Debug, Clone)]
struct Glide {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    config: ScrollConfig,
    glide: Option<Glide>,
    position: u16,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            glide: None,
            position: 0,
        }
    }

    fn is_smooth(&self) -> bool {
        self.config.smooth_enabled && self.config.animation_duration_ms > 0
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.glide.is_some()
    }

    /// Current row offset
    #[inline]
    pub fn position(&self) -> u16 {
        self.position
    }

    /// Where the page will rest once the glide ends
    pub fn target(&self) -> u16 {
        self.glide.as_ref().map(|g| g.to).unwrap_or(self.position)
    }

    /// Move by `delta` rows at once, cancelling any glide
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16) {
        self.glide = None;
        self.position = (self.position as i32 + delta).clamp(0, max_scroll as i32) as u16;
    }

    /// Glide to an anchor row
    pub fn scroll_to(&mut self, target: u16, max_scroll: u16) {
        let target = target.min(max_scroll);

        if !self.is_smooth() || target == self.position {
            self.position = target;
            self.glide = None;
            return;
        }

        self.glide = Some(Glide {
            start: Instant::now(),
            from: self.position,
            to: target,
            duration: Duration::from_millis(self.config.animation_duration_ms),
            easing: self.config.easing,
        });
    }

    /// Advance the glide; returns the current position
    pub fn update(&mut self, max_scroll: u16) -> u16 {
        if let Some(glide) = &self.glide {
            let t = progress(glide.start, glide.duration);
            if t >= 1.0 {
                self.position = glide.to;
                self.glide = None;
            } else {
                self.position = lerp_rows(glide.from, glide.to, glide.easing.apply(t));
            }
        }
        self.position = self.position.min(max_scroll);
        self.position
    }
}
