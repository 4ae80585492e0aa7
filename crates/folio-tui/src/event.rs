use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::scroll::frame_interval;

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    frame_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64, animation_fps: u32) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            frame_rate: frame_interval(animation_fps),
        }
    }

    /// Poll for the next event, waking at frame rate while anything animates
    pub fn next(&self, animating: bool) -> Result<Option<AppEvent>> {
        let timeout = if animating {
            self.frame_rate.min(self.tick_rate)
        } else {
            self.tick_rate
        };

        if event::poll(timeout)? {
            match event::read()? {
                // Only key presses; some terminals also report releases
                Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(AppEvent::Key(key))),
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Nothing happened within the poll timeout
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_rate_never_zero() {
        let handler = EventHandler::new(250, 5000);
        assert_eq!(handler.frame_rate, Duration::from_millis(1));
        assert_eq!(handler.tick_rate, Duration::from_millis(250));
    }
}
