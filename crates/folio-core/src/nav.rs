//! Scroll-driven navigation state

use serde::{Deserialize, Serialize};

/// Offsets in rows of the host's scroll unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavConfig {
    /// Navbar switches to its scrolled style past this offset
    #[serde(default = "default_scrolled_threshold")]
    pub scrolled_threshold: u16,
    /// Look-ahead added to the scroll position when picking the active section
    #[serde(default = "default_active_offset")]
    pub active_offset: u16,
    /// Space left above a section when jumping to it (fixed navbar height)
    #[serde(default = "default_anchor_offset")]
    pub anchor_offset: u16,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: default_scrolled_threshold(),
            active_offset: default_active_offset(),
            anchor_offset: default_anchor_offset(),
        }
    }
}

fn default_scrolled_threshold() -> u16 {
    2
}

fn default_active_offset() -> u16 {
    4
}

fn default_anchor_offset() -> u16 {
    0
}

/// A section's extent along the scroll axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBounds {
    pub id: String,
    pub top: u16,
    pub height: u16,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: u16, height: u16) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, pos: u32) -> bool {
        let top = self.top as u32;
        pos >= top && pos < top + self.height as u32
    }
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    config: NavConfig,
    sections: Vec<SectionBounds>,
    active: Option<String>,
    scrolled: bool,
    menu_open: bool,
}

impl NavigationController {
    pub fn new(config: NavConfig) -> Self {
        Self {
            config,
            sections: Vec::new(),
            active: None,
            scrolled: false,
            menu_open: false,
        }
    }

    /// Replace the section layout (e.g. after a resize)
    pub fn set_sections(&mut self, sections: Vec<SectionBounds>) {
        self.sections = sections;
    }

    pub fn sections(&self) -> &[SectionBounds] {
        &self.sections
    }

    /// Recompute state for a scroll position
    pub fn on_scroll(&mut self, scroll_y: u16) {
        self.scrolled = scroll_y > self.config.scrolled_threshold;
        if let Some(id) = self.section_at(scroll_y) {
            self.active = Some(id.to_string());
        }
    }

    /// Section under `scroll_y` plus the look-ahead offset
    pub fn section_at(&self, scroll_y: u16) -> Option<&str> {
        let pos = scroll_y as u32 + self.config.active_offset as u32;
        self.sections
            .iter()
            .find(|s| s.contains(pos))
            .map(|s| s.id.as_str())
    }

    /// Currently highlighted link
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Navbar scrolled style
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Scroll position that brings `id` under the navbar
    pub fn anchor_target(&self, id: &str) -> Option<u16> {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.top.saturating_sub(self.config.anchor_offset))
    }

    /// Follow a nav link: closes the menu and returns the scroll target
    pub fn follow_link(&mut self, id: &str) -> Option<u16> {
        self.menu_open = false;
        self.anchor_target(id)
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }
}
