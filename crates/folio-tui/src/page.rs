//! Section layout of the scrolled page

use folio_core::nav::SectionBounds;
use folio_core::{Region, VisibilitySource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Projects,
    Collaborate,
    Globe,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Collaborate,
        Section::Globe,
    ];

    /// Anchor id, also the region name used for activation
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Collaborate => "collaborate",
            Section::Globe => "globe",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Collaborate => "Collaborate",
            Section::Globe => "Reach",
        }
    }

    /// Rows the section occupies; every renderer pads to this height
    pub fn height(&self) -> u16 {
        match self {
            Section::Home => 14,
            Section::About => 12,
            Section::Projects => 18,
            Section::Collaborate => 12,
            Section::Globe => 24,
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn region(&self) -> Region {
        Region::new(self.id())
    }
}

/// Stacked sections plus the current viewport
#[derive(Debug, Clone)]
pub struct PageLayout {
    bounds: Vec<SectionBounds>,
    scroll: u16,
    viewport_height: u16,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl PageLayout {
    pub fn new() -> Self {
        let mut top = 0;
        let bounds = Section::ALL
            .iter()
            .map(|section| {
                let bounds = SectionBounds::new(section.id(), top, section.height());
                top += section.height();
                bounds
            })
            .collect();
        Self {
            bounds,
            scroll: 0,
            viewport_height: 0,
        }
    }

    pub fn bounds(&self) -> &[SectionBounds] {
        &self.bounds
    }

    pub fn total_height(&self) -> u16 {
        self.bounds.iter().map(|b| b.height).sum()
    }

    /// Largest scroll offset that still fills the viewport
    pub fn max_scroll(&self) -> u16 {
        self.total_height().saturating_sub(self.viewport_height)
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub fn set_viewport(&mut self, scroll: u16, height: u16) {
        self.viewport_height = height;
        self.scroll = scroll;
    }

    fn visible_rows(&self, bounds: &SectionBounds) -> u16 {
        let view_top = self.scroll as u32;
        let view_bottom = view_top + self.viewport_height as u32;
        let top = bounds.top as u32;
        let bottom = top + bounds.height as u32;
        view_bottom.min(bottom).saturating_sub(view_top.max(top)) as u16
    }
}

impl VisibilitySource for PageLayout {
    fn visible_fraction(&self, region: &Region) -> f64 {
        self.bounds
            .iter()
            .find(|b| b.id == region.as_str())
            .filter(|b| b.height > 0)
            .map(|b| self.visible_rows(b) as f64 / b.height as f64)
            .unwrap_or(0.0)
    }
}
