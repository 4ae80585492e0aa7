use std::sync::Arc;
use std::time::Duration;

use folio_core::catalog::{Modal, Project, ProjectCatalog, ProjectFilter};
use folio_core::effects::{
    AnimationId, CounterAnimation, CounterSuffix, SharedText, Timeline, TypingEffect,
    TypingSequence,
};
use folio_core::globe::Globe;
use folio_core::nav::NavigationController;
use folio_core::stats::{StatsOrigin, StatsReport};
use folio_core::{AppConfig, ViewportActivation, VisibilitySource};
use tracing::{debug, info, warn};

use crate::input::Action;
use crate::page::{PageLayout, Section};
use crate::scroll::ScrollAnimator;
use crate::theme::Theme;

/// Visible share of a section that starts its effects
pub const ACTIVATION_THRESHOLD: f64 = 0.3;

/// Globe rotation per drag key press, in radians
const DRAG_STEP: f64 = 0.25;

/// A labelled number that counts up once activated
#[derive(Debug, Clone)]
pub struct StatCounter {
    pub label: String,
    pub suffix: CounterSuffix,
    pub text: SharedText,
}

impl StatCounter {
    fn new(label: impl Into<String>, suffix: CounterSuffix) -> Self {
        Self {
            label: label.into(),
            suffix,
            text: SharedText::new(),
        }
    }
}

/// Text cells written by the effects and read by the renderer
#[derive(Debug, Clone)]
pub struct PageTexts {
    pub role: SharedText,
    pub terminal: SharedText,
    pub collaboration: SharedText,
    pub snippet: SharedText,
    pub about: Vec<StatCounter>,
    pub reach: Vec<StatCounter>,
}

impl Default for PageTexts {
    fn default() -> Self {
        Self {
            role: SharedText::new(),
            terminal: SharedText::new(),
            collaboration: SharedText::new(),
            snippet: SharedText::new(),
            about: vec![
                StatCounter::new("Projects", CounterSuffix::Plus),
                StatCounter::new("Discord Bots", CounterSuffix::Plus),
                StatCounter::new("Web Apps", CounterSuffix::Plus),
                StatCounter::new("Languages", CounterSuffix::Plus),
                StatCounter::new("Open Source", CounterSuffix::Percent),
            ],
            reach: Vec::new(),
        }
    }
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub layout: PageLayout,
    pub nav: NavigationController,
    pub scroll: ScrollAnimator,
    pub timeline: Timeline,
    activation: ViewportActivation<Timeline>,
    pub texts: PageTexts,
    pub catalog: ProjectCatalog,
    pub filter: ProjectFilter,
    /// Index into the cards visible under `filter`
    pub selected_project: usize,
    pub modal: Modal,
    pub globe: Globe,
    /// Set once the statistics report has been applied
    pub stats_origin: Option<StatsOrigin>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    last_tick: Option<Duration>,
}

impl App {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let layout = PageLayout::new();
        let mut nav = NavigationController::new(config.nav.clone());
        nav.set_sections(layout.bounds().to_vec());

        let globe = Globe::new(
            config.globe.points,
            config.globe.rotation_speed,
            Duration::from_millis(config.globe.resume_after_ms),
        );

        let mut app = Self {
            scroll: ScrollAnimator::new(config.ui.scroll.clone()),
            config,
            theme: Theme::default(),
            layout,
            nav,
            timeline: Timeline::new(),
            activation: ViewportActivation::new(),
            texts: PageTexts::default(),
            catalog: ProjectCatalog,
            filter: ProjectFilter::All,
            selected_project: 0,
            modal: Modal::default(),
            globe,
            stats_origin: None,
            should_quit: false,
            status_message: None,
            last_tick: None,
        };
        app.wire_effects();
        app
    }

    /// Register every page effect and the watchers that start them
    fn wire_effects(&mut self) {
        let config = Arc::clone(&self.config);
        let profile = &config.profile;
        let typing = &config.typing;

        // Role title runs from load
        match TypingSequence::new(profile.roles.iter()) {
            Some(roles) => {
                self.timeline.start(
                    TypingEffect::cycling(roles, typing.role_timings())
                        .with_sink(self.texts.role.clone()),
                );
            }
            None => warn!("No role titles configured"),
        }

        let terminal = self.timeline.register(
            TypingEffect::single_shot(profile.terminal_prompt.as_str(), typing.single_shot_timings())
                .with_sink(self.texts.terminal.clone()),
        );
        self.watch(Section::Home, vec![terminal]);

        let mut collaborate = vec![self.timeline.register(
            TypingEffect::single_shot(
                profile.collaboration_text.as_str(),
                typing.single_shot_timings(),
            )
            .with_sink(self.texts.collaboration.clone()),
        )];
        if let Some(snippets) = TypingSequence::new(profile.code_snippets.iter()) {
            collaborate.push(self.timeline.register(
                TypingEffect::cycling(snippets, typing.snippet_timings())
                    .with_sink(self.texts.snippet.clone()),
            ));
        }
        self.watch(Section::Collaborate, collaborate);

        // Reach figures count up to whatever their display text says
        let duration = config.stats.counter_duration();
        let mut ids = Vec::with_capacity(config.globe.figures.len());
        for figure in &config.globe.figures {
            let Some(counter) = CounterAnimation::from_display(&figure.value, duration) else {
                warn!(
                    label = %figure.label,
                    value = %figure.value,
                    "Skipping reach figure without a number"
                );
                continue;
            };
            let stat = StatCounter::new(figure.label.as_str(), counter.suffix());
            ids.push(self.timeline.register(counter.with_sink(stat.text.clone())));
            self.texts.reach.push(stat);
        }
        self.watch(Section::Globe, ids);
    }

    fn watch(&mut self, section: Section, ids: Vec<AnimationId>) {
        self.activation
            .watch(section.region(), ACTIVATION_THRESHOLD, move |timeline: &mut Timeline| {
                for id in ids {
                    timeline.activate(id);
                }
            });
    }

    /// Arm the About counters with the fetched (or fallback) figures
    ///
    /// Only the first report counts; the counters start once About is in view.
    pub fn apply_stats(&mut self, report: StatsReport) {
        if self.stats_origin.is_some() {
            debug!("Ignoring repeated statistics report");
            return;
        }

        let stats = &report.stats;
        let values = [
            stats.total_projects,
            stats.discord_bots,
            stats.web_apps,
            stats.languages,
            stats.open_source_percent,
        ];
        let duration = self.config.stats.counter_duration();
        let mut ids = Vec::with_capacity(values.len());
        for (counter, target) in self.texts.about.iter().zip(values) {
            ids.push(self.timeline.register(
                CounterAnimation::new(target, duration, counter.suffix)
                    .with_sink(counter.text.clone()),
            ));
        }
        self.watch(Section::About, ids);

        match report.origin {
            StatsOrigin::Remote => info!(?stats, "Applied repository statistics"),
            StatsOrigin::Fallback => {
                self.set_status("Repository statistics unavailable, showing defaults")
            }
        }
        self.stats_origin = Some(report.origin);
    }

    /// Set the page viewport height in rows
    pub fn resize(&mut self, height: u16) {
        self.layout.set_viewport(self.scroll.position(), height);
        let max = self.layout.max_scroll();
        let position = self.scroll.update(max);
        self.layout.set_viewport(position, height);
    }

    /// Advance everything to `now` (time since startup)
    pub fn tick(&mut self, now: Duration) {
        let position = self.scroll.update(self.layout.max_scroll());
        self.layout
            .set_viewport(position, self.layout.viewport_height());
        self.nav.on_scroll(position);

        // Catch up first so effects started this frame are timed from `now`
        self.timeline.advance_to(now);
        if self.activation.poll(&self.layout, &mut self.timeline) > 0 {
            self.timeline.advance_to(now);
        }

        let dt = self.last_tick.map(|last| now.saturating_sub(last));
        self.last_tick = Some(now);
        if let Some(dt) = dt {
            self.globe.tick(dt);
        }
    }

    /// Whether the next frame should come at animation rate
    pub fn is_animating(&self) -> bool {
        self.scroll.is_animating()
            || self.timeline.pending() > 0
            || self.layout.visible_fraction(&Section::Globe.region()) > 0.0
    }

    /// Watchers that have not fired yet
    pub fn pending_activations(&self) -> usize {
        self.activation.pending()
    }

    /// Cards shown under the current filter
    pub fn visible_projects(&self) -> Vec<&'static Project> {
        self.catalog.visible(&self.filter)
    }

    pub fn selected(&self) -> Option<&'static Project> {
        self.visible_projects().get(self.selected_project).copied()
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn handle_action(&mut self, action: Action) {
        let max = self.layout.max_scroll();
        let half_page = (self.layout.viewport_height() / 2).max(1) as i32;

        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollDown => self.scroll.scroll_by(1, max),
            Action::ScrollUp => self.scroll.scroll_by(-1, max),
            Action::HalfPageDown => self.scroll.scroll_by(half_page, max),
            Action::HalfPageUp => self.scroll.scroll_by(-half_page, max),
            Action::JumpToTop => self.scroll.scroll_to(0, max),
            Action::JumpToBottom => self.scroll.scroll_to(max, max),
            Action::JumpTo(section) => self.jump_to(section),
            Action::CycleFilter => {
                self.filter = self.filter.next(&self.catalog);
                self.selected_project = 0;
                self.set_status(format!("Filter: {}", self.filter.label()));
            }
            Action::NextProject => {
                let count = self.visible_projects().len();
                if count > 0 {
                    self.selected_project = (self.selected_project + 1) % count;
                }
            }
            Action::PrevProject => {
                let count = self.visible_projects().len();
                if count > 0 {
                    self.selected_project = (self.selected_project + count - 1) % count;
                }
            }
            Action::OpenModal => {
                if let Some(project) = self.selected() {
                    self.modal.open(&self.catalog, project.id);
                }
            }
            Action::CloseModal => {
                if !self.modal.on_escape() && self.nav.is_menu_open() {
                    self.nav.toggle_menu();
                }
            }
            Action::OpenLink => self.open_link(),
            Action::DragLeft => self.drag_globe(-DRAG_STEP, 0.0),
            Action::DragRight => self.drag_globe(DRAG_STEP, 0.0),
            Action::DragUp => self.drag_globe(0.0, -DRAG_STEP),
            Action::DragDown => self.drag_globe(0.0, DRAG_STEP),
            Action::ToggleMenu => self.nav.toggle_menu(),
            Action::None => {}
        }
    }

    fn jump_to(&mut self, section: Section) {
        let max = self.layout.max_scroll();
        if let Some(target) = self.nav.follow_link(section.id()) {
            debug!(section = section.id(), target, "Jumping to section");
            self.scroll.scroll_to(target, max);
        }
    }

    fn drag_globe(&mut self, d_yaw: f64, d_pitch: f64) {
        self.globe.drag(d_yaw, d_pitch);
        self.globe.release();
    }

    /// Open the GitHub link of the project in the modal, or the selected card
    fn open_link(&mut self) {
        let Some(project) = self.modal.project().or_else(|| self.selected()) else {
            return;
        };
        match open::that(project.github) {
            Ok(()) => self.set_status(format!("Opened {}", project.github)),
            Err(e) => {
                warn!(url = project.github, error = %e, "Failed to open link");
                self.set_status(format!("Failed to open link: {}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::stats::PortfolioStats;
    use folio_core::ReachFigure;

    fn app() -> App {
        let mut config = AppConfig::default();
        config.ui.scroll.smooth_enabled = false;
        let mut app = App::new(Arc::new(config));
        app.resize(20);
        app
    }

    fn secs(v: u64) -> Duration {
        Duration::from_secs(v)
    }

    fn report(total: u64) -> StatsReport {
        StatsReport {
            stats: PortfolioStats {
                total_projects: total,
                ..PortfolioStats::fallback()
            },
            origin: StatsOrigin::Remote,
        }
    }

    #[test]
    fn test_role_title_starts_after_load() {
        let mut app = app();
        app.tick(Duration::ZERO);
        assert_eq!(app.texts.role.get(), "");

        app.tick(secs(1));
        assert_eq!(app.texts.role.get(), "F");
    }

    #[test]
    fn test_terminal_prompt_starts_with_home_visible() {
        let mut app = app();
        app.tick(Duration::ZERO);
        app.tick(secs(10));
        assert_eq!(app.texts.terminal.get(), app.config.profile.terminal_prompt);
        // Collaborate was never on screen
        assert_eq!(app.texts.collaboration.get(), "");
    }

    #[test]
    fn test_jump_starts_section_effects() {
        let mut app = app();
        app.tick(Duration::ZERO);
        app.handle_action(Action::JumpTo(Section::Collaborate));
        app.tick(Duration::from_millis(100));
        assert!(app.nav.is_active("collaborate"));

        app.tick(secs(1));
        assert!(!app.texts.snippet.get().is_empty());
        assert!(!app.texts.collaboration.get().is_empty());

        app.tick(secs(30));
        assert_eq!(app.texts.collaboration.get(), app.config.profile.collaboration_text);
    }

    #[test]
    fn test_section_effects_timed_from_activation_frame() {
        let mut app = app();
        app.tick(Duration::ZERO);
        app.handle_action(Action::JumpTo(Section::Collaborate));

        // Collaborate comes into view on a late frame
        app.tick(secs(10));
        assert_eq!(app.texts.collaboration.get().chars().count(), 1);

        let delay = Duration::from_millis(app.config.typing.single_shot_delay_ms);
        app.tick(secs(10) + delay);
        assert_eq!(app.texts.collaboration.get().chars().count(), 2);
    }

    #[test]
    fn test_reach_counters_read_display_text() {
        let mut config = AppConfig::default();
        config.ui.scroll.smooth_enabled = false;
        config.globe.figures = vec![
            ReachFigure::new("Cities", "40+"),
            ReachFigure::new("Offices", "n/a"),
            ReachFigure::new("Uptime", "99%"),
        ];
        let mut app = App::new(Arc::new(config));
        app.resize(20);

        let labels: Vec<_> = app.texts.reach.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Cities", "Uptime"]);

        app.tick(Duration::ZERO);
        app.handle_action(Action::JumpTo(Section::Globe));
        app.tick(secs(1));
        app.tick(secs(5));
        assert_eq!(app.texts.reach[0].text.get(), "40+");
        assert_eq!(app.texts.reach[1].text.get(), "99%");
    }

    #[test]
    fn test_about_counters_wait_for_report() {
        let mut app = app();
        app.handle_action(Action::JumpTo(Section::About));
        app.tick(Duration::ZERO);
        app.tick(secs(5));
        assert!(app.texts.about.iter().all(|c| c.text.get().is_empty()));

        app.apply_stats(report(42));
        app.tick(secs(6));
        app.tick(secs(10));
        assert_eq!(app.texts.about[0].text.get(), "42+");
        assert_eq!(app.texts.about[4].text.get(), "100%");
        assert_eq!(app.stats_origin, Some(StatsOrigin::Remote));
    }

    #[test]
    fn test_about_counters_wait_for_visibility() {
        let mut app = app();
        // About is 2 of 12 rows visible at the top of the page
        app.resize(16);
        app.apply_stats(report(42));
        app.tick(Duration::ZERO);
        app.tick(secs(10));
        assert!(app.texts.about[0].text.get().is_empty());

        app.handle_action(Action::JumpTo(Section::About));
        app.tick(secs(11));
        app.tick(secs(20));
        assert_eq!(app.texts.about[0].text.get(), "42+");
    }

    #[test]
    fn test_second_report_ignored() {
        let mut app = app();
        app.apply_stats(report(42));
        let pending = app.pending_activations();
        app.apply_stats(report(7));
        assert_eq!(app.pending_activations(), pending);
    }

    #[test]
    fn test_fallback_sets_status() {
        let mut app = app();
        app.apply_stats(StatsReport {
            stats: PortfolioStats::fallback(),
            origin: StatsOrigin::Fallback,
        });
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_scroll_clamped_to_page() {
        let mut app = app();
        app.handle_action(Action::ScrollUp);
        assert_eq!(app.scroll.position(), 0);

        app.handle_action(Action::JumpToBottom);
        app.tick(Duration::ZERO);
        assert_eq!(app.scroll.position(), app.layout.max_scroll());
        app.handle_action(Action::HalfPageDown);
        assert_eq!(app.scroll.position(), app.layout.max_scroll());
    }

    #[test]
    fn test_filter_resets_selection() {
        let mut app = app();
        app.handle_action(Action::NextProject);
        assert_eq!(app.selected_project, 1);

        app.handle_action(Action::CycleFilter);
        assert_eq!(app.selected_project, 0);
        assert!(app.visible_projects().iter().all(|p| p.category == "discord"));
    }

    #[test]
    fn test_project_selection_wraps() {
        let mut app = app();
        app.handle_action(Action::PrevProject);
        assert_eq!(app.selected_project, 2);
        app.handle_action(Action::NextProject);
        assert_eq!(app.selected_project, 0);
    }

    #[test]
    fn test_modal_open_and_close() {
        let mut app = app();
        app.handle_action(Action::NextProject);
        app.handle_action(Action::OpenModal);
        assert_eq!(app.modal.project().map(|p| p.id), Some(2));

        app.handle_action(Action::CloseModal);
        assert!(!app.modal.is_open());
    }

    #[test]
    fn test_escape_closes_menu() {
        let mut app = app();
        app.handle_action(Action::ToggleMenu);
        assert!(app.nav.is_menu_open());
        app.handle_action(Action::CloseModal);
        assert!(!app.nav.is_menu_open());
    }

    #[test]
    fn test_drag_pauses_globe() {
        let mut app = app();
        app.handle_action(Action::DragRight);
        assert!(!app.globe.auto_rotating());
        assert!(app.globe.yaw() > 0.0);
    }
}
