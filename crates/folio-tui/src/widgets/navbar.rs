use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::page::Section;

pub struct NavbarWidget;

impl NavbarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        // Scrolled style lifts the bar off the page background
        let bg = if app.nav.is_scrolled() {
            theme.bg1
        } else {
            theme.bg0
        };

        let mut spans = vec![Span::styled(
            format!(" {} ", app.config.profile.name),
            Style::default()
                .fg(theme.accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )];

        for (i, section) in Section::ALL.iter().enumerate() {
            let style = if app.nav.is_active(section.id()) {
                Style::default()
                    .fg(theme.bg0)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg1).bg(bg)
            };
            spans.push(Span::styled(" ", Style::default().bg(bg)));
            spans.push(Span::styled(format!(" {} {} ", i + 1, section.title()), style));
        }

        let menu = if app.nav.is_menu_open() { " ✕ " } else { " ≡ " };
        spans.push(Span::styled(" ", Style::default().bg(bg)));
        spans.push(Span::styled(menu, Style::default().fg(theme.muted).bg(bg)));

        let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
        frame.render_widget(paragraph, area);
    }
}
