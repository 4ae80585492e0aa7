use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use folio_core::stats::StatsOrigin;

use super::text::{pad_to, truncate_str};
use crate::app::App;
use crate::page::Section;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let status_text = match &app.status_message {
            Some(msg) => format!(" {}", msg),
            None => {
                let section = app
                    .nav
                    .active()
                    .and_then(Section::from_id)
                    .map(|s| s.title())
                    .unwrap_or("-");
                let stats = match app.stats_origin {
                    Some(StatsOrigin::Remote) => "live",
                    Some(StatsOrigin::Fallback) => "fallback",
                    None => "loading",
                };
                format!(
                    " {} | stats: {} | filter: {}",
                    section,
                    stats,
                    app.filter.label()
                )
            }
        };

        let help_hint = " q:quit j/k:scroll 1-5:jump m:menu ";
        let width = area.width as usize;
        let status_width = width.saturating_sub(help_hint.width());
        let status_text = pad_to(&truncate_str(&status_text, status_width), status_width);

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.muted).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
