use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use folio_core::catalog::Project;

use super::text::wrap;
use crate::app::App;
use crate::page::Section;
use crate::theme::Theme;

pub struct PopupWidget;

impl PopupWidget {
    /// Project detail modal
    pub fn render_project(frame: &mut Frame, project: &Project, theme: &Theme) {
        let area = frame.area();
        let popup_width = 72u16.min(area.width.saturating_sub(4));
        let popup_height = 18u16.min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(format!(" {} ", project.title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Details
                Constraint::Length(1), // Hint
            ])
            .split(inner_area);

        let label = Style::default().fg(theme.muted);
        let value = Style::default().fg(theme.fg0);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Category  ", label),
                Span::styled(project.category, Style::default().fg(theme.secondary)),
            ]),
            Line::default(),
        ];
        lines.extend(
            wrap(project.description, chunks[0].width.saturating_sub(1) as usize)
                .into_iter()
                .map(|row| Line::from(Span::styled(row, value))),
        );
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Tech      ", label),
            Span::styled(project.tech.join(", "), value),
        ]));
        lines.push(Line::from(vec![
            Span::styled("GitHub    ", label),
            Span::styled(project.github, Style::default().fg(theme.accent)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Live      ", label),
            Span::styled(project.live.unwrap_or("not deployed"), value),
        ]));
        frame.render_widget(Paragraph::new(lines), chunks[0]);

        let hint = Paragraph::new(Line::from(vec![
            Span::styled("[", label),
            Span::styled(
                "o",
                Style::default().fg(theme.green).add_modifier(Modifier::BOLD),
            ),
            Span::styled("]pen GitHub  [", label),
            Span::styled(
                "Esc",
                Style::default().fg(theme.red).add_modifier(Modifier::BOLD),
            ),
            Span::styled("] close", label),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[1]);
    }

    /// Section menu opened with `m`
    pub fn render_menu(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let area = frame.area();
        let popup_width = 28u16.min(area.width.saturating_sub(4));
        let popup_height = (Section::ALL.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Menu ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        let mut lines: Vec<Line> = Section::ALL
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let style = if app.nav.is_active(section.id()) {
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.fg0)
                };
                Line::from(vec![
                    Span::styled(format!(" {}  ", i + 1), Style::default().fg(theme.muted)),
                    Span::styled(section.title(), style),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " Esc close",
            Style::default().fg(theme.muted),
        )));

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
