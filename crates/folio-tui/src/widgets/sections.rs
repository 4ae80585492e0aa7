//! The scrolled page: every section rendered to its fixed row height

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use folio_core::globe::Globe;
use folio_core::stats::StatsOrigin;

use super::text::{truncate_str, wrap};
use crate::app::{App, StatCounter};
use crate::page::Section;
use crate::theme::Theme;

const CURSOR: &str = "▌";
const INDENT: &str = "  ";

pub struct PageWidget;

impl PageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let width = area.width as usize;
        let mut lines: Vec<Line<'static>> =
            Vec::with_capacity(app.layout.total_height() as usize);

        for (index, section) in Section::ALL.into_iter().enumerate() {
            let mut body = vec![heading(&app.theme, index + 1, section)];
            body.extend(match section {
                Section::Home => home(app, width),
                Section::About => about(app),
                Section::Projects => projects(app, width),
                Section::Collaborate => collaborate(app, width),
                Section::Globe => globe(app, width, section.height()),
            });
            lines.extend(fit(body, section.height()));
        }

        let paragraph = Paragraph::new(lines)
            .style(Style::default().fg(app.theme.fg1).bg(app.theme.bg0))
            .scroll((app.scroll.position(), 0));
        frame.render_widget(paragraph, area);
    }
}

/// Pad or cut `lines` to exactly `height` rows
fn fit(mut lines: Vec<Line<'static>>, height: u16) -> Vec<Line<'static>> {
    lines.resize(height as usize, Line::default());
    lines
}

fn heading(theme: &Theme, number: usize, section: Section) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}{:02}. ", INDENT, number),
            Style::default().fg(theme.accent),
        ),
        Span::styled(
            section.title().to_string(),
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn typed(theme: &Theme, prefix: &str, text: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}{}", INDENT, prefix), Style::default().fg(theme.muted)),
        Span::styled(text, Style::default().fg(theme.fg0)),
        Span::styled(CURSOR, Style::default().fg(theme.accent)),
    ])
}

/// Box-drawing frame with a title, `rows` of content and a closing edge
fn boxed(theme: &Theme, title: &str, width: usize, rows: Vec<Line<'static>>) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(INDENT.len() + 4).min(64);
    let border = Style::default().fg(theme.bg2);
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{}┌─ ", INDENT), border),
        Span::styled(title.to_string(), Style::default().fg(theme.muted)),
        Span::styled(
            format!(" {}", "─".repeat(inner.saturating_sub(title.len() + 2))),
            border,
        ),
    ])];
    for row in rows {
        let mut spans = vec![Span::styled(format!("{}│ ", INDENT), border)];
        spans.extend(row.spans);
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(
        format!("{}└{}", INDENT, "─".repeat(inner + 1)),
        border,
    )));
    lines
}

fn home(app: &App, width: usize) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let terminal = Line::from(vec![
        Span::styled(app.texts.terminal.get(), Style::default().fg(theme.green)),
        Span::styled(CURSOR, Style::default().fg(theme.accent)),
    ]);

    let mut lines = vec![
        Line::default(),
        Line::from(vec![
            Span::raw(INDENT),
            Span::styled("Hi, I'm ", Style::default().fg(theme.fg1)),
            Span::styled(
                app.config.profile.name.clone(),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
        ]),
        typed(theme, "> ", app.texts.role.get()),
        Line::default(),
    ];
    lines.extend(boxed(theme, "terminal", width, vec![terminal]));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("{}1-5 jump to a section · m menu · q quit", INDENT),
        Style::default().fg(theme.muted),
    )));
    lines
}

fn counter_line(theme: &Theme, counter: &StatCounter) -> Line<'static> {
    let value = counter.text.get();
    let value = if value.is_empty() { "--".to_string() } else { value };
    Line::from(vec![
        Span::raw(INDENT),
        Span::styled(
            format!("{:>6}", value),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", counter.label), Style::default().fg(theme.fg1)),
    ])
}

fn about(app: &App) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let origin = match app.stats_origin {
        Some(StatsOrigin::Remote) => "live from GitHub",
        Some(StatsOrigin::Fallback) => "offline figures",
        None => "loading…",
    };

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("{}Discord bots, web apps and the tooling in between.", INDENT),
            Style::default().fg(theme.fg1),
        )),
        Line::from(Span::styled(
            format!("{}Repository stats ({})", INDENT, origin),
            Style::default().fg(theme.muted),
        )),
        Line::default(),
    ];
    lines.extend(app.texts.about.iter().map(|c| counter_line(theme, c)));
    lines
}

fn projects(app: &App, width: usize) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let text_width = width.saturating_sub(6);

    let mut filters = vec![Span::styled(
        format!("{}filter: ", INDENT),
        Style::default().fg(theme.muted),
    )];
    let labels = std::iter::once("all").chain(app.catalog.categories());
    for label in labels {
        let style = if app.filter.label() == label {
            Style::default()
                .fg(theme.bg0)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg1)
        };
        filters.push(Span::styled(format!(" {} ", label), style));
        filters.push(Span::raw(" "));
    }

    let mut lines = vec![Line::from(filters), Line::default()];
    let visible = app.visible_projects();
    if visible.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("{}No projects in this category", INDENT),
            Style::default().fg(theme.muted),
        )));
    }

    for (i, project) in visible.into_iter().enumerate() {
        let selected = i == app.selected_project;
        let marker = if selected { "▸ " } else { "  " };
        let title_style = if selected {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg0)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{}{}", INDENT, marker), Style::default().fg(theme.accent)),
            Span::styled(project.title.to_string(), title_style),
            Span::styled(format!("  #{}", project.category), Style::default().fg(theme.muted)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("{}  {}", INDENT, truncate_str(project.description, text_width)),
            Style::default().fg(theme.fg1),
        )));
        lines.push(Line::from(Span::styled(
            format!("{}  {}", INDENT, truncate_str(&project.tech.join(" · "), text_width)),
            Style::default().fg(theme.secondary),
        )));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        format!("{}f filter · Tab select · Enter details · o GitHub", INDENT),
        Style::default().fg(theme.muted),
    )));
    lines
}

fn collaborate(app: &App, width: usize) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let mut lines = vec![Line::default()];

    let blurb = wrap(&app.texts.collaboration.get(), width.saturating_sub(6));
    let last = blurb.len().saturating_sub(1);
    for (i, row) in blurb.into_iter().take(5).enumerate() {
        let mut spans = vec![
            Span::raw(INDENT),
            Span::styled(row, Style::default().fg(theme.fg0)),
        ];
        if i == last {
            spans.push(Span::styled(CURSOR, Style::default().fg(theme.accent)));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::default());

    let snippet = Line::from(vec![
        Span::styled(app.texts.snippet.get(), Style::default().fg(theme.green)),
        Span::styled(CURSOR, Style::default().fg(theme.accent)),
    ]);
    lines.extend(boxed(theme, "snippet", width, vec![snippet]));
    lines
}

/// Character and depth bucket for one rasterized cell
fn glyph(depth: f64) -> char {
    if depth > 0.75 {
        '●'
    } else if depth > 0.45 {
        '•'
    } else {
        '·'
    }
}

/// Rasterize the projected sphere; nearer points win a shared cell
pub(crate) fn rasterize(globe: &Globe, cols: usize, rows: usize) -> Vec<Vec<Option<f64>>> {
    let mut grid = vec![vec![None; cols]; rows];
    if cols == 0 || rows == 0 {
        return grid;
    }

    for point in globe.project() {
        let col = ((point.x + 1.0) / 2.0 * (cols - 1) as f64).round() as usize;
        let row = ((1.0 - point.y) / 2.0 * (rows - 1) as f64).round() as usize;
        let cell = &mut grid[row.min(rows - 1)][col.min(cols - 1)];
        if !matches!(*cell, Some(d) if d >= point.depth) {
            *cell = Some(point.depth);
        }
    }
    grid
}

fn globe(app: &App, width: usize, height: u16) -> Vec<Line<'static>> {
    let theme = &app.theme;
    // heading, blank, blank, counters
    let rows = (height as usize).saturating_sub(4);
    // cells are about twice as tall as wide
    let cols = (rows * 2).min(width.saturating_sub(4));
    let left = " ".repeat(width.saturating_sub(cols) / 2);

    let mut lines = vec![Line::default()];
    for row in rasterize(&app.globe, cols, rows) {
        let mut spans = vec![Span::raw(left.clone())];
        spans.extend(row.into_iter().map(|cell| match cell {
            Some(depth) => Span::styled(
                glyph(depth).to_string(),
                Style::default().fg(theme.globe_shade(depth)),
            ),
            None => Span::raw(" "),
        }));
        lines.push(Line::from(spans));
    }
    lines.push(Line::default());

    let mut counters = vec![Span::raw(INDENT)];
    for counter in &app.texts.reach {
        let value = counter.text.get();
        let value = if value.is_empty() { "--".to_string() } else { value };
        counters.push(Span::styled(
            value,
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ));
        counters.push(Span::styled(
            format!(" {}    ", counter.label),
            Style::default().fg(theme.fg1),
        ));
    }
    lines.push(Line::from(counters));
    lines
}
