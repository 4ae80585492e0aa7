use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::{info, warn};

use folio_core::{
    effects::{Clock, SystemClock},
    stats::{fetch_or_fallback, GithubClient, StatsOrigin, StatsReport},
    AppConfig,
};
use folio_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{NavbarWidget, PageWidget, PopupWidget, StatusBarWidget},
};

/// Rows taken by the navbar and the status bar
const CHROME_ROWS: u16 = 2;

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    // Repository stats load in the background; the page never waits on them
    let (stats_tx, mut stats_rx) = mpsc::unbounded_channel::<StatsReport>();
    spawn_stats_fetch(config.clone(), stats_tx);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let title = format!("{} | portfolio", config.profile.name);
    execute!(stdout, EnterAlternateScreen, SetTitle(title))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.clone());
    app.resize(terminal.size()?.height.saturating_sub(CHROME_ROWS));

    let event_handler = EventHandler::new(config.ui.tick_rate_ms, config.ui.scroll.animation_fps);
    let clock = SystemClock::new();
    info!("Page started");

    // Main loop
    let result = loop {
        // Apply the stats report once it lands (non-blocking)
        while let Ok(report) = stats_rx.try_recv() {
            app.apply_stats(report);
        }

        app.tick(clock.now());

        if let Err(e) = terminal.draw(|frame| draw(frame, &app)) {
            break Err(e.into());
        }

        match event_handler.next(app.is_animating()) {
            Ok(Some(AppEvent::Key(key))) => {
                app.clear_status();
                let action = handle_key_event(key, &app);
                app.handle_action(action);
            }
            Ok(Some(AppEvent::Resize(_, height))) => {
                app.resize(height.saturating_sub(CHROME_ROWS));
            }
            Ok(Some(AppEvent::Tick)) | Ok(None) => {}
            Err(e) => break Err(e),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Navbar
            Constraint::Min(1),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    NavbarWidget::render(frame, chunks[0], app);
    PageWidget::render(frame, chunks[1], app);
    StatusBarWidget::render(frame, chunks[2], app);

    // Overlays
    if let Some(project) = app.modal.project() {
        PopupWidget::render_project(frame, project, &app.theme);
    } else if app.nav.is_menu_open() {
        PopupWidget::render_menu(frame, app);
    }
}

fn spawn_stats_fetch(config: Arc<AppConfig>, tx: mpsc::UnboundedSender<StatsReport>) {
    tokio::spawn(async move {
        let report = match GithubClient::new(&config.stats) {
            Ok(client) => fetch_or_fallback(&client, &config.stats).await,
            Err(e) => {
                warn!(error = %e, "Could not build repository client, using fallback");
                StatsReport {
                    stats: config.stats.fallback.clone(),
                    origin: StatsOrigin::Fallback,
                }
            }
        };
        // The page may already be gone
        let _ = tx.send(report);
    });
}
