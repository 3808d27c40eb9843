//! Terminal UI for playing a match.
//!
//! The loop owns the [`MatchController`] and is its only caller. Scheduled
//! tasks are slept on by spawned tokio tasks and come back over a channel,
//! so a timer never touches match state directly and a stale one is simply
//! dropped by the controller.

mod app;
mod input;
mod ui;

pub use app::{App, scoreboard_names};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_core::{Engine, MatchController, Phase, PlayerSpec, Position, ScheduledTask};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use crate::config::AppConfig;
use crate::logging::init_file_tracing;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Input poll interval; also bounds how late a fired timer is noticed.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Everything needed to start an interactive match.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    config: AppConfig,
    cross: PlayerSpec,
    nought: PlayerSpec,
    seed: Option<u64>,
    log_file: PathBuf,
}

impl PlayOptions {
    /// Creates play options.
    pub fn new(
        config: AppConfig,
        cross: PlayerSpec,
        nought: PlayerSpec,
        seed: Option<u64>,
        log_file: PathBuf,
    ) -> Self {
        Self {
            config,
            cross,
            nought,
            seed,
            log_file,
        }
    }
}

/// Runs the TUI until the user quits.
pub async fn run_tui(options: PlayOptions) -> Result<()> {
    // Log to file to avoid interfering with the TUI
    init_file_tracing(&options.log_file).with_context(|| {
        format!("Failed to open log file {}", options.log_file.display())
    })?;

    info!(
        cross = %options.cross,
        nought = %options.nought,
        seed = ?options.seed,
        "Starting Noughts TUI"
    );

    let engine = match options.seed {
        Some(seed) => Engine::seeded(seed),
        None => Engine::from_entropy(),
    }
    .with_tuning(*options.config.engine());
    let controller = MatchController::start(
        *options.config.match_config(),
        options.cross,
        options.nought,
        engine,
    );
    let app = App::new(options.cross, options.nought);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_match(&mut terminal, controller, app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Match loop error");
    }
    info!("TUI exited");
    res
}

#[instrument(skip_all)]
async fn run_match(terminal: &mut Tui, mut controller: MatchController, mut app: App) -> Result<()> {
    let (task_tx, mut task_rx) = mpsc::unbounded_channel::<ScheduledTask>();

    loop {
        for event in controller.drain_events() {
            app.handle_event(event);
        }
        for task in controller.take_scheduled() {
            spawn_timer(&task_tx, task);
        }

        terminal.draw(|frame| ui::draw(frame, &app))?;

        while let Ok(task) = task_rx.try_recv() {
            controller.fire(task);
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }

        debug!(code = ?key.code, "Key pressed");
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                controller.pause_bots();
                info!("User quit");
                return Ok(());
            }
            KeyCode::Char('r') if controller.phase() == Phase::MatchOver => {
                controller.play_again();
            }
            code @ KeyCode::Char('1'..='9') => {
                if let Some(index) = input::digit_cell(code) {
                    if let Some(pos) = Position::from_index(index) {
                        app.set_cursor(pos);
                    }
                    controller.cell_activated(index);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                controller.cell_activated(app.cursor().to_index());
            }
            code @ (KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down) => {
                app.move_cursor(code);
            }
            _ => {}
        }
    }
}

/// Sleeps for the task's delay, then hands it back to the loop.
fn spawn_timer(tx: &mpsc::UnboundedSender<ScheduledTask>, task: ScheduledTask) {
    let tx = tx.clone();
    debug!(kind = ?task.kind(), delay = ?task.delay(), "Timer scheduled");
    tokio::spawn(async move {
        tokio::time::sleep(*task.delay()).await;
        // The receiver is gone once the user has quit.
        let _ = tx.send(task);
    });
}
