mod state;
mod event_loop;
mod render;
mod input;

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::api::HttpApi;
use crate::config::Config;
use crate::controller::BotController;
use crate::model::AppView;
use crate::view::Presenter;

pub use state::{PendingAction, PendingActionKind};

/// Restore the terminal to normal mode. Safe to call multiple times.
pub fn restore_terminal() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Main application state and event loop.
pub struct App {
    pub controller: BotController,
    pub app_view: AppView,
    pub pending_action: Option<PendingAction>,
    pub last_tick: Instant,
    pub last_tab_refresh: Instant,
    pub prev_app_view: AppView,
    pub tick_rate: Duration,
    pub min_refresh_interval: Duration,
}

impl App {
    pub fn new(controller: BotController) -> Self {
        Self {
            controller,
            app_view: AppView::Dashboard,
            pending_action: None,
            last_tick: Instant::now(),
            last_tab_refresh: Instant::now(),
            prev_app_view: AppView::Dashboard,
            tick_rate: Duration::from_secs(3),
            min_refresh_interval: Duration::from_millis(500),
        }
    }
}

/// Run the application. Sets up terminal, runs the main loop, restores
/// terminal on exit.
pub fn run(config: Config, should_quit: Arc<AtomicBool>) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Clear(ClearType::All))?;

    let rt = Arc::new(
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .worker_threads(2)
            .build()
            .expect("Failed to create tokio runtime"),
    );

    let api = Arc::new(HttpApi::new(config.base_url.clone()));
    let mut app = App::new(BotController::new(api, Arc::clone(&rt)));

    // The four snapshots are independent; fetch them all up front.
    app.controller.refresh_all();

    let mut needs_render = true;

    loop {
        if should_quit.load(Ordering::Relaxed) {
            break;
        }

        let now = Instant::now();

        if app.expire_pending_action() {
            needs_render = true;
        }
        if app.process_tick() {
            needs_render = true;
        }
        if app.poll_actions() {
            needs_render = true;
        }
        if app.settle_actions() {
            needs_render = true;
        }
        if app.refresh_on_tab_switch() {
            needs_render = true;
        }

        if needs_render {
            if Presenter::render_size_guard()? {
                needs_render = false;
                let timeout = app.tick_rate.saturating_sub(now.elapsed());
                if crossterm::event::poll(timeout.min(Duration::from_millis(100)))? {
                    let _ = crossterm::event::read()?;
                }
                continue;
            }

            render::render(&mut app)?;

            if let Some(ref pa) = app.pending_action {
                Presenter::render_confirmation(&pa.description)?;
            }

            needs_render = false;
        }

        let timeout = app.tick_rate.saturating_sub(now.elapsed());
        if crossterm::event::poll(timeout.min(Duration::from_millis(100)))? {
            if let crossterm::event::Event::Key(key_event) = crossterm::event::read()? {
                match input::handle_key(&mut app, key_event) {
                    Some(input::InputResult::Quit) => break,
                    Some(input::InputResult::Consumed) => needs_render = true,
                    None => {}
                }
            }
        }
    }

    restore_terminal();
    Ok(())
}
