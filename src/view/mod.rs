mod shared;
mod tab_bar;
mod dashboard;
mod commands;
mod servers;
mod logs;
mod confirmation;

use std::io::{self, Write};
use crossterm::{execute, cursor, queue, style::{Color, SetForegroundColor, ResetColor}, terminal};

use crate::model::{AppView, BotState, CommandDescriptor, ExecutionLogEntry, ServerSummary};
use crate::store::{CategoryFilter, DashboardStore};

pub use shared::{category_color, format_number, safe_truncate, truncate_str};

pub struct Presenter;

/// Minimum terminal dimensions for usable rendering.
pub const MIN_COLS: u16 = 80;
pub const MIN_ROWS: u16 = 10;

impl Presenter {
    /// Check if the terminal is large enough. If not, render a "too small"
    /// message and return `true` (meaning "skip normal rendering").
    pub fn render_size_guard() -> io::Result<bool> {
        let (cols, rows) = terminal::size()?;
        if cols < MIN_COLS || rows < MIN_ROWS {
            let mut out = std::io::stdout();
            execute!(out, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;
            let msg = format!(
                "Terminal too small ({}x{}). Resize to at least {}x{}.",
                cols, rows, MIN_COLS, MIN_ROWS
            );
            let y = rows / 2;
            let x = cols.saturating_sub(msg.len() as u16) / 2;
            queue!(out, cursor::MoveTo(x, y), SetForegroundColor(Color::Yellow))?;
            write!(out, "{}", msg)?;
            queue!(out, ResetColor)?;
            out.flush()?;
            return Ok(true);
        }
        Ok(false)
    }

    pub fn render_tab_bar(
        out: &mut impl Write,
        current_view: AppView,
        command_count: usize,
        server_count: usize,
        log_count: usize,
        state: BotState,
        time: &str,
    ) -> io::Result<()> {
        tab_bar::render_tab_bar(out, current_view, command_count, server_count, log_count, state, time)
    }

    pub fn render_dashboard(
        store: &DashboardStore,
        busy: bool,
        status_message: &Option<String>,
    ) -> io::Result<()> {
        dashboard::render_dashboard(store, busy, status_message)
    }

    pub fn render_commands(
        commands: &[&CommandDescriptor],
        filter: &CategoryFilter,
        status_message: &Option<String>,
    ) -> io::Result<()> {
        commands::render_commands(commands, filter, status_message)
    }

    pub fn render_servers(
        servers: &[ServerSummary],
        status_message: &Option<String>,
    ) -> io::Result<()> {
        servers::render_servers(servers, status_message)
    }

    pub fn render_logs(
        logs: &[ExecutionLogEntry],
        status_message: &Option<String>,
    ) -> io::Result<()> {
        logs::render_logs(logs, status_message)
    }

    pub fn render_confirmation(prompt: &str) -> io::Result<()> {
        confirmation::render_confirmation(prompt)
    }
}
