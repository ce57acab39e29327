use std::io::{self, Write};
use crossterm::{
    cursor, queue,
    style::{Color, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::model::{AppView, BotState};

use super::shared::{status_badge_color, status_badge_text};

pub fn render_tab_bar(
    out: &mut impl Write,
    current_view: AppView,
    command_count: usize,
    server_count: usize,
    log_count: usize,
    state: BotState,
    time: &str,
) -> io::Result<()> {
    write!(out, "  ")?;

    let tabs = [
        (AppView::Dashboard, None),
        (AppView::Commands, Some(command_count)),
        (AppView::Servers, Some(server_count)),
        (AppView::Logs, Some(log_count)),
    ];

    for (view, count) in tabs {
        let label = match count {
            Some(n) => format!("{} ({})", view.title(), n),
            None => view.title().to_string(),
        };
        if view == current_view {
            queue!(io::stdout(), SetBackgroundColor(Color::DarkBlue), SetForegroundColor(Color::White))?;
        } else {
            queue!(io::stdout(), SetForegroundColor(Color::DarkGrey))?;
        }
        write!(out, " {} ", label)?;
        queue!(io::stdout(), ResetColor)?;
        write!(out, "  ")?;
    }

    // Right-align the status badge and clock.
    let size = terminal::size()?;
    let badge = status_badge_text(state);
    let clock = format!("  botdeck - {} ", time);
    let right_len = badge.chars().count() + clock.chars().count();
    let col = (size.0 as usize).saturating_sub(right_len);
    queue!(io::stdout(), cursor::MoveTo(col as u16, 0))?;
    queue!(io::stdout(), SetForegroundColor(status_badge_color(state)))?;
    write!(out, "{}", badge)?;
    queue!(io::stdout(), SetForegroundColor(Color::DarkGrey))?;
    write!(out, "{}", clock)?;
    queue!(io::stdout(), ResetColor)?;

    write!(out, "\r\n")?;
    // Separator
    let sep: String = "─".repeat(size.0 as usize);
    queue!(io::stdout(), SetForegroundColor(Color::DarkGrey))?;
    write!(out, "{}\r\n", sep)?;
    queue!(io::stdout(), ResetColor)?;

    Ok(())
}
