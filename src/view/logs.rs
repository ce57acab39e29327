use std::io::{self, Write, stdout};
use crossterm::{cursor, queue, style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor}};

use crate::model::ExecutionLogEntry;
use super::shared::{format_local_datetime, truncate_str, write_outcome_dot, writeln};

/// How many log entries the Logs tab shows. The backend delivers
/// newest-first; anything older falls off the bottom.
const LOG_DISPLAY_LIMIT: usize = 20;

pub fn render_logs(
    logs: &[ExecutionLogEntry],
    status_message: &Option<String>,
) -> io::Result<()> {
    let mut out = stdout();
    queue!(out, cursor::MoveTo(0, 2))?;

    let size = crossterm::terminal::size()?;
    let shown = logs.len().min(LOG_DISPLAY_LIMIT);

    writeln(&mut out, "")?;
    queue!(io::stdout(), SetAttribute(Attribute::Bold))?;
    write!(out, "  Command Logs ({} of {})\r\n", shown, logs.len())?;
    queue!(io::stdout(), SetAttribute(Attribute::Reset))?;
    writeln(&mut out, "")?;

    if logs.is_empty() {
        writeln(&mut out, "  No commands have been executed yet.")?;
    } else {
        // Column header
        queue!(io::stdout(), SetAttribute(Attribute::Bold))?;
        write!(out, "     {:<16} {:<20} {:<20} {}", "COMMAND", "USER", "SERVER", "TIME")?;
        queue!(io::stdout(), SetAttribute(Attribute::Reset))?;
        write!(out, "\r\n")?;

        for entry in logs.iter().take(LOG_DISPLAY_LIMIT) {
            write!(out, "  ")?;
            write_outcome_dot(&mut out, entry.success)?;
            write!(
                out,
                "  {:<16} {:<20} {:<20} ",
                truncate_str(&entry.command_name, 16),
                truncate_str(&entry.user_id, 18),
                truncate_str(&entry.server_id, 18),
            )?;
            queue!(io::stdout(), SetForegroundColor(Color::DarkGrey))?;
            write!(out, "{}", format_local_datetime(&entry.timestamp))?;
            queue!(io::stdout(), ResetColor)?;
            write!(out, "\r\n")?;
        }
    }

    if let Some(msg) = status_message {
        writeln(&mut out, "")?;
        queue!(io::stdout(), SetForegroundColor(Color::Yellow))?;
        writeln(&mut out, &format!("  {}", msg))?;
        queue!(io::stdout(), ResetColor)?;
    }

    // Footer
    let help = "q/Esc: Quit | Tab: Switch | r: Refresh";
    let help_y = size.1.saturating_sub(1);
    queue!(
        out,
        cursor::MoveTo(1, help_y),
        SetForegroundColor(Color::DarkGrey),
        crossterm::style::Print(format!("{:<width$}", help, width = size.0 as usize)),
        ResetColor
    )?;

    out.flush()?;
    Ok(())
}
