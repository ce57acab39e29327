use std::io::{self, Write, stdout};
use crossterm::{cursor, queue, style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor}};

use crate::store::DashboardStore;
use super::shared::{
    format_local_time, format_number, truncate_str, write_outcome_dot, write_section_header,
    write_status_badge, writeln,
};

/// How many log entries the Recent Activity section shows.
const RECENT_ACTIVITY_LIMIT: usize = 5;

pub fn render_dashboard(
    store: &DashboardStore,
    busy: bool,
    status_message: &Option<String>,
) -> io::Result<()> {
    let mut out = stdout();
    queue!(out, cursor::MoveTo(0, 2))?;

    let size = crossterm::terminal::size()?;

    writeln(&mut out, "")?;
    write_section_header(&mut out, "  Bot Status")?;

    write!(out, "  ")?;
    write_status_badge(&mut out, store.status.status)?;
    write!(
        out,
        "   {} servers connected   |   Commands executed: {}",
        store.status.servers,
        format_number(store.status.commands_executed)
    )?;
    write!(out, "\r\n")?;

    // Start/stop affordances, dimmed when they would be a no-op.
    let running = store.status.status.is_running();
    write!(out, "  ")?;
    write_control_hint(&mut out, "s: Start Bot", busy || running)?;
    write!(out, "   ")?;
    write_control_hint(&mut out, "t: Stop Bot", busy || !running)?;
    if busy {
        queue!(io::stdout(), SetForegroundColor(Color::Yellow))?;
        write!(out, "   (working...)")?;
        queue!(io::stdout(), ResetColor)?;
    }
    write!(out, "\r\n")?;

    writeln(&mut out, "")?;
    write_section_header(&mut out, "  Overview")?;
    writeln(
        &mut out,
        &format!(
            "  Total commands: {}    Active servers: {}    Categories: {}",
            store.commands.len(),
            store.servers.len(),
            store.categories().len()
        ),
    )?;

    writeln(&mut out, "")?;
    write_section_header(&mut out, "  Recent Activity")?;
    if store.logs.is_empty() {
        queue!(io::stdout(), SetForegroundColor(Color::DarkGrey))?;
        writeln(&mut out, "  No recent activity.")?;
        queue!(io::stdout(), ResetColor)?;
    } else {
        for entry in store.logs.iter().take(RECENT_ACTIVITY_LIMIT) {
            write!(out, "  ")?;
            write_outcome_dot(&mut out, entry.success)?;
            write!(
                out,
                " {:<16} by user {:<20} ",
                truncate_str(&entry.command_name, 16),
                truncate_str(&entry.user_id, 20),
            )?;
            queue!(io::stdout(), SetForegroundColor(Color::DarkGrey))?;
            write!(out, "{}", format_local_time(&entry.timestamp))?;
            queue!(io::stdout(), ResetColor)?;
            write!(out, "\r\n")?;
        }
    }

    // Status message (action feedback)
    if let Some(msg) = status_message {
        writeln(&mut out, "")?;
        queue!(io::stdout(), SetForegroundColor(Color::Yellow))?;
        writeln(&mut out, &format!("  {}", msg))?;
        queue!(io::stdout(), ResetColor)?;
    }

    // Footer
    let help = "q/Esc: Quit | Tab: Switch | r: Refresh | s: Start | t: Stop (confirm with y)";
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

fn write_control_hint(out: &mut impl Write, label: &str, disabled: bool) -> io::Result<()> {
    if disabled {
        queue!(io::stdout(), SetForegroundColor(Color::DarkGrey))?;
        write!(out, "{}", label)?;
        queue!(io::stdout(), ResetColor)?;
    } else {
        queue!(io::stdout(), SetAttribute(Attribute::Bold))?;
        write!(out, "{}", label)?;
        queue!(io::stdout(), SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}
