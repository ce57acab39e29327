use std::io::{self, Write, stdout};
use crossterm::{cursor, queue, style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor}};

use crate::model::ServerSummary;
use super::shared::{format_local_date, truncate_str, writeln};

pub fn render_servers(
    servers: &[ServerSummary],
    status_message: &Option<String>,
) -> io::Result<()> {
    let mut out = stdout();
    queue!(out, cursor::MoveTo(0, 2))?;

    let size = crossterm::terminal::size()?;

    writeln(&mut out, "")?;
    queue!(io::stdout(), SetAttribute(Attribute::Bold))?;
    write!(out, "  Connected Servers ({})\r\n", servers.len())?;
    queue!(io::stdout(), SetAttribute(Attribute::Reset))?;
    writeln(&mut out, "")?;

    if servers.is_empty() {
        writeln(&mut out, "  No servers connected.")?;
        writeln(&mut out, "")?;
        queue!(io::stdout(), SetForegroundColor(Color::DarkGrey))?;
        writeln(&mut out, "  Once the bot joins servers, they will appear here.")?;
        queue!(io::stdout(), ResetColor)?;
    } else {
        // Column header
        queue!(io::stdout(), SetAttribute(Attribute::Bold))?;
        write!(out, "  {:<24} {:<22} {:<8} {}", "NAME", "SERVER ID", "PREFIX", "ADDED")?;
        queue!(io::stdout(), SetAttribute(Attribute::Reset))?;
        write!(out, "\r\n")?;

        for server in servers {
            writeln(
                &mut out,
                &format!(
                    "  {:<24} {:<22} {:<8} {}",
                    truncate_str(&server.server_name, 22),
                    truncate_str(&server.server_id, 20),
                    truncate_str(&server.prefix, 6),
                    format_local_date(&server.created_at),
                ),
            )?;
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
