use std::io::{self, Write, stdout};
use crossterm::{cursor, queue, style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor}};

use crate::model::CommandDescriptor;
use crate::store::CategoryFilter;
use super::shared::{category_color, truncate_str, writeln};

pub fn render_commands(
    commands: &[&CommandDescriptor],
    filter: &CategoryFilter,
    status_message: &Option<String>,
) -> io::Result<()> {
    let mut out = stdout();
    queue!(out, cursor::MoveTo(0, 2))?;

    let size = crossterm::terminal::size()?;

    writeln(&mut out, "")?;
    queue!(io::stdout(), SetAttribute(Attribute::Bold))?;
    write!(out, "  Available Commands ({})", commands.len())?;
    queue!(io::stdout(), SetAttribute(Attribute::Reset))?;
    queue!(io::stdout(), SetForegroundColor(Color::DarkGrey))?;
    write!(out, "   filter: {}\r\n", filter.label())?;
    queue!(io::stdout(), ResetColor)?;
    writeln(&mut out, "")?;

    if commands.is_empty() {
        writeln(&mut out, "  No commands match this filter.")?;
    } else {
        for command in commands {
            write!(out, "  !{:<14} ", truncate_str(&command.name, 14))?;
            queue!(io::stdout(), SetForegroundColor(category_color(&command.category)))?;
            write!(out, "[{:<10}]", truncate_str(&command.category, 10))?;
            queue!(io::stdout(), ResetColor)?;
            write!(out, "  {}\r\n", truncate_str(&command.description, (size.0 as usize).saturating_sub(32)))?;
        }
    }

    if let Some(msg) = status_message {
        writeln(&mut out, "")?;
        queue!(io::stdout(), SetForegroundColor(Color::Yellow))?;
        writeln(&mut out, &format!("  {}", msg))?;
        queue!(io::stdout(), ResetColor)?;
    }

    // Footer
    let help = "q/Esc: Quit | Tab: Switch | f/→: Next category | ←: All | r: Refresh";
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
