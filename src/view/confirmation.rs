use std::io::{self, Write, stdout};
use crossterm::{cursor::MoveTo, queue, style::{Attribute, Color, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor}, terminal};

/// Full-width confirmation bar near the bottom of the screen. Armed
/// start/stop actions stay here until confirmed, cancelled, or expired.
pub fn render_confirmation(prompt: &str) -> io::Result<()> {
    let mut out = stdout();
    let size = terminal::size()?;
    let y = size.1.saturating_sub(3);
    let width = size.0 as usize;

    queue!(out, MoveTo(0, y))?;
    queue!(out, SetBackgroundColor(Color::DarkRed), SetForegroundColor(Color::White), SetAttribute(Attribute::Bold))?;
    let line = format!("  {}  [y: confirm / any other key: cancel]", prompt);
    write!(out, "{:<width$}", line, width = width)?;
    queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
    out.flush()?;
    Ok(())
}
