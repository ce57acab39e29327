use std::io::{self, Write};
use chrono::{DateTime, Local, Utc};
use crossterm::{queue, style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor}};

use crate::model::BotState;

/// Truncate a string to at most `max_len` characters (not bytes), appending "..."
/// if truncated. Safe for multi-byte UTF-8.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else {
        let keep = max_len.saturating_sub(3);
        let truncated: String = s.chars().take(keep).collect();
        format!("{}...", truncated)
    }
}

/// Truncate a string to at most `max_len` characters for display. Returns a &str
/// slice up to the last valid char boundary within `max_len` bytes.
pub fn safe_truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

pub fn writeln(out: &mut impl Write, text: &str) -> io::Result<()> {
    write!(out, "{}\r\n", text)
}

pub fn write_section_header(out: &mut impl Write, text: &str) -> io::Result<()> {
    queue!(io::stdout(), SetAttribute(Attribute::Bold))?;
    write!(out, "{}\r\n", text)?;
    queue!(io::stdout(), SetAttribute(Attribute::Reset))?;
    Ok(())
}

pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let bytes = s.as_bytes();
    let mut result = String::new();
    for (i, &b) in bytes.iter().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(b as char);
    }
    result.chars().rev().collect()
}

/// Display color for a command category. Unknown categories fall back to
/// the default style.
pub fn category_color(category: &str) -> Color {
    match category {
        "moderation" => Color::Red,
        "server" => Color::Blue,
        "roles" => Color::Magenta,
        "channels" => Color::Green,
        "users" => Color::Yellow,
        "utility" => Color::Grey,
        "fun" => Color::DarkMagenta,
        "economy" => Color::DarkBlue,
        "logging" => Color::DarkYellow,
        "automod" => Color::Cyan,
        "advanced" => Color::DarkCyan,
        _ => Color::DarkGrey,
    }
}

pub fn status_badge_text(state: BotState) -> &'static str {
    match state {
        BotState::Running => "● Online",
        BotState::Stopped => "● Offline",
    }
}

pub fn status_badge_color(state: BotState) -> Color {
    match state {
        BotState::Running => Color::Green,
        BotState::Stopped => Color::Red,
    }
}

pub fn write_status_badge(out: &mut impl Write, state: BotState) -> io::Result<()> {
    queue!(io::stdout(), SetForegroundColor(status_badge_color(state)))?;
    write!(out, "{}", status_badge_text(state))?;
    queue!(io::stdout(), ResetColor)?;
    Ok(())
}

/// Success/failure dot for a log entry.
pub fn write_outcome_dot(out: &mut impl Write, success: bool) -> io::Result<()> {
    let color = if success { Color::Green } else { Color::Red };
    queue!(io::stdout(), SetForegroundColor(color))?;
    write!(out, "●")?;
    queue!(io::stdout(), ResetColor)?;
    Ok(())
}

pub fn format_local_time(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M:%S").to_string()
}

pub fn format_local_date(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

pub fn format_local_datetime(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}
