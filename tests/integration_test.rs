//! Integration tests across the model, store, and view modules.
//! Verifies that the public surface works together correctly.

use botdeck::model::{AppView, BotState, BotStatus, CommandDescriptor};
use botdeck::store::{CategoryFilter, DashboardStore};
use botdeck::view::{Presenter, category_color, format_number, safe_truncate, truncate_str};

fn command(name: &str, category: &str) -> CommandDescriptor {
    CommandDescriptor {
        name: name.to_string(),
        description: format!("{name} command"),
        category: category.to_string(),
    }
}

#[test]
fn model_types_construct() {
    let status = BotStatus::default();
    assert_eq!(status.status, BotState::Stopped);
    let _ = DashboardStore::default();
    let _ = CategoryFilter::default();
}

#[test]
fn app_view_tabs_cycle() {
    assert_eq!(AppView::Dashboard.next(), AppView::Commands);
    assert_eq!(AppView::Logs.next(), AppView::Dashboard);
    assert_eq!(AppView::Dashboard.prev(), AppView::Logs);
    assert_eq!(AppView::Servers.title(), "Servers");
}

#[test]
fn store_projections_line_up_with_snapshot() {
    let mut store = DashboardStore::default();
    store.replace_commands(vec![
        command("ban", "moderation"),
        command("kick", "moderation"),
        command("help", "utility"),
    ]);

    store.selected_category = CategoryFilter::Only("moderation".to_string());
    let names: Vec<&str> = store
        .filtered_commands()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, ["ban", "kick"]);
    assert_eq!(store.categories(), ["moderation", "utility"]);
}

#[test]
fn view_helpers_pure() {
    assert_eq!(truncate_str("hello", 5), "hello");
    assert_eq!(truncate_str("hello world", 8), "hello...");
    let s = "café";
    assert_eq!(safe_truncate(s, 10), "café");
    assert_eq!(format_number(1234567), "1,234,567");
    // Unknown categories fall back to the default style.
    assert_eq!(category_color("moderation"), category_color("moderation"));
    assert_ne!(category_color("moderation"), category_color("utility"));
}

#[test]
fn presenter_render_size_guard_checks_terminal() {
    // Just verify the function exists and returns a Result.
    // In headless environments (Docker, CI) there is no tty, so
    // terminal::size() may return an error — that's expected and fine.
    let _result = Presenter::render_size_guard();
    // We intentionally don't assert is_ok() because the outcome
    // depends on whether a real terminal is attached.
}
