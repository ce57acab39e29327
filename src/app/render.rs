use std::io;

use chrono::Local;
use crossterm::{cursor::MoveTo, execute, terminal::{Clear, ClearType}};

use crate::model::AppView;
use crate::view::Presenter;

use super::App;

pub fn render(app: &mut App) -> io::Result<()> {
    let time_str = Local::now().format("%H:%M:%S").to_string();
    let mut out = io::stdout();

    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    let store = &app.controller.store;
    Presenter::render_tab_bar(
        &mut out,
        app.app_view,
        store.commands.len(),
        store.servers.len(),
        store.logs.len(),
        store.status.status,
        &time_str,
    )?;

    match app.app_view {
        AppView::Dashboard => Presenter::render_dashboard(
            store,
            app.controller.is_busy(),
            &app.controller.status_message,
        )?,
        AppView::Commands => Presenter::render_commands(
            &store.filtered_commands(),
            &store.selected_category,
            &app.controller.status_message,
        )?,
        AppView::Servers => {
            Presenter::render_servers(&store.servers, &app.controller.status_message)?
        }
        AppView::Logs => Presenter::render_logs(&store.logs, &app.controller.status_message)?,
    }

    Ok(())
}
