use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::AppView;
use crate::store::CategoryFilter;

use super::App;
use super::state::{PendingAction, PendingActionKind};

/// How long an armed start/stop confirmation waits for the `y`.
const CONFIRM_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of handling a key: Quit the app, or key was consumed (needs render).
/// None means the key was not handled.
pub enum InputResult {
    Quit,
    Consumed,
}

/// Handle a key event. Returns Some(Quit) to exit, Some(Consumed) if key was
/// handled and a render is needed, None if the key was not handled.
pub fn handle_key(app: &mut App, key_event: KeyEvent) -> Option<InputResult> {
    let KeyEvent { code, modifiers, .. } = key_event;

    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputResult::Quit);
    }

    if app.pending_action.is_some() {
        if code == KeyCode::Char('y') || code == KeyCode::Char('Y') {
            let pa = app.pending_action.take().unwrap();
            match pa.kind {
                PendingActionKind::StartBot => app.controller.start(),
                PendingActionKind::StopBot => app.controller.stop(),
            }
        } else {
            app.pending_action = None;
        }
        return Some(InputResult::Consumed);
    }

    match code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(InputResult::Quit),
        KeyCode::Tab => {
            app.app_view = app.app_view.next();
            return Some(InputResult::Consumed);
        }
        KeyCode::BackTab => {
            app.app_view = app.app_view.prev();
            return Some(InputResult::Consumed);
        }
        KeyCode::Char('r') => {
            app.controller.refresh_for_tab(app.app_view);
            return Some(InputResult::Consumed);
        }
        _ => {}
    }

    match app.app_view {
        AppView::Dashboard => handle_dashboard(app, code),
        AppView::Commands => handle_commands(app, code),
        AppView::Servers | AppView::Logs => None,
    }
}

fn handle_dashboard(app: &mut App, code: KeyCode) -> Option<InputResult> {
    match code {
        // Start/stop arm a confirmation; the affordance is disabled while
        // busy or when the bot is already in the target state.
        KeyCode::Char('s') if app.controller.can_start() => {
            app.pending_action = Some(PendingAction {
                description: "Start the bot?".to_string(),
                kind: PendingActionKind::StartBot,
                expires: Instant::now() + CONFIRM_TIMEOUT,
            });
            Some(InputResult::Consumed)
        }
        KeyCode::Char('t') if app.controller.can_stop() => {
            app.pending_action = Some(PendingAction {
                description: "Stop the bot?".to_string(),
                kind: PendingActionKind::StopBot,
                expires: Instant::now() + CONFIRM_TIMEOUT,
            });
            Some(InputResult::Consumed)
        }
        _ => None,
    }
}

fn handle_commands(app: &mut App, code: KeyCode) -> Option<InputResult> {
    match code {
        KeyCode::Char('f') | KeyCode::Right => {
            app.controller.store.cycle_category();
            Some(InputResult::Consumed)
        }
        KeyCode::Left => {
            app.controller.store.selected_category = CategoryFilter::All;
            Some(InputResult::Consumed)
        }
        _ => None,
    }
}
