use std::time::Instant;

use super::App;

impl App {
    /// Tick-based data refresh (every 3 seconds) for the active tab.
    pub fn process_tick(&mut self) -> bool {
        let now = Instant::now();
        if now.duration_since(self.last_tick) < self.tick_rate {
            return false;
        }
        self.controller.refresh_for_tab(self.app_view);
        self.last_tick = now;
        true
    }

    /// Poll the background start/stop request for its outcome.
    pub fn poll_actions(&mut self) -> bool {
        self.controller.poll_action()
    }

    /// Let the post-action settle window run out and re-sync status.
    pub fn settle_actions(&mut self) -> bool {
        self.controller.expire_settle()
    }

    /// Immediate refresh on tab switch, rate-limited so rapid tabbing
    /// does not hammer the backend.
    pub fn refresh_on_tab_switch(&mut self) -> bool {
        let now = Instant::now();
        if self.app_view != self.prev_app_view {
            let since_last = now.duration_since(self.last_tab_refresh);
            if since_last >= self.min_refresh_interval {
                self.controller.refresh_for_tab(self.app_view);
                self.last_tab_refresh = now;
            }
            self.prev_app_view = self.app_view;
            return true;
        }
        false
    }

    /// Expire pending confirmation if timed out.
    pub fn expire_pending_action(&mut self) -> bool {
        let now = Instant::now();
        if let Some(ref pa) = self.pending_action {
            if now > pa.expires {
                self.pending_action = None;
                return true;
            }
        }
        false
    }
}
