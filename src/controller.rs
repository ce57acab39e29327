use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError, channel};
use std::time::{Duration, Instant};

use tracing::warn;

use crate::api::{ApiError, BotApi};
use crate::model::{AppView, BotState, BotStatus, CommandDescriptor, ExecutionLogEntry, ServerSummary};
use crate::store::DashboardStore;

/// Fixed wait after a start/stop request before re-querying status. The
/// backend is assumed to finish the lifecycle change within this window;
/// if it is slower, the displayed status lags until the next tick.
pub const SETTLE_DELAY: Duration = Duration::from_secs(2);

/// Receiver for the background start/stop result.
type ActionReceiver = Receiver<Result<BotAction, (BotAction, ApiError)>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotAction {
    Start,
    Stop,
}

impl BotAction {
    /// The bot state this action drives toward. Triggering an action
    /// whose target is already displayed is a no-op.
    fn target(self) -> BotState {
        match self {
            BotAction::Start => BotState::Running,
            BotAction::Stop => BotState::Stopped,
        }
    }

    fn progress(self) -> &'static str {
        match self {
            BotAction::Start => "Starting",
            BotAction::Stop => "Stopping",
        }
    }

    fn done(self) -> &'static str {
        match self {
            BotAction::Start => "Start",
            BotAction::Stop => "Stop",
        }
    }
}

/// Keeps the displayed bot state in sync with the backend and drives
/// start/stop actions: trigger the request, hold `busy` for a fixed
/// settle window, then re-fetch status and disarm. The settle deadline
/// is checked by the event loop rather than armed as a detached timer,
/// so dropping the controller cancels it.
pub struct BotController {
    api: Arc<dyn BotApi>,
    rt: Arc<tokio::runtime::Runtime>,
    pub store: DashboardStore,
    pub status_message: Option<String>,
    action_receiver: Option<ActionReceiver>,
    action_in_progress: bool,
    settle_deadline: Option<Instant>,
    settle_delay: Duration,
}

impl BotController {
    pub fn new(api: Arc<dyn BotApi>, rt: Arc<tokio::runtime::Runtime>) -> Self {
        Self::with_settle_delay(api, rt, SETTLE_DELAY)
    }

    pub fn with_settle_delay(
        api: Arc<dyn BotApi>,
        rt: Arc<tokio::runtime::Runtime>,
        settle_delay: Duration,
    ) -> Self {
        Self {
            api,
            rt,
            store: DashboardStore::default(),
            status_message: None,
            action_receiver: None,
            action_in_progress: false,
            settle_deadline: None,
            settle_delay,
        }
    }

    /// True while a start/stop is in flight or settling. The input layer
    /// disables the start/stop affordances while busy.
    pub fn is_busy(&self) -> bool {
        self.action_in_progress
    }

    pub fn can_start(&self) -> bool {
        !self.action_in_progress && !self.store.status.status.is_running()
    }

    pub fn can_stop(&self) -> bool {
        !self.action_in_progress && self.store.status.status.is_running()
    }

    // --- Read refreshes ---

    /// Fetch all four snapshots concurrently. Each one applies
    /// independently; a failed fetch keeps the prior snapshot.
    pub fn refresh_all(&mut self) {
        let api = Arc::clone(&self.api);
        let (status, servers, commands, logs) = self.rt.block_on(async {
            tokio::join!(
                api.fetch_status(),
                api.fetch_servers(),
                api.fetch_commands(),
                api.fetch_logs(),
            )
        });
        self.apply_status(status);
        self.apply_servers(servers);
        self.apply_commands(commands);
        self.apply_logs(logs);
    }

    pub fn refresh_status(&mut self) {
        let api = Arc::clone(&self.api);
        let result = self.rt.block_on(async { api.fetch_status().await });
        self.apply_status(result);
    }

    pub fn refresh_servers(&mut self) {
        let api = Arc::clone(&self.api);
        let result = self.rt.block_on(async { api.fetch_servers().await });
        self.apply_servers(result);
    }

    pub fn refresh_commands(&mut self) {
        let api = Arc::clone(&self.api);
        let result = self.rt.block_on(async { api.fetch_commands().await });
        self.apply_commands(result);
    }

    pub fn refresh_logs(&mut self) {
        let api = Arc::clone(&self.api);
        let result = self.rt.block_on(async { api.fetch_logs().await });
        self.apply_logs(result);
    }

    /// Refresh the data backing the given tab. The status snapshot feeds
    /// the header badge on every tab, so it always refreshes.
    pub fn refresh_for_tab(&mut self, view: AppView) {
        match view {
            AppView::Dashboard => self.refresh_all(),
            AppView::Commands => {
                self.refresh_status();
                self.refresh_commands();
            }
            AppView::Servers => {
                self.refresh_status();
                self.refresh_servers();
            }
            AppView::Logs => {
                self.refresh_status();
                self.refresh_logs();
            }
        }
    }

    fn apply_status(&mut self, result: Result<BotStatus, ApiError>) {
        match result {
            Ok(status) => self.store.replace_status(status),
            Err(e) => warn!(error = %e, "status fetch failed, keeping prior snapshot"),
        }
    }

    fn apply_servers(&mut self, result: Result<Vec<ServerSummary>, ApiError>) {
        match result {
            Ok(servers) => self.store.replace_servers(servers),
            Err(e) => warn!(error = %e, "server list fetch failed, keeping prior snapshot"),
        }
    }

    fn apply_commands(&mut self, result: Result<Vec<CommandDescriptor>, ApiError>) {
        match result {
            Ok(commands) => self.store.replace_commands(commands),
            Err(e) => warn!(error = %e, "command list fetch failed, keeping prior snapshot"),
        }
    }

    fn apply_logs(&mut self, result: Result<Vec<ExecutionLogEntry>, ApiError>) {
        match result {
            Ok(logs) => self.store.replace_logs(logs),
            Err(e) => warn!(error = %e, "log fetch failed, keeping prior snapshot"),
        }
    }

    // --- Actions ---

    /// Bot action: start (non-blocking).
    pub fn start(&mut self) {
        self.trigger(BotAction::Start);
    }

    /// Bot action: stop (non-blocking).
    pub fn stop(&mut self) {
        self.trigger(BotAction::Stop);
    }

    /// Issue the action request on a background thread and arm the settle
    /// deadline. No-op when the displayed status already matches the
    /// action's target state.
    fn trigger(&mut self, action: BotAction) {
        if self.action_in_progress {
            self.status_message = Some("An action is already in progress...".to_string());
            return;
        }
        if self.store.status.status == action.target() {
            return;
        }

        let (tx, rx) = channel();
        self.action_receiver = Some(rx);
        self.action_in_progress = true;
        self.settle_deadline = Some(Instant::now() + self.settle_delay);
        self.status_message = Some(format!("{} bot...", action.progress()));

        let api = Arc::clone(&self.api);
        let rt = Arc::clone(&self.rt);
        std::thread::spawn(move || {
            let result = rt.block_on(async {
                match action {
                    BotAction::Start => api.start_bot().await,
                    BotAction::Stop => api.stop_bot().await,
                }
            });
            // Receiver may be gone if the app shut down mid-action.
            let _ = tx.send(result.map(|_| action).map_err(|e| (action, e)));
        });
    }

    /// Poll for the background request outcome. Returns true if the
    /// status message changed. Does not disarm the settle deadline: the
    /// controller stays busy for the full window either way.
    pub fn poll_action(&mut self) -> bool {
        let Some(ref rx) = self.action_receiver else {
            return false;
        };
        match rx.try_recv() {
            Ok(Ok(action)) => {
                self.status_message = Some(format!("{} request acknowledged", action.done()));
                self.action_receiver = None;
                true
            }
            Ok(Err((action, e))) => {
                warn!(error = %e, action = action.done(), "bot action request failed");
                self.status_message =
                    Some(format!("Error: {} request failed ({})", action.done(), e));
                self.action_receiver = None;
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.status_message = Some("Action failed unexpectedly".to_string());
                self.action_receiver = None;
                true
            }
        }
    }

    /// Once the settle deadline passes, re-fetch status and return to
    /// idle. The delay is unconditional: it runs out whether or not the
    /// request itself succeeded, so the UI can never stay busy forever.
    pub fn expire_settle(&mut self) -> bool {
        let Some(deadline) = self.settle_deadline else {
            return false;
        };
        if Instant::now() < deadline {
            return false;
        }
        self.settle_deadline = None;
        self.refresh_status();
        self.action_in_progress = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use reqwest::StatusCode;

    use crate::store::CategoryFilter;

    use super::*;

    /// In-memory backend with scriptable responses and call counters.
    #[derive(Default)]
    struct ScriptedApi {
        status: Mutex<BotStatus>,
        servers: Mutex<Vec<ServerSummary>>,
        commands: Mutex<Vec<CommandDescriptor>>,
        logs: Mutex<Vec<ExecutionLogEntry>>,
        fail_reads: AtomicBool,
        fail_actions: AtomicBool,
        start_calls: AtomicUsize,
        stop_calls: AtomicUsize,
    }

    impl ScriptedApi {
        fn read_error(&self) -> Option<ApiError> {
            self.fail_reads
                .load(Ordering::Relaxed)
                .then(|| ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR))
        }
    }

    #[async_trait]
    impl BotApi for ScriptedApi {
        async fn fetch_status(&self) -> Result<BotStatus, ApiError> {
            match self.read_error() {
                Some(e) => Err(e),
                None => Ok(*self.status.lock().unwrap()),
            }
        }

        async fn fetch_servers(&self) -> Result<Vec<ServerSummary>, ApiError> {
            match self.read_error() {
                Some(e) => Err(e),
                None => Ok(self.servers.lock().unwrap().clone()),
            }
        }

        async fn fetch_commands(&self) -> Result<Vec<CommandDescriptor>, ApiError> {
            match self.read_error() {
                Some(e) => Err(e),
                None => Ok(self.commands.lock().unwrap().clone()),
            }
        }

        async fn fetch_logs(&self) -> Result<Vec<ExecutionLogEntry>, ApiError> {
            match self.read_error() {
                Some(e) => Err(e),
                None => Ok(self.logs.lock().unwrap().clone()),
            }
        }

        async fn start_bot(&self) -> Result<(), ApiError> {
            self.start_calls.fetch_add(1, Ordering::Relaxed);
            if self.fail_actions.load(Ordering::Relaxed) {
                Err(ApiError::Status(StatusCode::BAD_GATEWAY))
            } else {
                Ok(())
            }
        }

        async fn stop_bot(&self) -> Result<(), ApiError> {
            self.stop_calls.fetch_add(1, Ordering::Relaxed);
            if self.fail_actions.load(Ordering::Relaxed) {
                Err(ApiError::Status(StatusCode::BAD_GATEWAY))
            } else {
                Ok(())
            }
        }
    }

    fn test_rt() -> Arc<tokio::runtime::Runtime> {
        Arc::new(
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .worker_threads(2)
                .build()
                .unwrap(),
        )
    }

    fn controller(api: Arc<ScriptedApi>, settle: Duration) -> BotController {
        BotController::with_settle_delay(api, test_rt(), settle)
    }

    fn command(name: &str, category: &str) -> CommandDescriptor {
        CommandDescriptor {
            name: name.to_string(),
            description: format!("{name} command"),
            category: category.to_string(),
        }
    }

    fn running_status() -> BotStatus {
        BotStatus {
            status: BotState::Running,
            servers: 2,
            commands_executed: 9,
        }
    }

    #[test]
    fn refresh_all_populates_every_snapshot() {
        let api = Arc::new(ScriptedApi::default());
        *api.status.lock().unwrap() = running_status();
        *api.commands.lock().unwrap() = vec![command("ban", "moderation")];
        *api.logs.lock().unwrap() = vec![ExecutionLogEntry {
            command_name: "ban".into(),
            user_id: "42".into(),
            server_id: "7".into(),
            success: true,
            timestamp: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        }];

        let mut ctl = controller(Arc::clone(&api), SETTLE_DELAY);
        ctl.refresh_all();

        assert!(ctl.store.status.status.is_running());
        assert_eq!(ctl.store.commands.len(), 1);
        assert_eq!(ctl.store.logs.len(), 1);
        assert!(ctl.store.servers.is_empty());
    }

    #[test]
    fn failed_fetch_keeps_prior_snapshot() {
        let api = Arc::new(ScriptedApi::default());
        *api.status.lock().unwrap() = running_status();
        *api.commands.lock().unwrap() = vec![command("ban", "moderation")];

        let mut ctl = controller(Arc::clone(&api), SETTLE_DELAY);
        ctl.refresh_all();
        assert_eq!(ctl.store.commands.len(), 1);

        api.fail_reads.store(true, Ordering::Relaxed);
        *api.commands.lock().unwrap() = vec![];
        ctl.refresh_all();

        assert!(ctl.store.status.status.is_running());
        assert_eq!(ctl.store.commands.len(), 1);
        assert_eq!(ctl.store.commands[0].name, "ban");
    }

    #[test]
    fn start_when_already_running_issues_no_post() {
        let api = Arc::new(ScriptedApi::default());
        *api.status.lock().unwrap() = running_status();

        let mut ctl = controller(Arc::clone(&api), SETTLE_DELAY);
        ctl.refresh_status();
        assert!(!ctl.can_start());

        ctl.start();
        assert!(!ctl.is_busy());
        assert_eq!(api.start_calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn second_trigger_while_busy_is_rejected() {
        let api = Arc::new(ScriptedApi::default());
        *api.status.lock().unwrap() = running_status();

        let mut ctl = controller(Arc::clone(&api), Duration::from_secs(5));
        ctl.refresh_status();
        ctl.stop();
        assert!(ctl.is_busy());

        // Status still shows running, but busy blocks a second request.
        ctl.stop();
        assert_eq!(
            ctl.status_message.as_deref(),
            Some("An action is already in progress...")
        );
    }

    #[test]
    fn stop_is_busy_until_settle_then_refetches_status() {
        let api = Arc::new(ScriptedApi::default());
        *api.status.lock().unwrap() = running_status();

        let mut ctl = controller(Arc::clone(&api), Duration::from_millis(40));
        ctl.refresh_status();
        assert!(ctl.can_stop());

        ctl.stop();
        assert!(ctl.is_busy());
        assert!(!ctl.expire_settle(), "must not disarm before the delay");
        assert!(ctl.is_busy());

        // Backend finishes during the settle window.
        *api.status.lock().unwrap() = BotStatus::default();
        std::thread::sleep(Duration::from_millis(60));
        while !ctl.poll_action() {
            std::thread::sleep(Duration::from_millis(5));
        }

        assert!(ctl.expire_settle());
        assert!(!ctl.is_busy());
        assert_eq!(ctl.store.status.status, BotState::Stopped);
        assert_eq!(api.stop_calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn failed_action_still_settles_to_idle() {
        let api = Arc::new(ScriptedApi::default());
        *api.status.lock().unwrap() = running_status();
        api.fail_actions.store(true, Ordering::Relaxed);

        let mut ctl = controller(Arc::clone(&api), Duration::from_millis(40));
        ctl.refresh_status();
        ctl.stop();
        assert!(ctl.is_busy());

        std::thread::sleep(Duration::from_millis(60));
        while !ctl.poll_action() {
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(
            ctl.status_message.as_deref().unwrap_or("").starts_with("Error:"),
            "transport failure must surface in the status line"
        );
        assert!(ctl.is_busy(), "failure must not short-circuit the settle window");

        assert!(ctl.expire_settle());
        assert!(!ctl.is_busy());
    }

    #[test]
    fn empty_backend_projects_empty_dashboard() {
        let api = Arc::new(ScriptedApi::default());
        let mut ctl = controller(api, SETTLE_DELAY);
        ctl.refresh_all();

        assert_eq!(ctl.store.status, BotStatus::default());
        assert!(ctl.store.filtered_commands().is_empty());
        assert!(ctl.store.categories().is_empty());
        assert!(ctl.store.servers.is_empty());
        assert!(ctl.store.logs.is_empty());
    }

    #[test]
    fn moderation_filter_scenario() {
        let api = Arc::new(ScriptedApi::default());
        *api.commands.lock().unwrap() = vec![
            command("ban", "moderation"),
            command("kick", "moderation"),
            command("help", "utility"),
        ];

        let mut ctl = controller(api, SETTLE_DELAY);
        ctl.refresh_commands();
        ctl.store.selected_category = CategoryFilter::Only("moderation".to_string());

        let names: Vec<&str> = ctl
            .store
            .filtered_commands()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["ban", "kick"]);
        assert_eq!(ctl.store.categories(), ["moderation", "utility"]);
    }
}
