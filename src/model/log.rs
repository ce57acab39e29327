use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One command execution record, as listed by GET /api/logs.
/// The backend delivers entries newest-first; the client never re-sorts,
/// only truncates for display.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ExecutionLogEntry {
    pub command_name: String,
    pub user_id: String,
    pub server_id: String,
    pub success: bool,
    pub timestamp: DateTime<Utc>,
}
