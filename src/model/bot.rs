use serde::Deserialize;

/// Lifecycle state of the bot process as reported by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotState {
    Running,
    #[default]
    Stopped,
}

impl BotState {
    pub fn is_running(self) -> bool {
        matches!(self, BotState::Running)
    }
}

/// Status snapshot from GET /api/bot/status. Absent fields read as a
/// stopped bot with zero counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct BotStatus {
    #[serde(default)]
    pub status: BotState,
    #[serde(default)]
    pub servers: u64,
    #[serde(default)]
    pub commands_executed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_decodes_lowercase_states() {
        let status: BotStatus =
            serde_json::from_str(r#"{"status":"running","servers":3,"commands_executed":42}"#)
                .unwrap();
        assert_eq!(status.status, BotState::Running);
        assert_eq!(status.servers, 3);
        assert_eq!(status.commands_executed, 42);
    }

    #[test]
    fn absent_fields_default_to_stopped_and_zero() {
        let status: BotStatus = serde_json::from_str("{}").unwrap();
        assert_eq!(status.status, BotState::Stopped);
        assert_eq!(status.servers, 0);
        assert_eq!(status.commands_executed, 0);
    }

    #[test]
    fn default_snapshot_is_stopped() {
        assert!(!BotStatus::default().status.is_running());
    }
}
