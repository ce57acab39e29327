use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::{BotStatus, CommandDescriptor, ExecutionLogEntry, ServerSummary};

/// Failure modes of a backend call. Callers treat all of them the same
/// way (reads keep their prior snapshot, actions still settle to idle);
/// the split exists so the log tells transport apart from protocol.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// The backend API surface the dashboard talks to. The production
/// implementation is [`HttpApi`]; tests substitute a scripted one.
#[async_trait]
pub trait BotApi: Send + Sync {
    async fn fetch_status(&self) -> Result<BotStatus, ApiError>;
    async fn fetch_servers(&self) -> Result<Vec<ServerSummary>, ApiError>;
    async fn fetch_commands(&self) -> Result<Vec<CommandDescriptor>, ApiError>;
    async fn fetch_logs(&self) -> Result<Vec<ExecutionLogEntry>, ApiError>;
    async fn start_bot(&self) -> Result<(), ApiError>;
    async fn stop_bot(&self) -> Result<(), ApiError>;
}

// Wire envelopes. Collection keys may be absent entirely; that reads as
// an empty list, never as an error.

#[derive(Debug, Default, Deserialize)]
struct ServersEnvelope {
    #[serde(default)]
    servers: Vec<ServerSummary>,
}

#[derive(Debug, Default, Deserialize)]
struct CommandsEnvelope {
    #[serde(default)]
    commands: Vec<CommandDescriptor>,
}

#[derive(Debug, Default, Deserialize)]
struct LogsEnvelope {
    #[serde(default)]
    logs: Vec<ExecutionLogEntry>,
}

/// HTTP client for the bot management backend.
pub struct HttpApi {
    http: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        response.json().await.map_err(ApiError::Decode)
    }

    /// POST an action endpoint. The response body is not required to
    /// contain structured data; only transport success matters.
    async fn post_action(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(())
    }
}

#[async_trait]
impl BotApi for HttpApi {
    async fn fetch_status(&self) -> Result<BotStatus, ApiError> {
        self.get_json("/api/bot/status").await
    }

    async fn fetch_servers(&self) -> Result<Vec<ServerSummary>, ApiError> {
        let envelope: ServersEnvelope = self.get_json("/api/servers").await?;
        Ok(envelope.servers)
    }

    async fn fetch_commands(&self) -> Result<Vec<CommandDescriptor>, ApiError> {
        let envelope: CommandsEnvelope = self.get_json("/api/commands").await?;
        Ok(envelope.commands)
    }

    async fn fetch_logs(&self) -> Result<Vec<ExecutionLogEntry>, ApiError> {
        let envelope: LogsEnvelope = self.get_json("/api/logs").await?;
        Ok(envelope.logs)
    }

    async fn start_bot(&self) -> Result<(), ApiError> {
        self.post_action("/api/bot/start").await
    }

    async fn stop_bot(&self) -> Result<(), ApiError> {
        self.post_action("/api/bot/stop").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn servers_envelope_defaults_when_key_missing() {
        let envelope: ServersEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.servers.is_empty());
    }

    #[test]
    fn commands_envelope_decodes_list() {
        let envelope: CommandsEnvelope = serde_json::from_str(
            r#"{"commands":[{"name":"help","category":"utility","description":"Show help"}]}"#,
        )
        .unwrap();
        assert_eq!(envelope.commands.len(), 1);
        assert_eq!(envelope.commands[0].name, "help");
    }

    #[test]
    fn logs_envelope_defaults_when_key_missing() {
        let envelope: LogsEnvelope = serde_json::from_str(r#"{"server_id":"7"}"#).unwrap();
        assert!(envelope.logs.is_empty());
    }

    #[test]
    fn base_url_is_joined_with_fixed_paths() {
        let api = HttpApi::new("http://localhost:8001");
        assert_eq!(api.base_url, "http://localhost:8001");
    }
}
