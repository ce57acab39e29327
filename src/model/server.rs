use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One server the bot has joined, as listed by GET /api/servers.
/// Uniqueness by `server_id` is assumed but not enforced client-side.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ServerSummary {
    pub server_id: String,
    pub server_name: String,
    pub prefix: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::ServerSummary;

    #[test]
    fn decodes_backend_shape() {
        let server: ServerSummary = serde_json::from_str(
            r#"{
                "server_id": "1162053379313381528",
                "server_name": "Test Guild",
                "prefix": "!",
                "created_at": "2024-06-01T12:30:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(server.server_id, "1162053379313381528");
        assert_eq!(server.prefix, "!");
    }
}
