use serde::Deserialize;

/// One entry of the bot's command registry, as listed by GET /api/commands.
/// `category` is a free-form classification tag used for filtering and
/// display color-coding.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CommandDescriptor {
    pub name: String,
    pub description: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::CommandDescriptor;

    #[test]
    fn decodes_backend_shape() {
        let command: CommandDescriptor = serde_json::from_str(
            r#"{"name":"ban","category":"moderation","description":"Ban a user from the server"}"#,
        )
        .unwrap();
        assert_eq!(command.name, "ban");
        assert_eq!(command.category, "moderation");
    }
}
