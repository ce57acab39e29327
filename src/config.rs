use std::path::PathBuf;

use clap::Parser;

/// Backend address used when neither --url nor the environment is set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8001";
/// Environment variable consulted when --url is absent.
pub const BASE_URL_ENV: &str = "BOTDECK_URL";

#[derive(Parser, Debug)]
#[command(
    name = "botdeck",
    version,
    about = "Terminal dashboard for monitoring and controlling a Discord bot"
)]
pub struct Cli {
    /// Base URL of the bot management backend.
    #[arg(long)]
    pub url: Option<String>,

    /// File diagnostics are appended to (the dashboard owns the terminal).
    #[arg(long, default_value = "botdeck.log")]
    pub log_file: PathBuf,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    pub log_file: PathBuf,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        let env_url = std::env::var(BASE_URL_ENV).ok();
        Self {
            base_url: resolve_base_url(cli.url, env_url),
            log_file: cli.log_file,
        }
    }
}

/// Flag wins over environment wins over the loopback default. A trailing
/// slash is trimmed so joining the fixed /api paths stays single-slashed.
fn resolve_base_url(flag: Option<String>, env: Option<String>) -> String {
    let url = flag
        .or(env)
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_env() {
        assert_eq!(
            resolve_base_url(Some("http://box:9000".into()), Some("http://env:1".into())),
            "http://box:9000"
        );
    }

    #[test]
    fn env_wins_over_default() {
        assert_eq!(
            resolve_base_url(None, Some("http://env:1".into())),
            "http://env:1"
        );
    }

    #[test]
    fn falls_back_to_loopback_default() {
        assert_eq!(resolve_base_url(None, None), DEFAULT_BASE_URL);
        assert_eq!(resolve_base_url(None, Some("  ".into())), DEFAULT_BASE_URL);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        assert_eq!(
            resolve_base_url(Some("http://box:9000/".into()), None),
            "http://box:9000"
        );
    }
}
