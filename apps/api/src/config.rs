use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub export_dir: PathBuf,
    /// Program and arguments that receive copied text on stdin.
    pub clipboard_command: Option<Vec<String>>,
    /// How long a clipboard program may run before the copy is abandoned.
    pub clipboard_timeout: Duration,
    pub catalog_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            export_dir: non_blank("EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./exports")),
            clipboard_command: non_blank("CLIPBOARD_COMMAND")
                .map(|cmd| cmd.split_whitespace().map(str::to_string).collect()),
            clipboard_timeout: Duration::from_secs(
                non_blank("CLIPBOARD_TIMEOUT_SECS")
                    .unwrap_or_else(|| "5".to_string())
                    .parse::<u64>()
                    .context("CLIPBOARD_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            catalog_dir: non_blank("CATALOG_DIR").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.export_dir, PathBuf::from("./exports"));
        assert!(config.clipboard_command.is_none());
        assert_eq!(config.clipboard_timeout, Duration::from_secs(5));
        assert!(config.catalog_dir.is_none());
    }

    #[test]
    fn test_clipboard_timeout() {
        let config = config_from(&[("CLIPBOARD_TIMEOUT_SECS", "12")]).unwrap();
        assert_eq!(config.clipboard_timeout, Duration::from_secs(12));

        let err = config_from(&[("CLIPBOARD_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(err.to_string().contains("CLIPBOARD_TIMEOUT_SECS"));
    }

    #[test]
    fn test_clipboard_command_is_split() {
        let config = config_from(&[("CLIPBOARD_COMMAND", "xclip -selection  clipboard")]).unwrap();
        assert_eq!(
            config.clipboard_command.unwrap(),
            vec!["xclip", "-selection", "clipboard"]
        );
    }

    #[test]
    fn test_blank_optional_values_are_unset() {
        let config = config_from(&[("CLIPBOARD_COMMAND", "  "), ("CATALOG_DIR", "")]).unwrap();
        assert!(config.clipboard_command.is_none());
        assert!(config.catalog_dir.is_none());
    }

    #[test]
    fn test_invalid_port_fails() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
