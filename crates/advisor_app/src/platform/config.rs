use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use advisor_engine::{ServiceSettings, DEFAULT_CHAT_BASE_URL, DEFAULT_INGEST_BASE_URL};
use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

use super::logging::LogDestination;

pub const DEFAULT_CONFIG_PATH: &str = "advisor.ron";

#[derive(Parser, Debug)]
#[command(
    name = "advisor",
    about = "Terminal client for the college advisor chat and PDF ingestion services"
)]
pub struct Args {
    /// RON config file. Defaults to ./advisor.ron when present.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Base URL of the chat service.
    #[arg(long)]
    pub chat_url: Option<String>,
    /// Base URL of the PDF ingestion service.
    #[arg(long)]
    pub ingest_url: Option<String>,
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,
    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub chat_base_url: String,
    pub ingest_base_url: String,
    pub connect_timeout_secs: u64,
    pub chat_timeout_secs: u64,
    pub upload_timeout_secs: u64,
    pub log: LogDestination,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let settings = ServiceSettings::default();
        Self {
            chat_base_url: DEFAULT_CHAT_BASE_URL.to_string(),
            ingest_base_url: DEFAULT_INGEST_BASE_URL.to_string(),
            connect_timeout_secs: settings.connect_timeout.as_secs(),
            chat_timeout_secs: settings.chat_timeout.as_secs(),
            upload_timeout_secs: settings.upload_timeout.as_secs(),
            log: LogDestination::default(),
        }
    }
}

impl ClientConfig {
    /// Resolves the effective config: file (if any), then command-line flags.
    pub fn resolve(args: &Args) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::load(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        if let Some(url) = &args.chat_url {
            config.chat_base_url = url.clone();
        }
        if let Some(url) = &args.ingest_url {
            config.ingest_base_url = url.clone();
        }
        if let Some(log) = args.log {
            config.log = log;
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            chat_base_url: self.chat_base_url.clone(),
            ingest_base_url: self.ingest_base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            chat_timeout: Duration::from_secs(self.chat_timeout_secs),
            upload_timeout: Duration::from_secs(self.upload_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    fn args(config: Option<PathBuf>) -> Args {
        Args {
            config,
            chat_url: None,
            ingest_url: None,
            log: None,
            verbose: false,
        }
    }

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write");
        file
    }

    #[test]
    fn defaults_point_at_local_services() {
        let config = ClientConfig::default();
        let settings = config.service_settings();

        assert_eq!(settings.chat_base_url, "http://127.0.0.1:5001");
        assert_eq!(settings.ingest_base_url, "http://localhost:5002");
        assert_eq!(settings, ServiceSettings::default());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let file = write_config(r#"(chat_base_url: "http://chat.internal:9000", log: both)"#);
        let config = ClientConfig::load(file.path()).expect("config");

        assert_eq!(config.chat_base_url, "http://chat.internal:9000");
        assert_eq!(config.ingest_base_url, DEFAULT_INGEST_BASE_URL);
        assert_eq!(config.log, LogDestination::Both);
        assert_eq!(config.chat_timeout_secs, 30);
    }

    #[test]
    fn flags_override_file_values() {
        let file = write_config(r#"(chat_base_url: "http://from-file", upload_timeout_secs: 5)"#);
        let mut args = args(Some(file.path().to_path_buf()));
        args.chat_url = Some("http://from-flag".to_string());
        args.log = Some(LogDestination::Terminal);

        let config = ClientConfig::resolve(&args).expect("config");
        assert_eq!(config.chat_base_url, "http://from-flag");
        assert_eq!(config.upload_timeout_secs, 5);
        assert_eq!(config.log, LogDestination::Terminal);
        assert_eq!(
            config.service_settings().upload_timeout,
            Duration::from_secs(5)
        );
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("nope.ron");
        let err = ClientConfig::resolve(&args(Some(missing))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = write_config("(chat_base_url: 42");
        let err = ClientConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
