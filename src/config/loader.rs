//! Configuration loading: defaults, then file, then flags.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::cli::Cli;
use crate::config::schema::ServerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

impl ConfigError {
    /// True when the only complaint is the missing port, which gets the
    /// short usage message instead of a full report.
    pub fn is_missing_port(&self) -> bool {
        matches!(
            self,
            ConfigError::Validation(errors) if errors.as_slice() == [ValidationError::MissingPort]
        )
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a TOML configuration file without validating it.
pub fn read_config_file(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Build the effective configuration for this process.
pub fn load_config(cli: &Cli) -> Result<ServerConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => read_config_file(path)?,
        None => ServerConfig::default(),
    };
    cli.apply(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentMode;
    use clap::Parser;

    fn temp_config(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "import-fixture-server-{}-{}.toml",
            name,
            std::process::id()
        ));
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_flags_override_file() {
        let path = temp_config("override", "[listener]\nport = 9100\n[content]\nmode = \"sql\"\n");
        let cli = Cli::parse_from([
            "import-fixture-server",
            "--config",
            path.to_str().unwrap(),
            "--port",
            "9200",
        ]);

        let config = load_config(&cli).unwrap();
        assert_eq!(config.listener.port, 9200);
        assert_eq!(config.content.mode, ContentMode::Sql);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_zero_port_is_missing_port() {
        let cli = Cli::parse_from(["import-fixture-server", "--port", "0"]);
        let err = load_config(&cli).unwrap_err();
        assert!(err.is_missing_port());
        assert_eq!(err.to_string(), "must supply --port");
    }

    #[test]
    fn test_zero_port_with_other_errors_reports_all() {
        let path = temp_config("zero-port-empty-host", "[listener]\nhost = \"\"\n");
        let cli = Cli::parse_from([
            "import-fixture-server",
            "--config",
            path.to_str().unwrap(),
            "--port",
            "0",
        ]);

        let err = load_config(&cli).unwrap_err();
        assert!(!err.is_missing_port());
        assert_eq!(
            err.to_string(),
            "must supply --port, listener host must not be empty"
        );
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_missing_file() {
        let cli = Cli::parse_from(["import-fixture-server", "--config", "/nonexistent/server.toml"]);
        assert!(matches!(load_config(&cli), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_malformed_file() {
        let path = temp_config("malformed", "[listener\nport = ");
        let cli = Cli::parse_from(["import-fixture-server", "--config", path.to_str().unwrap()]);
        assert!(matches!(load_config(&cli), Err(ConfigError::Parse(_))));
        let _ = fs::remove_file(path);
    }
}
