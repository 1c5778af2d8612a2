//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::ApiConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `database.url`.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
/// Environment variable overriding the port of `listener.bind_address`.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Env(String),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Env(msg) => write!(f, "Environment error: {}", msg),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration from an optional TOML file, apply environment
/// overrides, then validate.
pub fn load_config(path: Option<&Path>) -> Result<ApiConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
            toml::from_str(&content).map_err(ConfigError::Parse)?
        }
        None => ApiConfig::default(),
    };

    apply_overrides(
        &mut config,
        std::env::var(DATABASE_URL_ENV).ok(),
        std::env::var(PORT_ENV).ok(),
    )?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply `DATABASE_URL` / `PORT` style overrides on top of a parsed config.
pub fn apply_overrides(
    config: &mut ApiConfig,
    database_url: Option<String>,
    port: Option<String>,
) -> Result<(), ConfigError> {
    if let Some(url) = database_url {
        config.database.url = url;
    }

    if let Some(port) = port {
        let port: u16 = port
            .trim()
            .parse()
            .map_err(|_| ConfigError::Env(format!("{} must be a port number, got '{}'", PORT_ENV, port)))?;
        let host = config
            .listener
            .bind_address
            .rsplit_once(':')
            .map(|(host, _)| host.to_string())
            .unwrap_or_else(|| "0.0.0.0".to_string());
        config.listener.bind_address = format!("{}:{}", host, port);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_overrides_replace_url_and_port() {
        let mut config = ApiConfig::default();
        apply_overrides(
            &mut config,
            Some("sqlite::memory:".into()),
            Some("8088".into()),
        )
        .unwrap();

        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.listener.bind_address, "0.0.0.0:8088");
    }

    #[test]
    fn test_bad_port_is_rejected() {
        let mut config = ApiConfig::default();
        let err = apply_overrides(&mut config, None, Some("http".into())).unwrap_err();
        assert!(matches!(err, ConfigError::Env(_)));
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_invalid_file_reports_validation() {
        let path = std::env::temp_dir().join(format!("starwars-api-{}.toml", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[timeouts]\nrequest_secs = 0").unwrap();
        drop(file);

        let err = load_config(Some(&path)).unwrap_err();
        let _ = fs::remove_file(&path);
        match err {
            ConfigError::Validation(errors) => {
                assert!(errors.iter().any(|e| e.field == "timeouts.request_secs"));
            }
            other => panic!("expected validation error, got {}", other),
        }
    }
}
