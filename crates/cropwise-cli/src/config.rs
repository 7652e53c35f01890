use cropwise_core::config::{load_config, EngineConfig};
use cropwise_core::error::CropwiseError;
use std::env;
use std::path::PathBuf;

/// Settings read from the environment (and `.env`) at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telemetry: TelemetryConfig,
    /// Engine config file. `--config` takes precedence over `CROPWISE_CONFIG`.
    pub engine_config: Option<PathBuf>,
}

impl AppConfig {
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let log_level = env::var("CROPWISE_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
        let engine_config = env::var_os("CROPWISE_CONFIG")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self {
            telemetry: TelemetryConfig { log_level },
            engine_config,
        }
    }

    /// Engine settings from the configured file, or defaults if there is none.
    pub fn engine(&self) -> Result<EngineConfig, CropwiseError> {
        match &self.engine_config {
            Some(path) => load_config(path),
            None => Ok(EngineConfig::default()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Fallback filter when `CROPWISE_LOG` is unset.
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let config = AppConfig {
            telemetry: TelemetryConfig {
                log_level: "warn".into(),
            },
            engine_config: None,
        };
        assert_eq!(config.engine().unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let config = AppConfig {
            telemetry: TelemetryConfig {
                log_level: "warn".into(),
            },
            engine_config: Some(PathBuf::from("/nonexistent/cropwise.json")),
        };
        assert!(matches!(
            config.engine(),
            Err(CropwiseError::ConfigLoad { .. })
        ));
    }
}
