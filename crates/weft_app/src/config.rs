//! Runtime configuration (weft.toml)

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use weft_animation::FrameClock;

use crate::error::{ConfigError, Result};

/// Top-level runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub frame: FrameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RuntimeConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: RuntimeConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded runtime config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.frame.validate()
    }
}

/// Frame clock settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FrameConfig {
    #[serde(default = "default_target_fps")]
    pub target_fps: u32,
    /// Advance by this many milliseconds every frame instead of measuring
    /// wall-clock time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_delta_ms: Option<f32>,
    /// Upper bound on a measured frame delta
    #[serde(default = "default_max_delta_ms")]
    pub max_delta_ms: f32,
}

fn default_target_fps() -> u32 {
    60
}

fn default_max_delta_ms() -> f32 {
    250.0
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            target_fps: default_target_fps(),
            fixed_delta_ms: None,
            max_delta_ms: default_max_delta_ms(),
        }
    }
}

impl FrameConfig {
    pub fn validate(&self) -> Result<()> {
        if self.target_fps == 0 {
            return Err(ConfigError::Invalid {
                field: "frame.target_fps",
                reason: "must be at least 1",
            });
        }
        if let Some(delta) = self.fixed_delta_ms {
            if !delta.is_finite() || delta < 0.0 {
                return Err(ConfigError::Invalid {
                    field: "frame.fixed_delta_ms",
                    reason: "must be a finite, non-negative number",
                });
            }
        }
        if !self.max_delta_ms.is_finite() || self.max_delta_ms <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "frame.max_delta_ms",
                reason: "must be a finite, positive number",
            });
        }
        Ok(())
    }

    /// Build the frame clock these settings describe
    pub fn clock(&self) -> FrameClock {
        let mut clock = match self.fixed_delta_ms {
            Some(delta) => FrameClock::fixed(delta),
            None => FrameClock::measured(self.max_delta_ms),
        };
        clock.set_target_fps(self.target_fps);
        clock
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive; `RUST_LOG` takes precedence
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = RuntimeConfig::from_toml_str("").unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.frame.target_fps, 60);
        assert_eq!(config.frame.max_delta_ms, 250.0);
        assert_eq!(config.frame.fixed_delta_ms, None);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_partial_sections() {
        let config = RuntimeConfig::from_toml_str(
            r#"
            [frame]
            fixed_delta_ms = 16.0

            [logging]
            filter = "weft_widgets=trace"
            "#,
        )
        .unwrap();
        assert_eq!(config.frame.fixed_delta_ms, Some(16.0));
        assert_eq!(config.frame.target_fps, 60);
        assert_eq!(config.logging.filter, "weft_widgets=trace");

        let clock = config.frame.clock();
        assert!(clock.is_fixed());
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = RuntimeConfig::from_toml_str("[frame]\ntarget_fps = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "frame.target_fps",
                ..
            }
        ));

        let err = RuntimeConfig::from_toml_str("[frame]\nfixed_delta_ms = -1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = RuntimeConfig::from_toml_str("[frame\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = RuntimeConfig::from_toml_str("[frame]\ntarget_fps = \"fast\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RuntimeConfig::load("/nonexistent/weft.toml").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert!(path.ends_with("weft.toml")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("weft-config-{}.toml", std::process::id()));
        fs::write(&path, "[frame]\ntarget_fps = 30\n").unwrap();
        let config = RuntimeConfig::load(&path);
        let _ = fs::remove_file(&path);

        let config = config.unwrap();
        assert_eq!(config.frame.target_fps, 30);
        assert_eq!(config.frame.clock().target_fps(), 30);
    }
}
