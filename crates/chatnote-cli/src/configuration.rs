use crate::error::{to_env_var, ConfigError, ENV_PREFIX};
use chatnote::annotations::{SourceFilter, NODE_SCORE_THRESHOLD};
use config::{Config, Environment};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SourceSettings {
    #[serde(default = "default_score_threshold")]
    pub score_threshold: f64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            score_threshold: default_score_threshold(),
        }
    }
}

impl SourceSettings {
    pub fn filter(&self) -> SourceFilter {
        SourceFilter::new(self.score_threshold)
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub sources: SourceSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_and_validate()
    }

    fn load_and_validate() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("sources.score_threshold", default_score_threshold())?
            .set_default("output.color", default_color())?
            // Layer on the environment variables
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Self = match config.try_deserialize() {
            Ok(settings) => settings,
            Err(err) => {
                tracing::debug!("Configuration error: {:?}", &err);
                return Err(match err {
                    config::ConfigError::NotFound(field) => ConfigError::MissingEnvVar {
                        env_var: to_env_var(&field),
                    },
                    other => ConfigError::Other(other),
                });
            }
        };

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_threshold(self.sources.score_threshold).map_err(|message| {
            ConfigError::InvalidValue {
                env_var: to_env_var("sources.score_threshold"),
                message,
            }
        })?;
        Ok(())
    }
}

fn check_threshold(threshold: f64) -> Result<f64, String> {
    if threshold.is_finite() {
        Ok(threshold)
    } else {
        Err(format!("{} is not a finite number", threshold))
    }
}

/// Parse a score threshold given on the command line
pub fn parse_threshold(value: &str) -> Result<f64, String> {
    let threshold: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("{} is not a number", value))?;
    check_threshold(threshold)
}

fn default_score_threshold() -> f64 {
    NODE_SCORE_THRESHOLD
}

fn default_color() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clean_env() {
        for (key, _) in env::vars() {
            if key.starts_with("CHATNOTE_") {
                env::remove_var(&key);
            }
        }
    }

    #[test]
    #[serial]
    fn test_default_settings() {
        clean_env();

        let settings = Settings::new().unwrap();
        assert_eq!(settings.sources.score_threshold, 0.25);
        assert!(settings.output.color);
        assert_eq!(settings.sources.filter(), SourceFilter::default());
    }

    #[test]
    #[serial]
    fn test_environment_override() {
        clean_env();
        env::set_var("CHATNOTE_SOURCES__SCORE_THRESHOLD", "0.5");
        env::set_var("CHATNOTE_OUTPUT__COLOR", "false");

        let settings = Settings::new().unwrap();
        assert_eq!(settings.sources.score_threshold, 0.5);
        assert!(!settings.output.color);

        // Clean up
        env::remove_var("CHATNOTE_SOURCES__SCORE_THRESHOLD");
        env::remove_var("CHATNOTE_OUTPUT__COLOR");
    }

    #[test]
    fn test_parse_threshold() {
        assert_eq!(parse_threshold("0.5"), Ok(0.5));
        assert_eq!(parse_threshold("1"), Ok(1.0));
        assert!(parse_threshold("NaN").is_err());
        assert!(parse_threshold("inf").is_err());
        assert!(parse_threshold("-inf").is_err());
        assert!(parse_threshold("high").is_err());
    }

    #[test]
    #[serial]
    fn test_non_finite_threshold_from_env() {
        clean_env();
        env::set_var("CHATNOTE_SOURCES__SCORE_THRESHOLD", "NaN");

        let result = Settings::new();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));

        env::remove_var("CHATNOTE_SOURCES__SCORE_THRESHOLD");
    }

    #[test]
    #[serial]
    fn test_invalid_threshold() {
        clean_env();
        env::set_var("CHATNOTE_SOURCES__SCORE_THRESHOLD", "high");

        let result = Settings::new();
        assert!(result.is_err());

        env::remove_var("CHATNOTE_SOURCES__SCORE_THRESHOLD");
    }
}
