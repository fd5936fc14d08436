use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {env_var}")]
    MissingEnvVar { env_var: String },

    #[error("Invalid value for {env_var}: {message}")]
    InvalidValue { env_var: String, message: String },

    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

pub const ENV_PREFIX: &str = "CHATNOTE";

/// Map a dotted settings key to the environment variable that sets it
pub fn to_env_var(field: &str) -> String {
    format!(
        "{}_{}",
        ENV_PREFIX,
        field.replace('.', "__").to_uppercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_env_var() {
        assert_eq!(
            to_env_var("sources.score_threshold"),
            "CHATNOTE_SOURCES__SCORE_THRESHOLD"
        );
        assert_eq!(to_env_var("output"), "CHATNOTE_OUTPUT");
    }
}
