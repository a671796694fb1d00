use clap::ValueEnum;
use std::env;

use crate::cli::args::OutputFormat;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub environment: String,
    pub output_format: OutputFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, applying defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_format = lookup("COST_OUTPUT_FORMAT").unwrap_or_else(|| "plain".to_string());
        let output_format = OutputFormat::from_str(&raw_format, true).map_err(|_| {
            anyhow::anyhow!(
                "COST_OUTPUT_FORMAT must be one of plain, json, table (got '{}')",
                raw_format
            )
        })?;

        let config = Config {
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "warn".to_string()),
            environment: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
            output_format,
        };

        config.validate()?;
        tracing::debug!("Config: loaded for {} environment", config.environment);
        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.log_level.trim().is_empty() {
            return Err(anyhow::anyhow!("LOG_LEVEL must not be empty"));
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.environment, "development");
        assert_eq!(config.output_format, OutputFormat::Plain);
        assert!(!config.is_production());
    }

    #[test]
    fn test_format_is_case_insensitive() {
        let config =
            Config::from_lookup(lookup_from(&[("COST_OUTPUT_FORMAT", "JSON")])).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = Config::from_lookup(lookup_from(&[("COST_OUTPUT_FORMAT", "xml")])).unwrap_err();
        assert!(err.to_string().contains("COST_OUTPUT_FORMAT"));
    }

    #[test]
    fn test_empty_log_level_rejected() {
        assert!(Config::from_lookup(lookup_from(&[("LOG_LEVEL", " ")])).is_err());
    }

    #[test]
    fn test_production_environment() {
        let config = Config::from_lookup(lookup_from(&[("APP_ENV", "production")])).unwrap();
        assert!(config.is_production());
    }
}
