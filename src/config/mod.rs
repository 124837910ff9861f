//! Configuration module for the admin backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::AppError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Populate the stores with the demo dataset at startup
    pub seed_demo: bool,
    /// API key for the text-generation collaborator
    pub ai_api_key: Option<String>,
    /// Model name passed to the text-generation collaborator
    pub ai_model: String,
    /// Display-only revenue figure shown on the dashboard
    pub revenue_display: String,
    /// Settings file restored at startup and rewritten on every settings save
    pub settings_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            log_level: "info".to_string(),
            seed_demo: true,
            ai_api_key: None,
            ai_model: "gemini-2.5-flash".to_string(),
            revenue_display: "€1.2M".to_string(),
            settings_file: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let bind_addr = match env::var("AUREUS_BIND_ADDR") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| AppError::Config(format!("Invalid AUREUS_BIND_ADDR: {}", raw)))?,
            Err(_) => defaults.bind_addr,
        };

        let log_level = env::var("AUREUS_LOG_LEVEL").unwrap_or(defaults.log_level);

        let seed_demo = match env::var("AUREUS_SEED_DEMO") {
            Ok(raw) => parse_flag(&raw)
                .ok_or_else(|| AppError::Config(format!("Invalid AUREUS_SEED_DEMO: {}", raw)))?,
            Err(_) => defaults.seed_demo,
        };

        let ai_api_key = env::var("AUREUS_AI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let ai_model = env::var("AUREUS_AI_MODEL").unwrap_or(defaults.ai_model);

        let revenue_display =
            env::var("AUREUS_REVENUE_DISPLAY").unwrap_or(defaults.revenue_display);

        let settings_file = env::var("AUREUS_SETTINGS_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            log_level,
            seed_demo,
            ai_api_key,
            ai_model,
            revenue_display,
            settings_file,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("AUREUS_BIND_ADDR");
        env::remove_var("AUREUS_LOG_LEVEL");
        env::remove_var("AUREUS_SEED_DEMO");
        env::remove_var("AUREUS_AI_API_KEY");
        env::remove_var("AUREUS_AI_MODEL");
        env::remove_var("AUREUS_REVENUE_DISPLAY");
        env::remove_var("AUREUS_SETTINGS_FILE");

        let config = Config::from_env().unwrap();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert!(config.seed_demo);
        assert!(config.ai_api_key.is_none());
        assert_eq!(config.ai_model, "gemini-2.5-flash");
        assert_eq!(config.revenue_display, "€1.2M");
        assert!(config.settings_file.is_none());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
