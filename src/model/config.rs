use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const ENV_CONFIG_PATH: &str = "APP_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// CORS section of the YAML configuration file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    /// Origins allowed to call the API. If empty, the default frontend
    /// origin is used.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub cors: CorsConfig,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_model: String,
    pub openai_temperature: f32,
    pub openai_max_tokens: u32,
    pub openai_timeout_secs: u64,
    pub allowed_origins: Vec<String>,
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_model: "gpt-4.1".to_string(),
            openai_temperature: 0.3,
            openai_max_tokens: 8000,
            openai_timeout_secs: 120,
            allowed_origins: vec![DEFAULT_ORIGIN.to_string()],
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Config {
    /// Load configuration from environment variables and the optional
    /// config file, falling back to defaults for anything absent.
    pub fn from_env() -> Self {
        let defaults = Config::default();

        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut allowed_origins = Self::load_config_file(&config_path)
            .map(|cf| cf.cors.allowed_origins)
            .filter(|origins| !origins.is_empty())
            .unwrap_or(defaults.allowed_origins);

        // The deployed frontend origin comes in via env; in development it
        // is usually just localhost.
        if let Ok(frontend) = std::env::var("FRONTEND_URL") {
            if !frontend.is_empty() && !allowed_origins.contains(&frontend) {
                allowed_origins.push(frontend);
            }
        }

        Self {
            openai_model: std::env::var("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            openai_temperature: env_parse("OPENAI_TEMPERATURE", defaults.openai_temperature),
            openai_max_tokens: env_parse("OPENAI_MAX_TOKENS", defaults.openai_max_tokens),
            openai_timeout_secs: env_parse("OPENAI_TIMEOUT_SECS", defaults.openai_timeout_secs),
            allowed_origins,
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: env_parse("PORT", defaults.port),
        }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => {
                let contents = contents.trim();
                if contents.is_empty() {
                    tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
                    return Some(ConfigFile::default());
                }

                match serde_yaml::from_str(contents) {
                    Ok(config) => {
                        tracing::info!(path = %path.display(), "Loaded configuration from file");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                        None
                    }
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_parse<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
