use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub openai: OpenAiSettings,
    #[serde(default)]
    pub conversation: ConversationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiSettings {
    /// Absent key puts the preference extractor on its unconfigured path.
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_chat_model")]
    pub chat_model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            chat_model: default_chat_model(),
            endpoint: default_endpoint(),
        }
    }
}

fn default_model() -> String { "gpt-4-turbo".to_string() }
fn default_chat_model() -> String { "gpt-3.5-turbo".to_string() }
fn default_endpoint() -> String { "https://api.openai.com/v1/chat/completions".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct ConversationSettings {
    #[serde(default = "default_conversation_base_url")]
    pub base_url: String,
}

impl Default for ConversationSettings {
    fn default() -> Self {
        Self { base_url: default_conversation_base_url() }
    }
}

fn default_conversation_base_url() -> String { "http://168.231.82.17:5000".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with AMOURA_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with AMOURA_)
            // e.g., AMOURA_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("AMOURA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Bare OPENAI_* variables take precedence over file values so the
        // service can run from a plain .env
        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("AMOURA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Overlay the well-known bare environment variables onto the built config
/// (OPENAI_API_KEY, OPENAI_MODEL, OPENAI_ENDPOINT, CONVERSATION_API_BASE)
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let api_key = env::var("OPENAI_API_KEY")
        .or_else(|_| env::var("AMOURA_OPENAI__API_KEY"))
        .ok();
    let model = env::var("OPENAI_MODEL").ok();
    let endpoint = env::var("OPENAI_ENDPOINT").ok();
    let conversation_base = env::var("CONVERSATION_API_BASE").ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(api_key) = api_key {
        builder = builder.set_override("openai.api_key", api_key)?;
    }
    if let Some(model) = model {
        builder = builder.set_override("openai.model", model)?;
    }
    if let Some(endpoint) = endpoint {
        builder = builder.set_override("openai.endpoint", endpoint)?;
    }
    if let Some(base) = conversation_base {
        builder = builder.set_override("conversation.base_url", base)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_defaults() {
        let openai = OpenAiSettings::default();
        assert!(openai.api_key.is_none());
        assert_eq!(openai.model, "gpt-4-turbo");
        assert_eq!(openai.chat_model, "gpt-3.5-turbo");
        assert!(openai.endpoint.contains("chat/completions"));
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }
}
