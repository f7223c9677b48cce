use serde::Deserialize;
use std::env;
use std::time::Duration;

pub const DEFAULT_ELEVENLABS_BASE_URL: &str = "https://api.elevenlabs.io";
pub const DEFAULT_ELEVENLABS_MODEL_ID: &str = "eleven_multilingual_v2";
pub const DEFAULT_ELEVENLABS_OUTPUT_FORMAT: &str = "mp3_44100_128";
pub const DEFAULT_AZURE_OUTPUT_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {name}")]
    Invalid { name: &'static str, value: String },

    #[error("unknown TTS provider {0:?} (expected \"elevenlabs\" or \"azure\")")]
    UnknownProvider(String),

    #[error("no TTS credentials configured: set ELEVENLABS_API_KEY or AZURE_SPEECH_KEY and AZURE_REGION")]
    NoProvider,
}

/// Server-level settings. Provider credentials live in [`ProviderConfig`] so a
/// missing secret never prevents the server from starting.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    pub voice_cache_ttl_secs: u64,
    pub http_timeout_secs: u64,
    /// Exact voice id or display-name substring preferred when a request names no voice
    pub default_voice: Option<String>,
    pub clean_text: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT", 8080)?,
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            voice_cache_ttl_secs: parse_var("VOICE_CACHE_TTL_SECS", 3600)?,
            http_timeout_secs: parse_var("HTTP_TIMEOUT_SECS", 60)?,
            default_voice: non_empty_var("MODAL_NAME").or_else(|| non_empty_var("DEFAULT_VOICE")),
            clean_text: env::var("CLEAN_TEXT")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn voice_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.voice_cache_ttl_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    ElevenLabs,
    Azure,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::ElevenLabs => "elevenlabs",
            ProviderKind::Azure => "azure",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "elevenlabs" | "eleven_labs" | "11labs" => Ok(ProviderKind::ElevenLabs),
            "azure" => Ok(ProviderKind::Azure),
            other => Err(ConfigError::UnknownProvider(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ElevenLabsConfig {
    pub api_key: String,
    pub base_url: String,
    pub model_id: String,
    pub output_format: String,
}

#[derive(Debug, Clone)]
pub struct AzureConfig {
    pub subscription_key: String,
    pub region: String,
    pub base_url: String,
    pub output_format: String,
}

/// Credentials and endpoints of the selected TTS provider
#[derive(Debug, Clone)]
pub enum ProviderConfig {
    ElevenLabs(ElevenLabsConfig),
    Azure(AzureConfig),
}

impl ProviderConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let kind = match non_empty_var("TTS_PROVIDER") {
            Some(name) => name.parse::<ProviderKind>()?,
            None if non_empty_var("ELEVENLABS_API_KEY").is_some() => ProviderKind::ElevenLabs,
            None if non_empty_var("AZURE_SPEECH_KEY").is_some() => ProviderKind::Azure,
            None => return Err(ConfigError::NoProvider),
        };

        match kind {
            ProviderKind::ElevenLabs => Ok(ProviderConfig::ElevenLabs(ElevenLabsConfig {
                api_key: required_var("ELEVENLABS_API_KEY")?,
                base_url: non_empty_var("ELEVENLABS_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_ELEVENLABS_BASE_URL.to_string()),
                model_id: non_empty_var("ELEVENLABS_MODEL_ID")
                    .unwrap_or_else(|| DEFAULT_ELEVENLABS_MODEL_ID.to_string()),
                output_format: non_empty_var("ELEVENLABS_OUTPUT_FORMAT")
                    .unwrap_or_else(|| DEFAULT_ELEVENLABS_OUTPUT_FORMAT.to_string()),
            })),
            ProviderKind::Azure => {
                let subscription_key = required_var("AZURE_SPEECH_KEY")?;
                let region = required_var("AZURE_REGION")?;
                let base_url = non_empty_var("AZURE_BASE_URL")
                    .unwrap_or_else(|| azure_base_url(&region));

                Ok(ProviderConfig::Azure(AzureConfig {
                    subscription_key,
                    region,
                    base_url,
                    output_format: non_empty_var("AZURE_OUTPUT_FORMAT")
                        .unwrap_or_else(|| DEFAULT_AZURE_OUTPUT_FORMAT.to_string()),
                }))
            }
        }
    }

    pub fn kind(&self) -> ProviderKind {
        match self {
            ProviderConfig::ElevenLabs(_) => ProviderKind::ElevenLabs,
            ProviderConfig::Azure(_) => ProviderKind::Azure,
        }
    }
}

pub fn azure_base_url(region: &str) -> String {
    format!("https://{}.tts.speech.microsoft.com", region)
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    non_empty_var(name).ok_or(ConfigError::Missing(name))
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}
